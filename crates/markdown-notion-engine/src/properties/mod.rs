//! # Page Properties
//!
//! Typed database property values and their JSON form in the page API.
//! [`PropertyMapper`] writes values out; [`property_value`] reads a
//! property object returned by the API back into a [`PropertyValue`].

use serde_json::{Map, Value, json};

/// A user or bot reference inside a `people` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub object: String,
}

impl Person {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: "user".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(String),
    RichText(String),
    Number(f64),
    Status(String),
    Select(String),
    MultiSelect(Vec<String>),
    Url(String),
    /// A single external file, published under the name "Cover".
    Files(String),
    /// Related page ids.
    Relation(Vec<String>),
    People(Vec<Person>),
    /// Pre-formatted date strings, interpreted in the mapper's time zone.
    Date { start: String, end: Option<String> },
}

impl PropertyValue {
    /// The property type key used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::Status(_) => "status",
            Self::Select(_) => "select",
            Self::MultiSelect(_) => "multi_select",
            Self::Url(_) => "url",
            Self::Files(_) => "files",
            Self::Relation(_) => "relation",
            Self::People(_) => "people",
            Self::Date { .. } => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapper {
    /// Title and rich text content is cut to this many chars.
    pub max_text_length: usize,
    pub time_zone: String,
}

impl Default for PropertyMapper {
    fn default() -> Self {
        Self {
            max_text_length: 1024,
            time_zone: "Asia/Shanghai".into(),
        }
    }
}

impl PropertyMapper {
    pub fn new(max_text_length: usize, time_zone: impl Into<String>) -> Self {
        Self {
            max_text_length,
            time_zone: time_zone.into(),
        }
    }

    /// Encodes one value as `{<kind>: ...}`.
    pub fn to_json(&self, value: &PropertyValue) -> Value {
        let body = match value {
            PropertyValue::Title(text) | PropertyValue::RichText(text) => json!([{
                "type": "text",
                "text": { "content": self.truncate(text) },
            }]),
            PropertyValue::Number(n) => json!(n),
            PropertyValue::Status(name) | PropertyValue::Select(name) => json!({ "name": name }),
            PropertyValue::MultiSelect(names) => {
                Value::Array(names.iter().map(|n| json!({ "name": n })).collect())
            }
            PropertyValue::Url(url) => json!(url),
            PropertyValue::Files(url) => json!([{
                "type": "external",
                "name": "Cover",
                "external": { "url": url },
            }]),
            PropertyValue::Relation(ids) => {
                Value::Array(ids.iter().map(|id| json!({ "id": id })).collect())
            }
            PropertyValue::People(people) => Value::Array(
                people
                    .iter()
                    .map(|p| json!({ "id": p.id, "object": p.object }))
                    .collect(),
            ),
            PropertyValue::Date { start, end } => {
                let mut date = json!({ "start": start, "time_zone": self.time_zone });
                if let Some(end) = end {
                    date["end"] = json!(end);
                }
                date
            }
        };

        let mut object = Map::new();
        object.insert(value.kind().into(), body);
        Value::Object(object)
    }

    /// Builds a `properties` object from named values, skipping `None`.
    pub fn map<I, K>(&self, values: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = (K, Option<PropertyValue>)>,
        K: Into<String>,
    {
        values
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.into(), self.to_json(&v))))
            .collect()
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.max_text_length) {
            Some((i, _)) => &text[..i],
            None => text,
        }
    }
}

/// Reads a property object as returned by the page API.
///
/// Only the first entry of `title`, `rich_text` and `files` is considered.
/// Unknown types and unexpected shapes give `None`.
pub fn property_value(property: &Value) -> Option<PropertyValue> {
    let kind = property.get("type")?.as_str()?;
    let content = property.get(kind).filter(|c| !c.is_null())?;
    let str_field = |v: &Value, key: &str| v.get(key)?.as_str().map(str::to_string);

    let value = match kind {
        "title" => PropertyValue::Title(str_field(content.get(0)?, "plain_text")?),
        "rich_text" => PropertyValue::RichText(str_field(content.get(0)?, "plain_text")?),
        "number" => PropertyValue::Number(content.as_f64()?),
        "status" => PropertyValue::Status(str_field(content, "name")?),
        "select" => PropertyValue::Select(str_field(content, "name")?),
        "multi_select" => PropertyValue::MultiSelect(
            content
                .as_array()?
                .iter()
                .filter_map(|o| str_field(o, "name"))
                .collect(),
        ),
        "url" => PropertyValue::Url(content.as_str()?.to_string()),
        "files" => {
            let file = content.get(0)?;
            if file.get("type")?.as_str()? != "external" {
                return None;
            }
            PropertyValue::Files(str_field(file.get("external")?, "url")?)
        }
        "relation" => PropertyValue::Relation(
            content
                .as_array()?
                .iter()
                .filter_map(|o| str_field(o, "id"))
                .collect(),
        ),
        "people" => PropertyValue::People(
            content
                .as_array()?
                .iter()
                .filter_map(|o| {
                    Some(Person {
                        id: str_field(o, "id")?,
                        object: str_field(o, "object").unwrap_or_else(|| "user".into()),
                    })
                })
                .collect(),
        ),
        "date" => PropertyValue::Date {
            start: str_field(content, "start")?,
            end: str_field(content, "end"),
        },
        _ => return None,
    };
    Some(value)
}
