//! # Block API Encoding
//!
//! Serialises the block tree into the JSON accepted by the block API's
//! "append children" endpoint. Every block is
//! `{"object": "block", "type": <kind>, <kind>: {...}}`; the kind name is
//! repeated as the key of the payload object.
//!
//! Text runs longer than [`EncodeOptions::max_text_length`] are split into
//! consecutive runs with identical styling, since the API rejects long
//! content. Equations are never split.

use serde_json::{Map, Value, json};

use crate::models::{Annotations, Block, TextRun};

/// Settings for [`Encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Maximum characters per text run; 0 disables splitting.
    pub max_text_length: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_text_length: 2000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encodes a block sequence as a JSON array.
    pub fn encode(&self, blocks: &[Block]) -> Value {
        Value::Array(blocks.iter().map(|b| self.block(b)).collect())
    }

    pub fn block(&self, block: &Block) -> Value {
        let body = match block {
            Block::Heading { rich_text, .. } => json!({
                "rich_text": self.rich_text(rich_text),
                "color": "default",
                "is_toggleable": false,
            }),
            Block::Paragraph { rich_text } | Block::Quote { rich_text } => json!({
                "rich_text": self.rich_text(rich_text),
                "color": "default",
            }),
            Block::BulletedListItem(item) | Block::NumberedListItem(item) => {
                let mut body = json!({
                    "rich_text": self.rich_text(&item.rich_text),
                    "color": "default",
                });
                if !item.children.is_empty() {
                    body["children"] = self.encode(&item.children);
                }
                body
            }
            Block::Divider => json!({}),
            Block::Code { language, text } => json!({
                "language": language,
                "rich_text": self.plain_text(text),
            }),
            Block::Equation { expression } => json!({ "expression": expression }),
            Block::Image { url, caption } => {
                let mut body = json!({
                    "type": "external",
                    "external": { "url": url },
                });
                if let Some(caption) = caption {
                    body["caption"] = self.plain_text(caption);
                }
                body
            }
            Block::TableOfContents => json!({ "color": "default" }),
        };

        let kind = block.type_name();
        let mut object = Map::new();
        object.insert("object".into(), json!("block"));
        object.insert("type".into(), json!(kind));
        object.insert(kind.into(), body);
        Value::Object(object)
    }

    /// Encodes runs as a `rich_text` array.
    pub fn rich_text(&self, runs: &[TextRun]) -> Value {
        Value::Array(runs.iter().flat_map(|run| self.run(run)).collect())
    }

    fn plain_text(&self, text: &str) -> Value {
        self.rich_text(&[TextRun::plain(text)])
    }

    fn run(&self, run: &TextRun) -> Vec<Value> {
        match run {
            TextRun::Equation { expression } => vec![json!({
                "type": "equation",
                "equation": { "expression": expression },
            })],
            TextRun::Text {
                content,
                annotations,
                link,
            } => split_chars(content, self.options.max_text_length)
                .into_iter()
                .map(|chunk| text_object(chunk, *annotations, link.as_deref()))
                .collect(),
        }
    }
}

fn text_object(content: &str, annotations: Annotations, link: Option<&str>) -> Value {
    json!({
        "type": "text",
        "text": {
            "content": content,
            "link": link.map(|url| json!({ "url": url })),
        },
        "annotations": {
            "bold": annotations.bold,
            "italic": annotations.italic,
            "strikethrough": annotations.strikethrough,
            "underline": false,
            "code": annotations.code,
            "color": "default",
        },
        "plain_text": content,
        "href": link,
    })
}

/// Splits on char boundaries into pieces of at most `max` chars.
fn split_chars(text: &str, max: usize) -> Vec<&str> {
    if max == 0 || text.chars().count() <= max {
        return vec![text];
    }
    let mut out = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (i, _) in text.char_indices() {
        if count == max {
            out.push(&text[start..i]);
            start = i;
            count = 0;
        }
        count += 1;
    }
    out.push(&text[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeadingLevel, ListItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_payload() {
        let block = Block::heading(HeadingLevel::H2, vec![TextRun::plain("Hi")]);
        assert_eq!(
            Encoder::default().block(&block),
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{
                        "type": "text",
                        "text": { "content": "Hi", "link": null },
                        "annotations": {
                            "bold": false,
                            "italic": false,
                            "strikethrough": false,
                            "underline": false,
                            "code": false,
                            "color": "default"
                        },
                        "plain_text": "Hi",
                        "href": null
                    }],
                    "color": "default",
                    "is_toggleable": false
                }
            })
        );
    }

    #[test]
    fn link_sets_url_and_href() {
        let value = Encoder::default().rich_text(&[TextRun::link("docs", "https://d.io")]);
        assert_eq!(value[0]["text"]["link"], json!({ "url": "https://d.io" }));
        assert_eq!(value[0]["href"], json!("https://d.io"));
    }

    #[test]
    fn equation_run() {
        let value = Encoder::default().rich_text(&[TextRun::equation("x^2")]);
        assert_eq!(
            value,
            json!([{ "type": "equation", "equation": { "expression": "x^2" } }])
        );
    }

    #[test]
    fn children_only_when_present() {
        let leaf = Block::BulletedListItem(ListItem::new(vec![TextRun::plain("b")]));
        let parent = Block::BulletedListItem(
            ListItem::new(vec![TextRun::plain("a")]).with_children(vec![leaf]),
        );
        let value = Encoder::default().block(&parent);
        let children = &value["bulleted_list_item"]["children"];
        assert_eq!(children.as_array().map(Vec::len), Some(1));
        assert!(children[0]["bulleted_list_item"].get("children").is_none());
    }

    #[test]
    fn image_caption_omitted_when_absent() {
        let encoder = Encoder::default();
        let bare = encoder.block(&Block::Image {
            url: "u".into(),
            caption: None,
        });
        assert_eq!(
            bare["image"],
            json!({ "type": "external", "external": { "url": "u" } })
        );
        let captioned = encoder.block(&Block::Image {
            url: "u".into(),
            caption: Some("c".into()),
        });
        assert_eq!(captioned["image"]["caption"][0]["plain_text"], json!("c"));
    }

    #[test]
    fn code_and_equation_blocks() {
        let encoder = Encoder::default();
        let code = encoder.block(&Block::code("rust", "fn x() {}"));
        assert_eq!(code["code"]["language"], json!("rust"));
        assert_eq!(code["code"]["rich_text"][0]["text"]["content"], json!("fn x() {}"));
        let eq = encoder.block(&Block::equation("a+b"));
        assert_eq!(eq["equation"], json!({ "expression": "a+b" }));
    }

    #[test]
    fn long_runs_are_split_keeping_style() {
        let encoder = Encoder::new(EncodeOptions { max_text_length: 3 });
        let value = encoder.rich_text(&[TextRun::styled("abcdefg", Annotations::BOLD)]);
        let contents: Vec<_> = value
            .as_array()
            .into_iter()
            .flatten()
            .map(|r| r["text"]["content"].clone())
            .collect();
        assert_eq!(contents, vec![json!("abc"), json!("def"), json!("g")]);
        assert!(value.as_array().into_iter().flatten().all(|r| r["annotations"]["bold"] == json!(true)));
    }

    #[test]
    fn split_respects_char_boundaries() {
        assert_eq!(split_chars("ééé", 2), vec!["éé", "é"]);
        assert_eq!(split_chars("abc", 0), vec!["abc"]);
        assert_eq!(split_chars("", 5), vec![""]);
    }
}
