use std::sync::OnceLock;

use regex::Regex;

/// `![caption](url)` anywhere on the line.
pub struct Image;

impl Image {
    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    /// Returns `(url, caption)`; an empty caption is reported as `None`.
    pub fn parse(line: &str) -> Option<(&str, Option<&str>)> {
        let caps = Self::regex().captures(line)?;
        let url = caps.get(2).map_or("", |m| m.as_str());
        let caption = caps.get(1).map(|m| m.as_str()).filter(|c| !c.is_empty());
        Some((url, caption))
    }
}
