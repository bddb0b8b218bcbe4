pub mod blocks;
pub mod inline;
pub mod opaque;
pub mod table;

use crate::models::Block;

use blocks::BlockParser;

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Language recorded for untagged fences and indented code.
    pub default_code_language: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_code_language: "plain text".to_string(),
        }
    }
}

/// Converts a whole document, trimming surrounding whitespace first.
pub fn parse_markdown(markdown: &str) -> Vec<Block> {
    parse_markdown_with(markdown, &ParseOptions::default())
}

pub fn parse_markdown_with(markdown: &str, options: &ParseOptions) -> Vec<Block> {
    parse_document(markdown.trim(), options)
}

/// Runs the pipeline on `text` as given: extract opaque regions, then feed
/// every line through a fresh [`BlockParser`].
pub fn parse_document(text: &str, options: &ParseOptions) -> Vec<Block> {
    let (text, regions) = opaque::extract(text, options);
    let mut parser = BlockParser::new(regions, options.clone());
    for line in text.split('\n') {
        parser.push_line(line);
    }
    let blocks = parser.finish();
    log::debug!("parsed {} top-level blocks", blocks.len());
    blocks
}
