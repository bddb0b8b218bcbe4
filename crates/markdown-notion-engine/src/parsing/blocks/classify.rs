use crate::models::HeadingLevel;
use crate::parsing::opaque::Placeholder;

use super::kinds::{
    BlockQuote, Heading, Image, IndentedCode, ListItem, ListKind, TableRow, ThematicBreak,
};

/// Classification of a single line, borrowing its text.
///
/// Classification is purely local: it never looks at surrounding lines.
/// Table and indented-code continuation is the builder's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Pipe-table row or delimiter row.
    TableRow,
    ListItem {
        kind: ListKind,
        indent: usize,
        content: &'a str,
    },
    /// Line indented by four spaces, indentation removed.
    IndentedCode(&'a str),
    Heading {
        level: HeadingLevel,
        content: &'a str,
    },
    Divider,
    Quote(&'a str),
    Placeholder(Placeholder),
    Image {
        url: &'a str,
        caption: Option<&'a str>,
    },
    Paragraph(&'a str),
    Blank,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Applies the block rules in precedence order; the first match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if TableRow::matches(line) {
            return LineClass::TableRow;
        }
        if let Some(marker) = ListItem::parse(line) {
            return LineClass::ListItem {
                kind: marker.kind,
                indent: marker.indent,
                content: marker.content,
            };
        }
        if let Some(code) = IndentedCode::strip_indent(line) {
            return LineClass::IndentedCode(code);
        }
        if let Some((level, content)) = Heading::parse(line) {
            return LineClass::Heading { level, content };
        }
        if ThematicBreak::matches(line) {
            return LineClass::Divider;
        }
        if let Some(content) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote(content);
        }
        if let Some(placeholder) = Placeholder::parse(line) {
            return LineClass::Placeholder(placeholder);
        }
        if let Some((url, caption)) = Image::parse(line) {
            return LineClass::Image { url, caption };
        }
        let text = line.trim();
        if text.is_empty() {
            LineClass::Blank
        } else {
            LineClass::Paragraph(text)
        }
    }
}
