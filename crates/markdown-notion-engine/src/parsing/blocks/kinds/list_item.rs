use crate::models::{Block, ListItem as ListItemContent};

/// Which marker introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1. item`
    Numbered,
    /// `- item`
    Bulleted,
}

impl ListKind {
    /// Wraps parsed item content into the matching block.
    pub fn block(self, content: ListItemContent) -> Block {
        match self {
            Self::Numbered => Block::NumberedListItem(content),
            Self::Bulleted => Block::BulletedListItem(content),
        }
    }
}

/// A recognised list-item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub kind: ListKind,
    /// Count of leading spaces, used as-is for nesting.
    pub indent: usize,
    /// Item text after the marker.
    pub content: &'a str,
}

/// List item syntax: leading spaces, then `N. ` or `- `.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";
    pub const NUMBER_TERMINATOR: &'static str = ". ";

    /// Numbered markers are checked before bullets.
    pub fn parse(line: &str) -> Option<ListMarker<'_>> {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        let rest = &line[indent..];
        Self::numbered(rest)
            .map(|content| (ListKind::Numbered, content))
            .or_else(|| {
                rest.strip_prefix(Self::BULLET)
                    .map(|content| (ListKind::Bulleted, content))
            })
            .map(|(kind, content)| ListMarker {
                kind,
                indent,
                content,
            })
    }

    fn numbered(rest: &str) -> Option<&str> {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        rest[digits..].strip_prefix(Self::NUMBER_TERMINATOR)
    }
}
