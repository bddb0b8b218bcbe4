use super::rich_text::TextRun;

/// Heading depth supported by the block API. Deeper markdown headings are
/// not representable and degrade to paragraphs during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a `#` run length onto a level; anything outside 1..=3 is `None`.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// Content of a bulleted or numbered list item.
///
/// `children` only ever holds nested list items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub rich_text: Vec<TextRun>,
    pub children: Vec<Block>,
}

impl ListItem {
    pub fn new(rich_text: Vec<TextRun>) -> Self {
        Self {
            rich_text,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }
}

/// A node in the converted document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        rich_text: Vec<TextRun>,
    },
    Paragraph {
        rich_text: Vec<TextRun>,
    },
    BulletedListItem(ListItem),
    NumberedListItem(ListItem),
    Quote {
        rich_text: Vec<TextRun>,
    },
    Divider,
    /// Raw code; never run through the inline formatter.
    Code {
        language: String,
        text: String,
    },
    Equation {
        expression: String,
    },
    Image {
        url: String,
        caption: Option<String>,
    },
    /// Not produced by the parser; available to callers assembling pages.
    TableOfContents,
}

impl Block {
    pub fn heading(level: HeadingLevel, rich_text: Vec<TextRun>) -> Self {
        Self::Heading { level, rich_text }
    }

    pub fn paragraph(rich_text: Vec<TextRun>) -> Self {
        Self::Paragraph { rich_text }
    }

    pub fn quote(rich_text: Vec<TextRun>) -> Self {
        Self::Quote { rich_text }
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Code {
            language: language.into(),
            text: text.into(),
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::Equation {
            expression: expression.into(),
        }
    }

    /// The block API's discriminator for this block.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Heading { level, .. } => match level {
                HeadingLevel::H1 => "heading_1",
                HeadingLevel::H2 => "heading_2",
                HeadingLevel::H3 => "heading_3",
            },
            Self::Paragraph { .. } => "paragraph",
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::NumberedListItem(_) => "numbered_list_item",
            Self::Quote { .. } => "quote",
            Self::Divider => "divider",
            Self::Code { .. } => "code",
            Self::Equation { .. } => "equation",
            Self::Image { .. } => "image",
            Self::TableOfContents => "table_of_contents",
        }
    }

    /// Rich text for kinds that carry it.
    pub fn rich_text(&self) -> Option<&[TextRun]> {
        match self {
            Self::Heading { rich_text, .. }
            | Self::Paragraph { rich_text }
            | Self::Quote { rich_text } => Some(rich_text),
            Self::BulletedListItem(item) | Self::NumberedListItem(item) => Some(&item.rich_text),
            _ => None,
        }
    }

    pub fn list_item(&self) -> Option<&ListItem> {
        match self {
            Self::BulletedListItem(item) | Self::NumberedListItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn list_item_mut(&mut self) -> Option<&mut ListItem> {
        match self {
            Self::BulletedListItem(item) | Self::NumberedListItem(item) => Some(item),
            _ => None,
        }
    }

    /// Nested list items; empty for every other kind.
    pub fn children(&self) -> &[Block] {
        self.list_item()
            .map(|item| item.children.as_slice())
            .unwrap_or_default()
    }
}
