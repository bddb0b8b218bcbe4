/// Style flags carried by a text run.
///
/// Flags combine freely, although the inline formatter only ever produces
/// the combinations its patterns can express (bold+italic, or one flag).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl Annotations {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        code: false,
    };

    pub const BOLD: Self = Self {
        bold: true,
        ..Self::PLAIN
    };

    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::PLAIN
    };

    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
        ..Self::PLAIN
    };

    pub const STRIKETHROUGH: Self = Self {
        strikethrough: true,
        ..Self::PLAIN
    };

    pub const CODE: Self = Self {
        code: true,
        ..Self::PLAIN
    };

    /// Returns true when no flag is set.
    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

/// A leaf of formatted text inside a block.
///
/// A run is either styled text (optionally linked) or an inline equation,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRun {
    Text {
        content: String,
        annotations: Annotations,
        link: Option<String>,
    },
    Equation {
        expression: String,
    },
}

impl TextRun {
    /// Unstyled text.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::PLAIN)
    }

    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        Self::Text {
            content: content.into(),
            annotations,
            link: None,
        }
    }

    /// Unstyled text pointing at `url`.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            annotations: Annotations::PLAIN,
            link: Some(url.into()),
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::Equation {
            expression: expression.into(),
        }
    }

    /// The visible text of the run: content for text, expression for equations.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text { content, .. } => content,
            Self::Equation { expression } => expression,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plain_text().is_empty()
    }
}
