use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::Segment;
use crate::models::{Annotations, TextRun};

/// A single rewrite pass of the inline formatter.
///
/// Each pass owns its pattern. [`InlinePass::ORDER`] fixes precedence:
/// earlier passes claim text first, later passes only see what is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    BoldItalic,
    Bold,
    Italic,
    Math,
    Strikethrough,
    Code,
    Link,
}

impl InlinePass {
    pub const ORDER: [Self; 7] = [
        Self::BoldItalic,
        Self::Bold,
        Self::Italic,
        Self::Math,
        Self::Strikethrough,
        Self::Code,
        Self::Link,
    ];

    fn regex(self) -> &'static Regex {
        static BOLD_ITALIC: OnceLock<Regex> = OnceLock::new();
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        static MATH: OnceLock<Regex> = OnceLock::new();
        static STRIKETHROUGH: OnceLock<Regex> = OnceLock::new();
        static CODE: OnceLock<Regex> = OnceLock::new();
        static LINK: OnceLock<Regex> = OnceLock::new();

        let (cell, pattern) = match self {
            Self::BoldItalic => (
                &BOLD_ITALIC,
                r"\*\*\*(.+?)\*\*\*|___(.+?)___|\*\*_(.+?)_\*\*|__\*(.+?)\*__|\*__(.+?)__\*|_\*\*(.+?)\*\*_",
            ),
            Self::Bold => (&BOLD, r"\*\*(.+?)\*\*|__(.+?)__"),
            Self::Italic => (&ITALIC, r"\*(.+?)\*|_(.+?)_"),
            Self::Math => (&MATH, r"\$\$(.+?)\$\$|\$(.+?)\$"),
            Self::Strikethrough => (&STRIKETHROUGH, r"~~(.+?)~~|~(.+?)~"),
            Self::Code => (&CODE, r"`(.+?)`"),
            Self::Link => (&LINK, r"\[(.+?)\]\((.+?)\)"),
        };
        cell.get_or_init(|| Regex::new(pattern).expect("Invalid inline pattern"))
    }

    fn run_for(self, caps: &Captures<'_>) -> TextRun {
        match self {
            Self::BoldItalic => TextRun::styled(first_group(caps), Annotations::BOLD_ITALIC),
            Self::Bold => TextRun::styled(first_group(caps), Annotations::BOLD),
            Self::Italic => TextRun::styled(first_group(caps), Annotations::ITALIC),
            Self::Math => TextRun::equation(first_group(caps)),
            Self::Strikethrough => {
                TextRun::styled(first_group(caps), Annotations::STRIKETHROUGH)
            }
            Self::Code => TextRun::styled(first_group(caps), Annotations::CODE),
            Self::Link => TextRun::link(
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            ),
        }
    }

    /// Rewrites every raw segment; resolved runs pass through untouched.
    pub fn apply(self, segments: Vec<Segment>) -> Vec<Segment> {
        segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Raw(text) => self.split(&text),
                run @ Segment::Run(_) => vec![run],
            })
            .collect()
    }

    fn split(self, text: &str) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut prev = 0;
        for caps in self.regex().captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if m.start() > prev {
                out.push(Segment::Raw(text[prev..m.start()].to_string()));
            }
            out.push(Segment::Run(self.run_for(&caps)));
            prev = m.end();
        }
        if prev < text.len() {
            out.push(Segment::Raw(text[prev..].to_string()));
        }
        out
    }
}

/// Alternation patterns put the content in whichever group matched.
fn first_group<'t>(caps: &Captures<'t>) -> &'t str {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map_or("", |m| m.as_str())
}
