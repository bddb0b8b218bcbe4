//! # Opaque Regions
//!
//! First stage of the pipeline. Fenced code and display math are cut out of
//! the document and replaced by single-line [`Placeholder`] tokens, so the
//! line-oriented block rules never see their contents.
//!
//! ## Ordering
//!
//! Code fences are extracted before math: a `$$` inside a fence belongs to
//! the code, not to an equation.
//!
//! ## Ownership
//!
//! The side tables live in an [`OpaqueRegions`] value returned to the caller
//! and handed on to the block parser. Nothing is global, so independent
//! documents can be processed in parallel.

pub mod placeholder;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::ParseOptions;
use crate::models::Block;

pub use placeholder::{Placeholder, RegionKind};

/// A fenced code region with its language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRegion {
    pub language: String,
    pub content: String,
}

/// Side tables filled by [`extract`], keyed by placeholder index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueRegions {
    code: BTreeMap<usize, CodeRegion>,
    math: BTreeMap<usize, String>,
}

impl OpaqueRegions {
    pub fn code(&self, index: usize) -> Option<&CodeRegion> {
        self.code.get(&index)
    }

    pub fn math(&self, index: usize) -> Option<&str> {
        self.math.get(&index).map(String::as_str)
    }

    pub fn code_count(&self) -> usize {
        self.code.len()
    }

    pub fn math_count(&self) -> usize {
        self.math.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.math.is_empty()
    }

    /// Turns a placeholder back into the block it stands for.
    ///
    /// Returns `None` when the index is unknown to this document.
    pub fn resolve(&self, placeholder: Placeholder) -> Option<Block> {
        match placeholder.kind {
            RegionKind::Code => self
                .code(placeholder.index)
                .map(|r| Block::code(r.language.clone(), r.content.clone())),
            RegionKind::Math => self.math(placeholder.index).map(Block::equation),
        }
    }

    fn push_code(&mut self, region: CodeRegion) -> Placeholder {
        let index = self.code.len();
        self.code.insert(index, region);
        Placeholder::new(RegionKind::Code, index)
    }

    fn push_math(&mut self, expression: String) -> Placeholder {
        let index = self.math.len();
        self.math.insert(index, expression);
        Placeholder::new(RegionKind::Math, index)
    }
}

/// Opening line with optional language tag, body, closing line.
fn code_fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)^[ \t]*```[ \t]*([^\s`]*)[^\n]*\n(.*?)^[ \t]*```[ \t]*$")
            .expect("Invalid code fence regex")
    })
}

/// `$$ ... $$` starting and ending a line, possibly spanning several.
///
/// The body stops at the first `$$`. A pair followed by more text on its
/// closing line is not display math; the inline formatter handles it.
fn display_math_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*\$\$((?:[^$]|\$[^$])+?)\$\$[ \t]*$")
            .expect("Invalid display math regex")
    })
}

/// Replaces fenced code and display math with placeholders.
///
/// Line endings are normalised to `\n` first. Running this again on its own
/// output changes nothing and yields empty tables.
pub fn extract(text: &str, options: &ParseOptions) -> (String, OpaqueRegions) {
    let mut regions = OpaqueRegions::default();
    let text = text.replace("\r\n", "\n");

    let text = code_fence_regex()
        .replace_all(&text, |caps: &Captures<'_>| {
            let language = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|l| !l.is_empty())
                .unwrap_or(options.default_code_language.as_str())
                .to_string();
            let content = caps.get(2).map_or("", |m| m.as_str());
            regions
                .push_code(CodeRegion {
                    language,
                    content: trim_code(content).to_string(),
                })
                .to_string()
        })
        .into_owned();

    let text = display_math_regex()
        .replace_all(&text, |caps: &Captures<'_>| {
            let expression = caps.get(1).map_or("", |m| m.as_str()).trim();
            regions.push_math(expression.to_string()).to_string()
        })
        .into_owned();

    log::debug!(
        "extracted {} code and {} math regions",
        regions.code_count(),
        regions.math_count()
    );
    (text, regions)
}

/// Drops blank lines around the body and trailing whitespace, keeping the
/// indentation of the first line.
fn trim_code(content: &str) -> &str {
    let content = content.trim_end();
    let start = content
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .last()
        .map_or(0, |(i, _)| i + 1);
    &content[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(text: &str) -> (String, OpaqueRegions) {
        extract(text, &ParseOptions::default())
    }

    #[test]
    fn fenced_code_becomes_placeholder() {
        let (text, regions) = run("before\n```rust\nfn main() {}\n```\nafter");
        let p = Placeholder::new(RegionKind::Code, 0);
        assert_eq!(text, format!("before\n{p}\nafter"));
        assert_eq!(
            regions.code(0),
            Some(&CodeRegion {
                language: "rust".into(),
                content: "fn main() {}".into(),
            })
        );
    }

    #[test]
    fn missing_language_uses_default() {
        let (_, regions) = run("```\nplain\n```");
        assert_eq!(regions.code(0).map(|r| r.language.as_str()), Some("plain text"));
    }

    #[test]
    fn custom_default_language() {
        let options = ParseOptions {
            default_code_language: "text".into(),
        };
        let (_, regions) = extract("```\nx\n```", &options);
        assert_eq!(regions.code(0).map(|r| r.language.as_str()), Some("text"));
    }

    #[test]
    fn dollars_inside_code_are_not_math() {
        let (text, regions) = run("```sh\necho $$\nexport A=$$\n```");
        assert_eq!(regions.code_count(), 1);
        assert_eq!(regions.math_count(), 0);
        assert_eq!(regions.code(0).map(|r| r.content.as_str()), Some("echo $$\nexport A=$$"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn multi_line_display_math() {
        let (text, regions) = run("$$\na^2 + b^2\n= c^2\n$$");
        assert_eq!(text, Placeholder::new(RegionKind::Math, 0).to_string());
        assert_eq!(regions.math(0), Some("a^2 + b^2\n= c^2"));
    }

    #[rstest]
    #[case("$$a$$ text\nmore $$b$$")]
    #[case("$$x$$ costs\n\n# Head\n\nthen $$y$$")]
    #[case("$$x$$ and $$y$$")]
    #[case("$$a$$ is famous.\nAlso see $$b$$")]
    fn math_followed_by_text_is_left_inline(#[case] input: &str) {
        let (text, regions) = run(input);
        assert_eq!(text, input);
        assert_eq!(regions.math_count(), 0);
    }

    #[test]
    fn math_body_stops_at_first_closing_pair() {
        let (text, regions) = run("$$a$$\n# Head\n$$b$$");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "# Head");
        assert_eq!(regions.math(0), Some("a"));
        assert_eq!(regions.math(1), Some("b"));
    }

    #[test]
    fn indices_are_sequential_per_table() {
        let (text, regions) = run("```\na\n```\n$$x$$\n```py\nb\n```\n$$y$$");
        let lines: Vec<_> = text.lines().map(Placeholder::parse).collect();
        assert_eq!(
            lines,
            vec![
                Some(Placeholder::new(RegionKind::Code, 0)),
                Some(Placeholder::new(RegionKind::Math, 0)),
                Some(Placeholder::new(RegionKind::Code, 1)),
                Some(Placeholder::new(RegionKind::Math, 1)),
            ]
        );
        assert_eq!(regions.math(1), Some("y"));
    }

    #[test]
    fn unclosed_fence_is_left_alone() {
        let (text, regions) = run("```rust\nfn main() {}");
        assert_eq!(text, "```rust\nfn main() {}");
        assert!(regions.is_empty());
    }

    #[test]
    fn crlf_input_is_normalised() {
        let (text, regions) = run("```\r\nx\r\n```\r\nafter");
        assert_eq!(regions.code_count(), 1);
        assert!(text.ends_with("\nafter"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let (once, _) = run("# T\n```\ncode\n```\n$$\nm\n$$\ntext");
        let (twice, regions) = run(&once);
        assert_eq!(once, twice);
        assert!(regions.is_empty());
    }

    #[test]
    fn code_keeps_first_line_indentation() {
        let (_, regions) = run("```\n\n    indented\n\n```");
        assert_eq!(regions.code(0).map(|r| r.content.as_str()), Some("    indented"));
    }

    #[test]
    fn resolve_unknown_index_is_none() {
        let (_, regions) = run("```\nx\n```");
        assert!(regions.resolve(Placeholder::new(RegionKind::Code, 0)).is_some());
        assert!(regions.resolve(Placeholder::new(RegionKind::Code, 1)).is_none());
        assert!(regions.resolve(Placeholder::new(RegionKind::Math, 0)).is_none());
    }
}
