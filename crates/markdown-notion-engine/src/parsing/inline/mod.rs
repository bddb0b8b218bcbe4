//! # Inline Formatting
//!
//! Turns one line of text into a sequence of [`TextRun`]s.
//!
//! ## Architecture
//!
//! The line starts as a single raw [`Segment`]. Each [`InlinePass`] in
//! [`InlinePass::ORDER`] splits the raw segments it can match into resolved
//! runs and leftover raw text; runs produced by an earlier pass are never
//! rescanned. Whatever is still raw at the end becomes plain text.
//!
//! ## Precedence
//!
//! bold-italic → bold → italic → inline math (`$x$`, or `$$x$$` sharing a
//! line with text) → strikethrough (`~`) → inline code (`` ` ``) → link
//! (`[label](url)`)
//!
//! ## Degradation
//!
//! Unmatched or overlapping markers stay literal. The formatter never fails
//! and never emits empty runs. Link labels are not formatted further.

pub mod pass;
pub mod types;

pub use pass::InlinePass;
pub use types::Segment;

use crate::models::TextRun;

/// Formats a single line into text runs.
pub fn format_inline(line: &str) -> Vec<TextRun> {
    InlinePass::ORDER
        .iter()
        .fold(vec![Segment::Raw(line.to_string())], |segments, pass| {
            pass.apply(segments)
        })
        .into_iter()
        .map(Segment::into_run)
        .filter(|run| !run.is_empty())
        .collect()
}
