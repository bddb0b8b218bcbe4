use std::sync::OnceLock;

use regex::Regex;

/// Pipe-table syntax shared by the block classifier and the fallback
/// renderer.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    fn delimiter_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\|(?:[ \t]*:?-+:?[ \t]*\|)+[ \t]*$").expect("Invalid table delimiter regex")
        })
    }

    /// A row starts with a pipe and has at least one more.
    pub fn matches(line: &str) -> bool {
        line.strip_prefix(Self::PIPE)
            .is_some_and(|rest| rest.contains(Self::PIPE))
    }

    /// Header separator such as `|---|:--:|`.
    pub fn is_delimiter(line: &str) -> bool {
        Self::delimiter_regex().is_match(line)
    }

    /// Trimmed text between consecutive pipes. Text before the first pipe
    /// and after the last one is ignored.
    pub fn cells(line: &str) -> Vec<&str> {
        let parts: Vec<&str> = line.split(Self::PIPE).collect();
        if parts.len() < 3 {
            return Vec::new();
        }
        parts[1..parts.len() - 1].iter().map(|c| c.trim()).collect()
    }

    /// Number of grid columns implied by a row: its pipes minus one.
    pub fn column_count(line: &str) -> usize {
        line.matches(Self::PIPE).count().saturating_sub(1).max(1)
    }
}
