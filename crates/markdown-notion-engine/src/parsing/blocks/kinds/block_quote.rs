/// Blockquote block type with owned delimiter constant.
///
/// Only a single level is recognised; `>>` is treated as ordinary text.
pub struct BlockQuote;

impl BlockQuote {
    /// The prefix that opens a quote line, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text, or `None` when the line is not a quote or
    /// the quote is empty.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).filter(|rest| !rest.is_empty())
    }
}
