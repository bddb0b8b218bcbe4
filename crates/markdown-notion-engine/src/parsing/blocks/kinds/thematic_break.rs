/// Horizontal rule: a line of three or more hyphens and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHAR: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        line.len() >= Self::MIN_LEN && line.chars().all(|c| c == Self::CHAR)
    }
}
