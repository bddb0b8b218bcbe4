use crate::models::HeadingLevel;

/// ATX heading: a run of `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Splits a heading line into its level and text.
    ///
    /// Runs longer than the block API supports return `None` so the line
    /// falls through to later rules.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let depth = line.chars().take_while(|&c| c == Self::MARKER).count();
        let rest = line[depth..].strip_prefix(' ')?;
        let level = HeadingLevel::from_depth(depth)?;
        Some((level, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((HeadingLevel::H1, "Title")))]
    #[case("## Sub", Some((HeadingLevel::H2, "Sub")))]
    #[case("### Deep", Some((HeadingLevel::H3, "Deep")))]
    #[case("#### Deeper", None)]
    #[case("#NoSpace", None)]
    #[case("plain", None)]
    fn parse_heading(#[case] line: &str, #[case] expected: Option<(HeadingLevel, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
