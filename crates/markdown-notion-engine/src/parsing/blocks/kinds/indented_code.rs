/// Code written as lines indented by four spaces.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static str = "    ";

    /// Returns the line with the indentation removed.
    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_are_stripped() {
        assert_eq!(IndentedCode::strip_indent("    let x = 1;"), Some("let x = 1;"));
        assert_eq!(IndentedCode::strip_indent("      nested"), Some("  nested"));
    }

    #[test]
    fn fewer_spaces_are_not_code() {
        assert_eq!(IndentedCode::strip_indent("   three"), None);
        assert_eq!(IndentedCode::strip_indent("\tTab"), None);
    }
}
