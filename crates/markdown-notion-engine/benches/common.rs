/// A document touching every block kind, repeated `size` times.
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n$$\nE = mc^2\n$$\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n";
    base.repeat(size)
}

/// One bullet per level, each indented two spaces deeper than the last.
pub fn generate_deep_list(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}- item {level}\n", "  ".repeat(level)))
        .collect()
}
