// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with [a link](https://example.com) and\nsome wrapped content.\n\n- Bullet point\n  - Nested item\n- [x] Done item\n1. Numbered\n\n> Quote\n\n---\n\n| Col | Other |\n|-----|-------|\n| a | b |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn with_frontmatter(body: &str) -> String {
    format!("---\ntitle: Bench\ntags: [a, b]\n---\n{body}")
}
