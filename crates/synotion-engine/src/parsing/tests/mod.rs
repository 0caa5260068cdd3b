//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected outlines (.outline) are co-located in
//! `fixtures/`. Every fixture is also run through the invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, LineKind},
    inline::RichText,
    parse_body,
    snapshot::{invariants, normalize},
};

// Fixture-based outline tests

#[rstest]
#[case("basic_blocks")]
#[case("lists_and_tasks")]
#[case("tables")]
#[case("code_fences")]
#[case("links")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.outline")).unwrap();

    let body = parse_body(&md).unwrap();
    invariants(&body);

    assert_eq!(normalize(&body.blocks), expected.lines().collect::<Vec<_>>());
}

// Invariant tests

fn outline(md: &str) -> Vec<String> {
    let body = parse_body(md).unwrap();
    invariants(&body);
    normalize(&body.blocks)
}

/// Every line is either consumed by exactly one step or skipped as blank.
#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("text\n\n\n# H\n")]
#[case("|a|\n|-|\n|b|\n\n|c|\n|-|")]
#[case("```\nunterminated\n\n\nstill code")]
#[case("- a\n\n- b\n1. c\n\n> d\n***\n___")]
fn lines_are_fully_covered(#[case] md: &str) {
    let body = parse_body(md).unwrap();
    invariants(&body);
}

#[test]
fn blocks_keep_source_order() {
    assert_eq!(
        outline("# One\npara\n- two\n1. three\n> four\n---"),
        vec![
            "heading_1: One",
            "paragraph: para",
            "bulleted_list_item: two",
            "numbered_list_item: three",
            "quote: four",
            "divider",
        ]
    );
}

#[rstest]
#[case("-dash")]
#[case("|lonely pipe")]
#[case("1.no space")]
#[case("--")]
#[case("[ ] box")]
#[case("-\u{a0}nbsp bullet")]
#[case("1.\u{3000}ideographic space")]
fn unrecognized_lines_become_paragraphs(#[case] line: &str) {
    let body = parse_body(line).unwrap();
    assert_eq!(body.steps[0].kind, LineKind::Paragraph);
    assert_eq!(
        body.blocks,
        vec![Block::Paragraph {
            text: RichText::plain(line)
        }]
    );
}

#[test]
fn paragraph_stops_at_divider_and_table() {
    assert_eq!(
        outline("a\nb\n***\nc\n|x|\n|-|\nd"),
        vec![
            "paragraph: a b",
            "divider",
            "paragraph: c",
            "table(1x1)",
            "  | x |",
            "paragraph: d",
        ]
    );
}

#[test]
fn structure_is_flat() {
    let body = parse_body("- outer\n    - inner\n> > nested").unwrap();
    assert_eq!(
        normalize(&body.blocks),
        vec![
            "bulleted_list_item: outer",
            "bulleted_list_item: inner",
            "quote: > nested",
        ]
    );
}

#[test]
fn whitespace_only_input_has_no_blocks() {
    let body = parse_body("  \n\t\n").unwrap();
    assert!(body.blocks.is_empty());
    assert_eq!(body.blank_lines, 2);
}
