use crate::parsing::blocks::{Block, DispatchedBody};

pub fn check(body: &DispatchedBody) {
    assert_eq!(
        body.covered_lines(),
        body.line_count,
        "consumed + blank lines must cover the body exactly: {:?}",
        body.steps
    );

    for window in body.steps.windows(2) {
        assert!(
            window[0].line + window[0].consumed <= window[1].line,
            "steps overlap: {:?} then {:?}",
            window[0],
            window[1]
        );
    }

    let produced: usize = body.steps.iter().map(|s| s.blocks).sum();
    assert_eq!(produced, body.blocks.len(), "step block counts disagree");

    for block in &body.blocks {
        if let Some(text) = block.rich_text() {
            assert!(
                !text.segments().is_empty(),
                "empty rich text in {block:?}"
            );
        }
        if let Block::Table(table) = block {
            assert!(table.width() > 0, "zero-width table");
            assert!(!table.rows().is_empty(), "table without rows");
            for row in table.rows() {
                assert_eq!(row.len(), table.width(), "ragged table row in {table:?}");
            }
        }
    }
}
