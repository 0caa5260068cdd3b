use crate::parsing::lines::SourceLines;

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    error::BlockError,
    kinds::{BlockQuote, CodeFence, Heading, ListKind, Paragraph, PipeTable, TaskItem},
    types::{Block, Consumed},
};

/// One dispatch iteration that handed lines to a block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index of the line the parser started on.
    pub line: usize,
    pub kind: LineKind,
    /// Lines the parser consumed.
    pub consumed: usize,
    /// Blocks the parser produced (0 for a separator-only table).
    pub blocks: usize,
}

/// Result of dispatching a whole body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedBody {
    pub blocks: Vec<Block>,
    pub steps: Vec<Step>,
    /// Blank lines skipped between blocks.
    pub blank_lines: usize,
    /// Total number of body lines.
    pub line_count: usize,
}

impl DispatchedBody {
    /// Lines accounted for by parsers plus skipped blanks.
    pub fn covered_lines(&self) -> usize {
        self.steps.iter().map(|s| s.consumed).sum::<usize>() + self.blank_lines
    }
}

/// Line-scanning driver: classifies the line under the cursor, hands it to
/// the matching block parser and advances by what that parser consumed.
pub struct BlockDispatcher<'s, 'a> {
    lines: &'s SourceLines<'a>,
    classifier: MarkdownLineClassifier,
    cursor: usize,
    out: Vec<Block>,
    steps: Vec<Step>,
    blank_lines: usize,
}

impl<'s, 'a> BlockDispatcher<'s, 'a> {
    pub fn new(lines: &'s SourceLines<'a>) -> Self {
        Self {
            lines,
            classifier: MarkdownLineClassifier,
            cursor: 0,
            out: vec![],
            steps: vec![],
            blank_lines: 0,
        }
    }

    /// Dispatches every line. Fails if any parser would leave the cursor in
    /// place or move it past the end of input.
    pub fn run(mut self) -> Result<DispatchedBody, BlockError> {
        while self.cursor < self.lines.len() {
            self.step()?;
        }
        Ok(DispatchedBody {
            blocks: self.out,
            steps: self.steps,
            blank_lines: self.blank_lines,
            line_count: self.lines.len(),
        })
    }

    fn step(&mut self) -> Result<(), BlockError> {
        let idx = self.cursor;
        let Some(line) = self.lines.get(idx) else {
            return Ok(());
        };
        let kind = self.classifier.classify(line, self.lines.get(idx + 1));

        if kind == LineKind::Blank {
            self.blank_lines += 1;
            self.cursor += 1;
            return Ok(());
        }

        let consumed = self.parse(kind, idx, line)?;
        check_progress(idx, kind, consumed.lines, self.lines.len() - idx)?;

        log::trace!(
            "line {idx}: {kind:?} consumed {} line(s), produced {} block(s)",
            consumed.lines,
            consumed.blocks.len()
        );
        self.steps.push(Step {
            line: idx,
            kind,
            consumed: consumed.lines,
            blocks: consumed.blocks.len(),
        });
        self.cursor += consumed.lines;
        self.out.extend(consumed.blocks);
        Ok(())
    }

    fn parse(&self, kind: LineKind, idx: usize, line: &str) -> Result<Consumed, BlockError> {
        let consumed = match kind {
            LineKind::Blank => Consumed::none(1),
            LineKind::Heading => Consumed::one(Heading::parse(line), 1),
            LineKind::CodeFence => CodeFence::parse(self.lines, idx),
            LineKind::Table => PipeTable::parse(self.lines, idx),
            LineKind::ToDo => {
                let block =
                    TaskItem::parse(line).ok_or(BlockError::Misclassified { line: idx, kind })?;
                Consumed::one(block, 1)
            }
            LineKind::BulletedList => ListKind::Bulleted.parse(self.lines, idx),
            LineKind::NumberedList => ListKind::Numbered.parse(self.lines, idx),
            LineKind::Quote => Consumed::one(BlockQuote::parse(line), 1),
            LineKind::Divider => Consumed::one(Block::Divider, 1),
            LineKind::Paragraph => Paragraph::parse(self.lines, idx, &self.classifier),
        };
        Ok(consumed)
    }
}

/// A step must consume at least one line and no more than `remaining`.
fn check_progress(
    line: usize,
    kind: LineKind,
    consumed: usize,
    remaining: usize,
) -> Result<(), BlockError> {
    if consumed == 0 {
        return Err(BlockError::Stalled { line, kind });
    }
    if consumed > remaining {
        return Err(BlockError::Overrun {
            line,
            kind,
            consumed,
            remaining,
        });
    }
    Ok(())
}
