use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::types::{Block, Consumed, Row, Table},
    inline::format_inline,
    lines::SourceLines,
};

/// Pipe table (`| a | b |`) with its owned delimiter.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// Whether a line is made only of `-`, `:`, `|`, spaces and tabs, with
    /// at least one `-`.
    pub fn is_separator_row(line: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR
            .get_or_init(|| Regex::new(r"^[ \t|:]*-[ \t|:-]*$").expect("Invalid separator regex"))
            .is_match(line)
    }

    /// A `|` line starts a table only when the line after it is a separator
    /// row.
    pub fn confirms(line: &str, next: Option<&str>) -> bool {
        Self::opens(line) && next.is_some_and(Self::is_separator_row)
    }

    /// Splits a row into trimmed cells, discarding the empty cells produced
    /// by a leading or trailing pipe.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.trim().split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    /// Consumes every contiguous `|` line starting at `start`.
    ///
    /// Separator rows and rows without cells are dropped. When nothing is
    /// left no block is produced, but the examined lines still count as
    /// consumed.
    pub fn parse(lines: &SourceLines<'_>, start: usize) -> Consumed {
        let run = lines.run_len(start, Self::opens);

        let rows: Vec<Row> = lines.rest(start)[..run]
            .iter()
            .filter(|line| !Self::is_separator_row(line))
            .map(|line| {
                Self::split_cells(line)
                    .into_iter()
                    .map(format_inline)
                    .collect::<Row>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        match Table::from_rows(rows) {
            Some(table) => Consumed::one(Block::Table(table), run),
            None => Consumed::none(run),
        }
    }
}
