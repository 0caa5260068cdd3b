use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::types::{Block, Consumed},
    inline::{RichText, format_inline},
    lines::SourceLines,
};

/// Flat list flavour, selected by the marker on the first line of a run.
///
/// Indentation is ignored: an indented item is a sibling, never a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `+` followed by spaces or tabs.
    Bulleted,
    /// Digits, `.`, spaces or tabs.
    Numbered,
}

impl ListKind {
    fn marker(self) -> &'static Regex {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        static NUMBER: OnceLock<Regex> = OnceLock::new();
        match self {
            ListKind::Bulleted => BULLET
                .get_or_init(|| Regex::new(r"^[ \t]*[-*+][ \t]+").expect("Invalid bullet regex")),
            ListKind::Numbered => NUMBER
                .get_or_init(|| Regex::new(r"^[ \t]*[0-9]+\.[ \t]+").expect("Invalid number regex")),
        }
    }

    pub fn opens(self, line: &str) -> bool {
        self.marker().is_match(line)
    }

    /// Item text with the marker (and any indentation) removed.
    pub fn strip_marker(self, line: &str) -> Option<&str> {
        let m = self.marker().find(line)?;
        Some(line[m.end()..].trim())
    }

    pub fn item(self, text: RichText) -> Block {
        match self {
            ListKind::Bulleted => Block::BulletedListItem { text },
            ListKind::Numbered => Block::NumberedListItem { text },
        }
    }

    /// Consumes the maximal run of lines carrying this kind's marker, one
    /// item per line.
    pub fn parse(self, lines: &SourceLines<'_>, start: usize) -> Consumed {
        let blocks: Vec<Block> = lines
            .rest(start)
            .iter()
            .map_while(|line| self.strip_marker(line))
            .map(|text| self.item(format_inline(text)))
            .collect();

        Consumed {
            lines: blocks.len(),
            blocks,
        }
    }
}
