use crate::parsing::{
    blocks::types::{Block, HeadingLevel},
    inline::format_inline,
};

/// ATX heading (`# Title`) with its owned marker.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Splits a heading line into its marker count and trimmed text.
    pub fn split(line: &str) -> (usize, &str) {
        let rest = line.trim_start_matches(Self::MARKER);
        (line.len() - rest.len(), rest.trim())
    }

    pub fn parse(line: &str) -> Block {
        let (markers, text) = Self::split(line);
        Block::Heading {
            level: HeadingLevel::from_markers(markers),
            text: format_inline(text),
        }
    }
}
