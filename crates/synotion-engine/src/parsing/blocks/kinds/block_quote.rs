use crate::parsing::{blocks::types::Block, inline::format_inline};

/// Single-line blockquote with owned prefix constant.
///
/// Quotes are flat: a `>>` line is one quote whose text starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the `>` prefix and at most one following space.
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest).trim_end()
    }

    pub fn parse(line: &str) -> Block {
        Block::Quote {
            text: format_inline(Self::strip_prefix(line)),
        }
    }
}
