use crate::parsing::{
    blocks::types::{Block, Consumed},
    lines::SourceLines,
};

/// Fenced code block delimited by triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Language reported when the opening fence carries no tag.
    pub const DEFAULT_LANGUAGE: &'static str = "plain text";

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Language tag of an opening fence line.
    pub fn language(opener: &str) -> String {
        let tag = opener
            .strip_prefix(Self::BACKTICKS)
            .unwrap_or(opener)
            .trim();
        if tag.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            tag.to_string()
        }
    }

    /// Parses the fence opened at `start`.
    ///
    /// Body lines are kept verbatim up to the next line starting with the
    /// fence. An unterminated fence runs to the end of input.
    pub fn parse(lines: &SourceLines<'_>, start: usize) -> Consumed {
        let Some(opener) = lines.get(start) else {
            return Consumed::none(0);
        };

        let body_len = lines.run_len(start + 1, |l| !Self::opens(l));
        let content = lines.rest(start + 1)[..body_len].join("\n");
        let closed = start + 1 + body_len < lines.len();

        Consumed::one(
            Block::Code {
                language: Self::language(opener),
                content,
            },
            body_len + if closed { 2 } else { 1 },
        )
    }
}
