use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{blocks::types::Block, inline::format_inline};

/// Checklist item (`- [ ] todo`, `* [x] done`).
///
/// Only a space or a lower-case `x` inside the brackets is recognized; any
/// other box content is left for the list and paragraph rules.
pub struct TaskItem;

impl TaskItem {
    pub const CHECKED: &'static str = "x";

    fn pattern() -> &'static Regex {
        static TASK: OnceLock<Regex> = OnceLock::new();
        TASK.get_or_init(|| {
            Regex::new(r"^[ \t]*[-*][ \t]+\[([x ])\][ \t]*(.*)$").expect("Invalid task item regex")
        })
    }

    pub fn opens(line: &str) -> bool {
        Self::pattern().is_match(line)
    }

    /// Checked state and trailing text of a task line.
    pub fn split(line: &str) -> Option<(bool, &str)> {
        let caps = Self::pattern().captures(line)?;
        let checked = caps.get(1)?.as_str() == Self::CHECKED;
        let text = caps.get(2).map_or("", |m| m.as_str()).trim();
        Some((checked, text))
    }

    pub fn parse(line: &str) -> Option<Block> {
        let (checked, text) = Self::split(line)?;
        Some(Block::ToDo {
            text: format_inline(text),
            checked,
        })
    }
}
