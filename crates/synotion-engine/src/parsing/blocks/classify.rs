use crate::parsing::lines::is_blank;

use super::kinds::{BlockQuote, CodeFence, Divider, Heading, ListKind, PipeTable, TaskItem};

/// What a line opens, as decided by [`MarkdownLineClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Heading,
    CodeFence,
    Table,
    ToDo,
    BulletedList,
    NumberedList,
    Quote,
    Divider,
    /// Fallback when no rule matches.
    Paragraph,
}

/// A classification rule: `(line, next_line) -> matches`.
pub type LineRule = fn(&str, Option<&str>) -> bool;

/// Classifies lines by walking [`MarkdownLineClassifier::RULES`] in order.
///
/// The order is precedence: to-do must be checked before bullets because
/// every task line is also a bullet, and dividers after bullets and numbers
/// because `-` is shared. A `|` line that fails the table check matches
/// nothing and falls through to paragraph text.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub const RULES: [(LineKind, LineRule); 9] = [
        (LineKind::Blank, blank),
        (LineKind::Heading, heading),
        (LineKind::CodeFence, code_fence),
        (LineKind::Table, table),
        (LineKind::ToDo, to_do),
        (LineKind::BulletedList, bulleted),
        (LineKind::NumberedList, numbered),
        (LineKind::Quote, quote),
        (LineKind::Divider, divider),
    ];

    /// Classifies `line`; `next` is the following line, if any, used only to
    /// confirm tables.
    pub fn classify(&self, line: &str, next: Option<&str>) -> LineKind {
        Self::RULES
            .iter()
            .find(|(_, rule)| rule(line, next))
            .map_or(LineKind::Paragraph, |(kind, _)| *kind)
    }
}

fn blank(line: &str, _: Option<&str>) -> bool {
    is_blank(line)
}

fn heading(line: &str, _: Option<&str>) -> bool {
    Heading::opens(line)
}

fn code_fence(line: &str, _: Option<&str>) -> bool {
    CodeFence::opens(line)
}

fn table(line: &str, next: Option<&str>) -> bool {
    PipeTable::confirms(line, next)
}

fn to_do(line: &str, _: Option<&str>) -> bool {
    TaskItem::opens(line)
}

fn bulleted(line: &str, _: Option<&str>) -> bool {
    ListKind::Bulleted.opens(line)
}

fn numbered(line: &str, _: Option<&str>) -> bool {
    ListKind::Numbered.opens(line)
}

fn quote(line: &str, _: Option<&str>) -> bool {
    BlockQuote::opens(line)
}

fn divider(line: &str, _: Option<&str>) -> bool {
    Divider::opens(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", None, LineKind::Blank)]
    #[case("   \t", None, LineKind::Blank)]
    #[case("# Title", None, LineKind::Heading)]
    #[case("#hashtag", None, LineKind::Heading)]
    #[case("```rust", None, LineKind::CodeFence)]
    #[case("|A|B|", Some("|-|-|"), LineKind::Table)]
    #[case("|A|B|", Some("|1|2|"), LineKind::Paragraph)]
    #[case("|A|B|", None, LineKind::Paragraph)]
    #[case("- [ ] task", None, LineKind::ToDo)]
    #[case("* [x] done", None, LineKind::ToDo)]
    #[case("- [X] not a task", None, LineKind::BulletedList)]
    #[case("+ [ ] plus is a bullet", None, LineKind::BulletedList)]
    #[case("- item", None, LineKind::BulletedList)]
    #[case("  * indented", None, LineKind::BulletedList)]
    #[case("12. twelfth", None, LineKind::NumberedList)]
    #[case("> quoted", None, LineKind::Quote)]
    #[case("---", None, LineKind::Divider)]
    #[case("***", None, LineKind::Divider)]
    #[case("___", None, LineKind::Divider)]
    #[case("-*-", None, LineKind::Paragraph)]
    #[case("plain text", None, LineKind::Paragraph)]
    fn classify_lines(
        #[case] line: &str,
        #[case] next: Option<&str>,
        #[case] expected: LineKind,
    ) {
        assert_eq!(MarkdownLineClassifier.classify(line, next), expected);
    }

    #[test]
    fn task_beats_bullet() {
        let task = MarkdownLineClassifier::RULES
            .iter()
            .position(|(k, _)| *k == LineKind::ToDo);
        let bullet = MarkdownLineClassifier::RULES
            .iter()
            .position(|(k, _)| *k == LineKind::BulletedList);
        assert!(task < bullet);
    }

    #[test]
    fn separator_after_heading_marker_is_still_heading() {
        assert_eq!(
            MarkdownLineClassifier.classify("# | not a table", Some("|-|")),
            LineKind::Heading
        );
    }
}
