use super::classify::LineKind;

/// Internal faults detected while dispatching lines to block parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("{kind:?} parser made no progress at line {line}")]
    Stalled { line: usize, kind: LineKind },
    #[error(
        "{kind:?} parser consumed {consumed} lines at line {line} but only {remaining} remain"
    )]
    Overrun {
        line: usize,
        kind: LineKind,
        consumed: usize,
        remaining: usize,
    },
    #[error("line {line} was classified as {kind:?} but its parser rejected it")]
    Misclassified { line: usize, kind: LineKind },
}
