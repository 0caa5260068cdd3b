use crate::parsing::blocks::BlockError;

/// Failure to convert a document. Only dispatcher faults surface here;
/// malformed markdown degrades to paragraphs instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to parse markdown: {0}")]
    MarkdownParseFailure(#[from] BlockError),
}
