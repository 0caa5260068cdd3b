pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockDispatcher, BlockError, DispatchedBody};
use lines::SourceLines;

/// Parses a document body (frontmatter already removed) into blocks.
pub fn parse_body(body: &str) -> Result<DispatchedBody, BlockError> {
    let lines = SourceLines::new(body);
    BlockDispatcher::new(&lines).run()
}
