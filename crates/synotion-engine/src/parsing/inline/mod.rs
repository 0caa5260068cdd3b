//! # Inline Formatting
//!
//! Turns a line of text into [`RichText`] by extracting `[label](url)` links.
//! Emphasis, code spans and images are not interpreted; their markup stays
//! in the literal text.
//!
//! ## Modules
//!
//! - **`types`**: `Segment` and `RichText`, plus their wire serialization
//! - **`kinds`**: `Link` with its owned delimiters and scheme policy
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `format_inline()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::{RichText, Segment};
