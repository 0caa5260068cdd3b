//! # synotion-engine
//!
//! Converts a markdown document into the flat block sequence, frontmatter
//! and title that make up a page in a block-based workspace.
//!
//! ```
//! let page = synotion_engine::convert("# Hello\n\nSome **text**").unwrap();
//! assert_eq!(page.title.as_deref(), Some("Hello"));
//! assert_eq!(page.blocks.len(), 2);
//! ```

pub mod convert;
pub mod error;
pub mod frontmatter;
pub mod parsing;
pub mod title;

pub use convert::{Conversion, convert};
pub use error::ConvertError;
pub use frontmatter::Frontmatter;
pub use parsing::blocks::{Block, HeadingLevel, Table};
pub use parsing::inline::{RichText, Segment, format_inline};
pub use title::{TitleSource, UNTITLED, resolve_title};
