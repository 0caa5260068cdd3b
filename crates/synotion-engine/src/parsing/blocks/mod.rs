//! # Block Parsing
//!
//! Line-scanning block parsing with a single cursor over the body's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): the line under the cursor is
//!    matched against an ordered rule table and labelled with a `LineKind`
//!
//! 2. **Dispatch** (`dispatch`): a `BlockDispatcher` hands the line to the
//!    parser for that kind, which reports how many lines it consumed; the
//!    cursor advances by exactly that many
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `HeadingLevel`, `Table`, `Consumed`)
//! - **`kinds`**: One parser per block kind, each owning its syntax markers
//! - **`classify`**: `MarkdownLineClassifier` and its precedence-ordered rules
//! - **`dispatch`**: `BlockDispatcher` state machine and its step trace
//! - **`wire`**: Serialization into the remote service's block objects
//! - **`error`**: `BlockError` for dispatcher faults
//!
//! ## Key Invariants
//!
//! - Blocks come out in source line order
//! - Every dispatch step advances the cursor by at least one line
//! - Lines consumed by all steps plus skipped blank lines equals the body's
//!   line count
//! - Structure is flat: no block nests inside another

pub mod classify;
pub mod dispatch;
pub mod error;
pub mod kinds;
pub mod types;
pub mod wire;

pub use classify::{LineKind, MarkdownLineClassifier};
pub use dispatch::{BlockDispatcher, DispatchedBody, Step};
pub use error::BlockError;
pub use types::{Block, Cell, Consumed, HeadingLevel, Row, Table};
