//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via outline assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders blocks as a stable one-line-per-block outline
//!   that reads well in test diffs
//! - **`invariants`**: Runtime checks for parser correctness (every line
//!   accounted for, rectangular tables, non-empty rich text)
//!
//! ## Testing Strategy
//!
//! Conversion behavior is pinned by fixture documents and their outlines
//! rather than a separate formal grammar. Outlines show block kinds, text and
//! link targets; the wire format is covered separately.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
