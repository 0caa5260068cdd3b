//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The parser refers to
//! these constants and never hardcodes `[`, `]`, `(` or `)` itself.

pub mod link;

pub use link::Link;
