//! Common types and utilities for the j2js compiler.
//!
//! This crate provides foundational types used across all j2js crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
