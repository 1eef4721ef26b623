//! Generated-JavaScript model for the j2js compiler.
//!
//! This crate defines the tree-structured nodes that backend passes produce
//! instead of strings, plus the printer that renders them.
//!
//! # Architecture
//!
//! Backend passes (export generation, runtime setup, etc.) build `JsExpr` /
//! `JsStmt` trees referring to output identifiers through `JsName` handles.
//! The printer then walks those trees and emits JavaScript text.
//!
//! Benefits:
//! - Clean separation between generation logic and string emission
//! - Nodes are testable independently
//! - The printer applies quoting and escaping consistently

// Collision-free output identifiers
pub mod names;
pub use names::{JsName, NameRegistry};

// Expression and statement nodes
pub mod ast;
pub use ast::{JsExpr, JsStmt};

// Rendering nodes to JavaScript text
pub mod printer;
pub use printer::JsPrinter;
