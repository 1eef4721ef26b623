//! Export statement generation for the j2js compiler backend.
//!
//! Declarations marked for external visibility are published under dotted
//! namespace paths in a single global object. For global-namespaced output
//! the generated statements look like:
//!
//! ```javascript
//! _ = provide("dotted.namespace");
//! _.memberName = original;
//! ```
//!
//! Members are aliased into the namespace through a scratch accumulator
//! identifier; consecutive exports into the same namespace share one
//! `provide` call.
//!
//! # Architecture
//!
//! The compilation driver iterates exported declarations in namespace-sorted
//! order and feeds them to an [`ExportsGenerator`], which appends statements
//! to a shared output list. The generator variant (one per output dialect)
//! is selected once at driver construction.

pub mod error;
pub mod exports;
pub mod intrinsics;
pub mod model;

pub use error::ExportError;
pub use exports::{
    ExportDialect, ExportsGenerator, GlobalExportsGenerator, ModuleExportsGenerator,
    generate_exports,
};
pub use intrinsics::{IntrinsicIndex, PROVIDE_INTRINSIC};
pub use model::{ExportedMember, ExportedType, MemberId, NameBindings, TypeId};
