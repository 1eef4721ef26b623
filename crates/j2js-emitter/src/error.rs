//! Errors surfaced by the export generation pass.
//!
//! Both variants abort the compilation unit: no partial export output is
//! usable once either fires. There are no recoverable paths; the pass does
//! not validate the business meaning of its inputs (namespace well-formedness
//! is an upstream responsibility).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Configuration error: the namespace-provisioning intrinsic is not
    /// bound in the intrinsic index. Every exported member relies on it, so
    /// generator construction fails outright.
    #[error("provide intrinsic `{key}` is not bound in the intrinsic index")]
    MissingProvideIntrinsic { key: &'static str },

    /// Internal-consistency error: an export request references a member
    /// the naming pass never assigned an output identifier to.
    #[error("exported member `{export_name}` has no assigned output name")]
    UnboundMember { export_name: String },
}
