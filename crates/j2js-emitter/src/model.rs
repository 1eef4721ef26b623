//! Export request model and the name-binding table.
//!
//! The member/type model upstream decides *which* declarations are exported
//! and what their namespace/name strings are; this module only carries the
//! handles and derived strings the export pass consumes. Requests are
//! immutable once handed to the generator.

use j2js_ast::names::JsName;
use j2js_common::Span;
use rustc_hash::FxHashMap;

/// Opaque handle to a member declaration, assigned during IR construction.
///
/// Lookup tables key on this handle, never on display names: two distinct
/// declarations may share a display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemberId(pub u32);

/// Opaque handle to a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// A member (field/method) marked for external visibility.
#[derive(Debug, Clone)]
pub struct ExportedMember {
    pub id: MemberId,
    /// Dotted path the member is published under, e.g. `"foo.bar"`.
    pub export_namespace: String,
    /// Leaf identifier within the namespace object.
    pub export_name: String,
    pub span: Span,
}

impl ExportedMember {
    pub fn new(
        id: MemberId,
        export_namespace: impl Into<String>,
        export_name: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            id,
            export_namespace: export_namespace.into(),
            export_name: export_name.into(),
            span,
        }
    }
}

/// A type marked for external visibility.
#[derive(Debug, Clone)]
pub struct ExportedType {
    pub id: TypeId,
    pub export_namespace: String,
    pub export_name: String,
    pub span: Span,
}

impl ExportedType {
    pub fn new(
        id: TypeId,
        export_namespace: impl Into<String>,
        export_name: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            id,
            export_namespace: export_namespace.into(),
            export_name: export_name.into(),
            span,
        }
    }

    /// Full dotted path of the type, e.g. `"foo.bar.Baz"`.
    pub fn qualified_name(&self) -> String {
        if self.export_namespace.is_empty() {
            self.export_name.clone()
        } else {
            format!("{}.{}", self.export_namespace, self.export_name)
        }
    }
}

/// Mapping from member declaration identity to the unique identifier the
/// naming pass assigned to it in the generated output.
#[derive(Debug, Default)]
pub struct NameBindings {
    map: FxHashMap<MemberId, JsName>,
}

impl NameBindings {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: MemberId, name: JsName) {
        self.map.insert(id, name);
    }

    pub fn get(&self, id: MemberId) -> Option<JsName> {
        self.map.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
