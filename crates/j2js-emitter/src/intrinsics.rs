//! Index of runtime intrinsic functions, keyed by symbolic name.
//!
//! The backend resolves well-known runtime helpers through this index once
//! at construction time instead of scattering string lookups through
//! generation code.

use j2js_ast::names::JsName;
use rustc_hash::FxHashMap;

/// Symbolic key of the namespace-provisioning runtime primitive.
///
/// `provide(ns)` returns the object graph backing the dotted path `ns`,
/// lazily creating it on first call; repeat calls with the same string are
/// idempotent and side-effect-free.
pub const PROVIDE_INTRINSIC: &str = "NamespaceSetupUtil.provide";

/// Mapping from symbolic key to the output name bound to the intrinsic.
#[derive(Debug, Default)]
pub struct IntrinsicIndex {
    functions: FxHashMap<String, JsName>,
}

impl IntrinsicIndex {
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    pub fn register(&mut self, key: impl Into<String>, name: JsName) {
        self.functions.insert(key.into(), name);
    }

    pub fn lookup(&self, key: &str) -> Option<JsName> {
        self.functions.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2js_ast::names::NameRegistry;

    #[test]
    fn register_and_lookup() {
        let mut registry = NameRegistry::new();
        let provide = registry.declare("provide");
        let mut index = IntrinsicIndex::new();
        index.register(PROVIDE_INTRINSIC, provide);
        assert_eq!(index.lookup(PROVIDE_INTRINSIC), Some(provide));
        assert_eq!(index.lookup("NamespaceSetupUtil.missing"), None);
    }
}
