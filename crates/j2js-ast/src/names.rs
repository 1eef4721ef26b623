//! Collision-free output identifiers.
//!
//! Backend passes never embed identifier text in nodes directly; they hold
//! `JsName` handles declared through a `NameRegistry`. The registry
//! guarantees that every declared name renders to a distinct identifier,
//! even when two declarations share a display name.

use j2js_common::interner::{Atom, Interner};
use rustc_hash::FxHashSet;

/// Handle to a declared output identifier.
///
/// Cheap to copy and compare; resolve the rendered text with
/// `NameRegistry::ident`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JsName(Atom);

/// Owns the identifier pool for one compilation unit and hands out
/// collision-free `JsName`s.
#[derive(Debug)]
pub struct NameRegistry {
    interner: Interner,
    declared: FxHashSet<Atom>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            declared: FxHashSet::default(),
        }
    }

    /// Declare a name with the given preferred identifier. If the identifier
    /// is already taken, a numeric suffix is appended until the rendered
    /// text is unique (`f`, `f_1`, `f_2`, ...).
    pub fn declare(&mut self, ident: &str) -> JsName {
        let atom = self.interner.intern(ident);
        if self.declared.insert(atom) {
            return JsName(atom);
        }
        let mut suffix = 1u32;
        loop {
            let candidate = format!("{ident}_{suffix}");
            let atom = self.interner.intern(&candidate);
            if self.declared.insert(atom) {
                return JsName(atom);
            }
            suffix += 1;
        }
    }

    /// Rendered identifier text for a declared name.
    pub fn ident(&self, name: JsName) -> &str {
        self.interner.resolve(name.0)
    }
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
