//! String interner for identifier deduplication.
//!
//! Identifier text is interned into a per-compilation-unit pool and passed
//! around as u32 indices (Atoms). Comparisons become integer comparisons
//! (atom_a == atom_b) instead of string comparisons, and repeated
//! identifiers share one allocation.
//!
//! The pool is owned by a single compilation unit and is not shared across
//! threads; the export pass that consumes it is a single deterministic pass.

use rustc_hash::FxHashMap;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Interning pool mapping strings to `Atom`s and back.
#[derive(Debug)]
pub struct Interner {
    map: FxHashMap<String, Atom>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::new(),
        };
        // Slot 0 is reserved for Atom::NONE / the empty string.
        interner.strings.push(String::new());
        interner.map.insert(String::new(), Atom::NONE);
        interner
    }

    /// Intern a string, returning its atom. Interning the same text twice
    /// returns the same atom.
    pub fn intern(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.map.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.map.insert(text.to_string(), atom);
        atom
    }

    /// Resolve an atom back to its string.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    /// Number of interned strings (including the reserved empty slot).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        // Slot 0 is always present.
        false
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
