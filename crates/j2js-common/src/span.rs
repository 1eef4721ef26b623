//! Source spans as byte offsets into a compilation unit's source text.
//!
//! Spans ride along on generated statements for diagnostics only; they carry
//! no semantic weight in the emitted output.

/// A half-open byte range `[pos, end)` into the unit's source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub pos: u32,
    pub end: u32,
}

impl Span {
    /// Span for generated nodes with no corresponding source position.
    pub const SYNTHETIC: Span = Span { pos: 0, end: 0 };

    pub const fn new(pos: u32, end: u32) -> Self {
        Self { pos, end }
    }

    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    pub const fn is_empty(self) -> bool {
        self.pos == self.end
    }
}
