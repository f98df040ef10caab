//! Per-document decode state.

use super::node_arena::NodeArena;
use super::registry::KindRegistry;
use clast_common::{Atom, Interner};

/// Mutable state for decoding one document.
///
/// Owns the string pool and the arena being filled. Nothing in here is
/// shared between documents; only the registry is borrowed. When decoding
/// finishes the pool moves into the arena so atoms stay resolvable for the
/// arena's lifetime.
pub struct ParseContext<'r> {
    pub(crate) registry: &'r KindRegistry,
    pub(crate) interner: Interner,
    pub(crate) arena: NodeArena,
    pub(crate) max_depth: u32,
}

impl<'r> ParseContext<'r> {
    pub fn new(
        registry: &'r KindRegistry,
        interner_capacity: usize,
        node_capacity: usize,
        max_depth: u32,
    ) -> ParseContext<'r> {
        ParseContext {
            registry,
            interner: Interner::with_capacity(interner_capacity),
            arena: NodeArena::with_capacity(node_capacity),
            max_depth,
        }
    }

    /// Intern a string into this document's pool. The empty string is
    /// `Atom::NONE`.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        self.interner.intern(s)
    }

    /// Finish decoding: hand the pool to the arena and return it.
    pub fn into_arena(self) -> NodeArena {
        let mut arena = self.arena;
        arena.set_interner(self.interner);
        arena
    }
}
