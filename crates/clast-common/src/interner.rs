//! String Interner for kind, id and file-path deduplication.
//!
//! A clang JSON dump repeats the same handful of strings tens of thousands of
//! times: every node carries a `kind` tag and an `id`, and every location that
//! changes files repeats a full path. Interning them into one pool per decode
//! means each distinct string is allocated once and nodes carry a u32 `Atom`.
//!
//! Comparisons become integer comparisons (atom_a == atom_b) instead of string
//! comparisons.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Default capacity hint for one document's pool.
pub const DEFAULT_INTERNER_CAPACITY: usize = 8 * 1024;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Check if this atom refers to a non-empty string.
    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// String interner that deduplicates strings and returns Atom handles.
///
/// # Example
/// ```
/// use clast_common::interner::Interner;
/// let mut interner = Interner::new();
/// let a1 = interner.intern("a.c");
/// let a2 = interner.intern("a.c");
/// assert_eq!(a1, a2); // Same atom for same string
/// assert_eq!(interner.resolve(a1), "a.c");
/// ```
#[derive(Debug, Default)]
pub struct Interner {
    /// Map from string to atom index
    map: FxHashMap<Arc<str>, Atom>,
    /// Vector of all interned strings (index 0 is empty string)
    strings: Vec<Arc<str>>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INTERNER_CAPACITY)
    }

    /// Create an interner sized for roughly `capacity` distinct strings.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut interner = Interner {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strings: Vec::with_capacity(capacity.max(1)),
        };
        // Index 0 is reserved for empty/none
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        interner
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Look up a string without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Atom> {
        self.map.get(s).copied()
    }

    /// Resolve an Atom back to its string value.
    /// Returns empty string if atom is out of bounds (safety for foreign atoms).
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Resolve an Atom to its shared storage.
    #[inline]
    pub fn resolve_shared(&self, atom: Atom) -> Option<Arc<str>> {
        self.strings.get(atom.0 as usize).cloned()
    }

    /// Get the number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}
