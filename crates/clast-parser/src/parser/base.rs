//! Shared base types for the node arena.

use serde::{Deserialize, Serialize};

/// Index of a node in its `NodeArena`.
///
/// Parent, sibling and child relations are stored as indices, never as
/// references, so the tree has no ownership cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// The null slot: no parent, no sibling, no child.
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}
