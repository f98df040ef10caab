//! Fallback location lookups that do not depend on the filler.
//!
//! Both helpers look at the node itself, then walk to the previous sibling
//! if there is one, otherwise to the parent, and repeat. This follows the
//! same "most recently emitted" order clang uses when it omits fields.

use super::base::NodeIndex;
use super::node::Node;
use super::node_arena::NodeArena;
use clast_common::{Atom, Loc};

/// The nearest file for `index`: its own `loc.file`, else its
/// `range.begin.file`, else the same lookup on earlier nodes.
pub fn resolve_node_file(arena: &NodeArena, index: NodeIndex) -> Option<Atom> {
    find_upward(arena, index, |node| {
        node.loc
            .as_ref()
            .map(|loc| loc.file)
            .filter(|file| file.is_some())
            .or_else(|| {
                node.range
                    .as_ref()
                    .map(|range| range.begin.file)
                    .filter(|file| file.is_some())
            })
    })
}

/// The nearest location that carries at least one of file, line or column.
pub fn resolve_node_location(arena: &NodeArena, index: NodeIndex) -> Option<&Loc> {
    find_upward(arena, index, |node| {
        node.loc.as_ref().filter(|loc| !loc.is_unpositioned())
    })
}

fn find_upward<'a, T>(
    arena: &'a NodeArena,
    index: NodeIndex,
    mut probe: impl FnMut(&'a Node) -> Option<T>,
) -> Option<T> {
    let mut current = index;
    while let Some(node) = arena.get(current) {
        if let Some(found) = probe(node) {
            return Some(found);
        }
        current = if node.prev_sibling.is_some() {
            node.prev_sibling
        } else {
            node.parent
        };
    }
    None
}
