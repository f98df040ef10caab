//! Tree linker: fills in parent and sibling indices.
//!
//! The decoder only records each node's children. Sibling links need the
//! complete child list, so they are assigned here in one pass afterwards.

use super::base::NodeIndex;
use super::node_arena::NodeArena;
use super::traversal::{VisitControl, pre_order};
use tracing::debug;

/// Assign `parent`, `prev_sibling` and `next_sibling` for every node under
/// `root`. Null child slots are skipped and do not break sibling chains.
/// Never fails.
pub fn link_tree(arena: &mut NodeArena, root: NodeIndex) {
    let mut order = Vec::with_capacity(arena.len());
    pre_order(arena, root, |idx, _, _| {
        order.push(idx);
        VisitControl::Continue
    });

    if let Some(node) = arena.get_mut(root) {
        node.parent = NodeIndex::NONE;
        node.prev_sibling = NodeIndex::NONE;
        node.next_sibling = NodeIndex::NONE;
    }

    let mut children = Vec::new();
    for &parent in &order {
        children.clear();
        children.extend(
            arena
                .children(parent)
                .iter()
                .copied()
                .filter(|c| c.is_some()),
        );

        for (i, &child) in children.iter().enumerate() {
            let prev = if i == 0 { NodeIndex::NONE } else { children[i - 1] };
            let next = children.get(i + 1).copied().unwrap_or(NodeIndex::NONE);
            if let Some(node) = arena.get_mut(child) {
                node.parent = parent;
                node.prev_sibling = prev;
                node.next_sibling = next;
            }
        }
    }

    debug!(nodes = order.len(), "linked tree");
}
