//! Pre-order and post-order walks over a `NodeArena`.
//!
//! Both walks keep an explicit stack, so arbitrarily deep trees cannot
//! overflow the call stack. Null (`NodeIndex::NONE`) and out-of-range
//! child slots are skipped.
//!
//! The visitor's [`VisitControl`] is a prune signal, not an error channel:
//! returning `Prune` from a pre-order visitor skips that node's descendants
//! and the walk carries on with its siblings. The caller is never told a
//! subtree was pruned. In post-order the children have already been visited
//! by the time the visitor sees their parent, so `Prune` has no effect there.

use super::base::NodeIndex;
use super::node::Node;
use super::node_arena::NodeArena;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisitControl {
    #[default]
    Continue,
    /// Skip the current node's descendants (pre-order only).
    Prune,
}

/// Visit `root` and its descendants, parents before children. The visitor
/// gets the index, the node and its depth below `root`.
pub fn pre_order<F>(arena: &NodeArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(NodeIndex, &Node, u32) -> VisitControl,
{
    let mut stack: Vec<(NodeIndex, u32)> = vec![(root, 0)];
    while let Some((idx, depth)) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if visit(idx, node, depth) == VisitControl::Prune {
            continue;
        }
        for &child in node.inner.iter().rev() {
            if child.is_some() {
                stack.push((child, depth + 1));
            }
        }
    }
}

/// Mutable pre-order walk. The visitor may rewrite any field of the node
/// except `inner`; children are read after the visitor returns.
pub fn pre_order_mut<F>(arena: &mut NodeArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(&mut Node, u32) -> VisitControl,
{
    let mut stack: Vec<(NodeIndex, u32)> = vec![(root, 0)];
    while let Some((idx, depth)) = stack.pop() {
        let Some(node) = arena.get_mut(idx) else {
            continue;
        };
        if visit(node, depth) == VisitControl::Prune {
            continue;
        }
        for &child in node.inner.iter().rev() {
            if child.is_some() {
                stack.push((child, depth + 1));
            }
        }
    }
}

/// Visit `root` and its descendants, children before parents.
pub fn post_order<F>(arena: &NodeArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(NodeIndex, &Node, u32) -> VisitControl,
{
    // (index, depth, children already pushed)
    let mut stack: Vec<(NodeIndex, u32, bool)> = vec![(root, 0, false)];
    while let Some((idx, depth, expanded)) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if expanded {
            // Descendants are done; the result cannot prune anything.
            let _ = visit(idx, node, depth);
            continue;
        }
        stack.push((idx, depth, true));
        for &child in node.inner.iter().rev() {
            if child.is_some() {
                stack.push((child, depth + 1, false));
            }
        }
    }
}
