//! Location-inheritance filler.
//!
//! clang leaves a location component out whenever it equals the one it
//! emitted last, in document order. Replaying the document in pre-order
//! while carrying the last concrete file, line and column (each
//! independently) recovers the absolute location of every node.
//!
//! Per node, in this order: `loc`, then `range.begin`, then `range.end`.
//! Each is reconciled against the same carry: an absent component is
//! copied from the carry, a present one replaces it. A node without a
//! `loc` gets a copy of the carry; a node without a `range` gets an empty
//! one first, so every node leaves with both.
//!
//! clang writes a macro location as its `spellingLoc` followed by its
//! `expansionLoc`, and those update its "last emitted" state like any other
//! location. They are reconciled in that order before the top-level
//! components, so a macro location's own file, line and column resolve to
//! the expansion site and the carry leaves pointing there too.

use super::base::NodeIndex;
use super::node_arena::NodeArena;
use super::traversal::{VisitControl, pre_order_mut};
use clast_common::{Loc, SourceRange};
use tracing::debug;

/// Fill omitted locations for every node under `root`. Never fails; with no
/// concrete location anywhere, nodes end up with empty locations.
pub fn fill_locations(arena: &mut NodeArena, root: NodeIndex) {
    let mut carry = Loc::default();
    let mut visited = 0usize;

    pre_order_mut(arena, root, |node, _| {
        visited += 1;
        match &mut node.loc {
            Some(loc) => reconcile(loc, &mut carry),
            slot @ None => *slot = Some(carried(&carry)),
        }

        let range = node.range.get_or_insert_with(SourceRange::default);
        reconcile(&mut range.begin, &mut carry);
        reconcile(&mut range.end, &mut carry);
        VisitControl::Continue
    });

    debug!(nodes = visited, "filled locations");
}

/// The carried components as a fresh location.
fn carried(carry: &Loc) -> Loc {
    Loc {
        file: carry.file,
        line: carry.line,
        col: carry.col,
        ..Loc::default()
    }
}

/// Inherit absent components from `carry`; push present ones into it.
///
/// Nesting is bounded by `MAX_LOC_DEPTH` at decode time.
fn reconcile(loc: &mut Loc, carry: &mut Loc) {
    if let Some(spelling) = loc.spelling_loc.as_deref_mut() {
        reconcile(spelling, carry);
    }
    if let Some(expansion) = loc.expansion_loc.as_deref_mut() {
        reconcile(expansion, carry);
    }

    if loc.file.is_some() {
        carry.file = loc.file;
    } else {
        loc.file = carry.file;
    }

    match loc.line {
        Some(line) => carry.line = Some(line),
        None => loc.line = carry.line,
    }

    match loc.col {
        Some(col) => carry.col = Some(col),
        None => loc.col = carry.col,
    }
}
