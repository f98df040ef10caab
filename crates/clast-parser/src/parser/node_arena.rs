//! Arena storage for decoded nodes.
//!
//! Nodes are stored in pre-order, so index 0 is the root and arena order is
//! document order. Tree links are `NodeIndex` values into the same arena.

use super::base::NodeIndex;
use super::node::Node;
use clast_common::limits::MAX_NODE_PREALLOC;
use clast_common::{Atom, Interner, Loc};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    /// String pool for every `Atom` stored in the nodes
    interner: Interner,
    /// clang node id -> first node carrying it
    id_index: FxHashMap<Atom, NodeIndex>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            interner: Interner::with_capacity(0),
            id_index: FxHashMap::default(),
        }
    }

    /// Set the interner (called after decoding to transfer ownership from
    /// the parse context).
    pub fn set_interner(&mut self, interner: Interner) {
        self.interner = interner;
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Append a node and return its index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    /// Record `id` as naming `index`. The first node with a given id wins.
    pub(crate) fn index_id(&mut self, id: Atom, index: NodeIndex) {
        if id.is_some() {
            self.id_index.entry(id).or_insert(index);
        }
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node allocated, which is the document root.
    pub fn root(&self) -> NodeIndex {
        if self.nodes.is_empty() {
            NodeIndex::NONE
        } else {
            NodeIndex(0)
        }
    }

    /// Resolve an atom against this arena's pool.
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    /// The kind tag of a node, or `""` for a null index.
    pub fn kind_name(&self, index: NodeIndex) -> &str {
        self.get(index)
            .map(|node| self.interner.resolve(node.kind))
            .unwrap_or("")
    }

    /// The clang id of a node, or `""` for a null index.
    pub fn id_str(&self, index: NodeIndex) -> &str {
        self.get(index)
            .map(|node| self.interner.resolve(node.id))
            .unwrap_or("")
    }

    /// The file a location names, if any.
    pub fn loc_file(&self, loc: &Loc) -> Option<&str> {
        if loc.file.is_none() {
            None
        } else {
            Some(self.interner.resolve(loc.file))
        }
    }

    /// Find the node carrying clang id `id` (e.g. a `referencedDecl.id`).
    pub fn find_by_id(&self, id: &str) -> Option<NodeIndex> {
        let atom = self.interner.get(id)?;
        self.find_by_atom(atom)
    }

    pub fn find_by_atom(&self, id: Atom) -> Option<NodeIndex> {
        if id.is_none() {
            return None;
        }
        self.id_index.get(&id).copied()
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.get(index).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.parent)
    }

    pub fn prev_sibling(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.prev_sibling)
    }

    pub fn next_sibling(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.next_sibling)
    }

    /// Walk parent links upward, starting with the parent of `index`.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: self.parent(index),
        }
    }

    /// All nodes in arena (document) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }
}

pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.current.is_none() {
            return None;
        }
        let here = self.current;
        self.current = self.arena.parent(here);
        Some(here)
    }
}
