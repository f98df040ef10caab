//! Kind registry: the table from kind tag to payload constructor.
//!
//! The builtin registry is assembled once from the per-category tables in
//! [`super::kinds`] and is immutable afterwards, so any number of decodes
//! can share it across threads.

use super::kinds::{attrs, comments, decls, exprs, literals, operators, stmts, types};
use super::node::NodeData;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Produces the zero-valued payload for one kind.
pub type NodeConstructor = fn() -> NodeData;

/// Category tables merged into the builtin registry, in registration order.
static BUILTIN_TABLES: [&[(&str, NodeConstructor)]; 8] = [
    attrs::TABLE,
    comments::TABLE,
    decls::TABLE,
    exprs::TABLE,
    literals::TABLE,
    operators::TABLE,
    stmts::TABLE,
    types::TABLE,
];

static KIND_REGISTRY: Lazy<KindRegistry> = Lazy::new(KindRegistry::with_builtin_kinds);

/// The process-wide registry of every builtin kind.
pub fn kind_registry() -> &'static KindRegistry {
    &KIND_REGISTRY
}

#[derive(Clone, Debug, Default)]
pub struct KindRegistry {
    constructors: FxHashMap<Box<str>, NodeConstructor>,
}

impl KindRegistry {
    /// An empty registry. Every kind decoded against it is unknown.
    pub fn new() -> KindRegistry {
        KindRegistry::default()
    }

    /// A registry holding every builtin kind.
    pub fn with_builtin_kinds() -> KindRegistry {
        let capacity = builtin_table_entries();
        let mut registry = KindRegistry {
            constructors: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        };
        for table in BUILTIN_TABLES {
            for &(kind, ctor) in table {
                registry.register(kind, ctor);
            }
        }
        registry
    }

    /// Register `kind`. A second registration replaces the first.
    pub fn register(&mut self, kind: &str, ctor: NodeConstructor) {
        if self.constructors.insert(kind.into(), ctor).is_some() {
            debug!(kind, "kind registered twice, replacing constructor");
        }
    }

    #[inline]
    pub fn resolve(&self, kind: &str) -> Option<NodeConstructor> {
        self.constructors.get(kind).copied()
    }

    #[inline]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Registered kind tags, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.constructors.keys().map(|k| &**k)
    }
}

/// Total entries across the builtin tables, duplicates included.
pub(crate) fn builtin_table_entries() -> usize {
    BUILTIN_TABLES.iter().map(|t| t.len()).sum()
}
