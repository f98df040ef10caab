//! Recursive decoder: JSON value tree -> `NodeArena`.
//!
//! The document is parsed into a `serde_json::Value` first, then walked
//! from the root. For each node object the kind tag picks a constructor
//! from the registry, the payload decodes its own fields, and the shared
//! header (`id`, `loc`, `range`, `inner`) is decoded here. Nodes are
//! appended to the arena before their children, so arena order is
//! pre-order.
//!
//! Objects without a `kind` (clang emits `{}` for null child slots) are
//! skipped. An unregistered kind fails the whole document.

use super::base::NodeIndex;
use super::context::ParseContext;
use super::errors::DecodeError;
use super::json::{get_bool, get_str, get_u32};
use super::kind_names::TRANSLATION_UNIT_DECL;
use super::node::Node;
use super::node_arena::NodeArena;
use super::registry::{KindRegistry, kind_registry};
use clast_common::interner::DEFAULT_INTERNER_CAPACITY;
use clast_common::limits::{
    BYTES_PER_NODE_ESTIMATE, DEFAULT_NODE_CAPACITY, MAX_AST_DEPTH, MAX_LOC_DEPTH,
};
use clast_common::{Loc, SourceRange};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Capacity hint for the document's string pool
    pub interner_capacity: usize,
    /// Deepest node nesting accepted; the root is depth 0
    pub max_depth: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            interner_capacity: DEFAULT_INTERNER_CAPACITY,
            max_depth: MAX_AST_DEPTH,
        }
    }
}

/// Decode a complete `-ast-dump=json` document using the builtin kinds.
///
/// The root must be a `TranslationUnitDecl`. The returned arena is not yet
/// linked or location-filled; see [`super::linker::link_tree`] and
/// [`super::location_fill::fill_locations`].
pub fn decode_document(bytes: &[u8], options: &DecodeOptions) -> Result<NodeArena, DecodeError> {
    decode_document_with_registry(bytes, options, kind_registry())
}

/// Like [`decode_document`], against a caller-supplied registry.
pub fn decode_document_with_registry(
    bytes: &[u8],
    options: &DecodeOptions,
    registry: &KindRegistry,
) -> Result<NodeArena, DecodeError> {
    let value = parse_json(bytes)?;
    let node_capacity = (bytes.len() / BYTES_PER_NODE_ESTIMATE).max(DEFAULT_NODE_CAPACITY);
    decode_root(&value, options, registry, node_capacity)
}

/// Decode an already-parsed document using the builtin kinds.
pub fn decode_value(value: &Value, options: &DecodeOptions) -> Result<NodeArena, DecodeError> {
    decode_root(value, options, kind_registry(), DEFAULT_NODE_CAPACITY)
}

fn parse_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    // Nesting is bounded by DecodeOptions::max_depth instead.
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

#[tracing::instrument(level = "debug", skip_all, fields(max_depth = options.max_depth))]
fn decode_root(
    value: &Value,
    options: &DecodeOptions,
    registry: &KindRegistry,
    node_capacity: usize,
) -> Result<NodeArena, DecodeError> {
    let kind = get_str(value, "kind");
    if kind != TRANSLATION_UNIT_DECL {
        return Err(DecodeError::UnexpectedRoot {
            kind: kind.to_string(),
        });
    }

    let mut ctx = ParseContext::new(
        registry,
        options.interner_capacity,
        node_capacity,
        options.max_depth,
    );
    decode_node(value, &mut ctx, 0)?;

    let arena = ctx.into_arena();
    debug!(
        nodes = arena.len(),
        strings = arena.interner().len(),
        "decoded document"
    );
    Ok(arena)
}

/// Decode one node object and its subtree. `Ok(None)` means the object had
/// no kind and was skipped.
fn decode_node(
    value: &Value,
    ctx: &mut ParseContext<'_>,
    depth: u32,
) -> Result<Option<NodeIndex>, DecodeError> {
    let kind = get_str(value, "kind");
    if kind.is_empty() {
        return Ok(None);
    }
    if depth > ctx.max_depth {
        return Err(DecodeError::DepthLimitExceeded {
            limit: ctx.max_depth,
        });
    }

    let Some(ctor) = ctx.registry.resolve(kind) else {
        return Err(DecodeError::UnknownKind {
            kind: kind.to_string(),
            id: get_str(value, "id").to_string(),
        });
    };

    let mut data = ctor();
    data.unmarshal(value, ctx);

    let mut node = Node::new(ctx.intern(kind), data);
    node.id = ctx.intern(get_str(value, "id"));
    node.loc = value.get("loc").and_then(|v| decode_loc(v, ctx, 0));
    node.range = value.get("range").and_then(|v| decode_range(v, ctx));

    let id = node.id;
    let index = ctx.arena.add(node);
    ctx.arena.index_id(id, index);

    if let Some(items) = value.get("inner").and_then(Value::as_array) {
        let mut inner = Vec::with_capacity(items.len());
        for item in items {
            match decode_node(item, ctx, depth + 1)? {
                Some(child) => inner.push(child),
                None => trace!(parent = index.0, "skipping child without kind"),
            }
        }
        if let Some(node) = ctx.arena.get_mut(index) {
            node.inner = inner;
        }
    }

    Ok(Some(index))
}

/// Decode a `loc`-shaped object. Null, non-objects and `{}` are absent.
fn decode_loc(value: &Value, ctx: &mut ParseContext<'_>, depth: u32) -> Option<Loc> {
    let obj = value.as_object()?;
    if obj.is_empty() || depth > MAX_LOC_DEPTH {
        return None;
    }

    let included_from = value
        .get("includedFrom")
        .map(|v| get_str(v, "file"))
        .unwrap_or("");

    let mut loc = Loc {
        offset: get_u32(value, "offset"),
        file: ctx.intern(get_str(value, "file")),
        line: get_u32(value, "line"),
        presumed_file: ctx.intern(get_str(value, "presumedFile")),
        presumed_line: get_u32(value, "presumedLine"),
        col: get_u32(value, "col"),
        tok_len: get_u32(value, "tokLen"),
        included_from: ctx.intern(included_from),
        is_macro_arg_expansion: get_bool(value, "isMacroArgExpansion"),
        spelling_loc: None,
        expansion_loc: None,
    };
    loc.spelling_loc = value
        .get("spellingLoc")
        .and_then(|v| decode_loc(v, ctx, depth + 1))
        .map(Box::new);
    loc.expansion_loc = value
        .get("expansionLoc")
        .and_then(|v| decode_loc(v, ctx, depth + 1))
        .map(Box::new);
    Some(loc)
}

/// A range needs both ends; if either is absent the whole range is.
fn decode_range(value: &Value, ctx: &mut ParseContext<'_>) -> Option<SourceRange> {
    if !value.is_object() {
        return None;
    }
    let begin = decode_loc(value.get("begin")?, ctx, 0)?;
    let end = decode_loc(value.get("end")?, ctx, 0)?;
    Some(SourceRange::new(begin, end))
}
