//! Centralized limits and thresholds for the decoder.
//!
//! The JSON layer runs without serde_json's own nesting limit, so the
//! decoder bounds recursion itself. Post-decode passes are iterative and
//! need no limit.

/// Maximum node nesting depth accepted by the decoder.
///
/// Each AST level costs two JSON levels (the node object and its `inner`
/// array). Real translation units rarely pass a few hundred levels; long
/// left-associated operator chains are the usual deep case:
///
/// ```c
/// int x = a + b + c + d /* ... a thousand terms ... */;
/// ```
pub const MAX_AST_DEPTH: u32 = 1_024;

/// Maximum nesting for `spellingLoc` / `expansionLoc` chains inside one location.
///
/// clang nests at most one level (a macro location's spelling and expansion
/// are plain locations), so anything deeper is malformed input.
pub const MAX_LOC_DEPTH: u32 = 8;

/// Initial arena capacity used when the document size is unknown.
pub const DEFAULT_NODE_CAPACITY: usize = 1_024;

/// Rough bytes of JSON per decoded node, used to pre-size the arena.
pub const BYTES_PER_NODE_ESTIMATE: usize = 256;

/// Upper bound on arena pre-allocation for very large documents.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;
