//! Per-category payload layouts and the registry sub-tables that map kind
//! tags onto them.
//!
//! Each submodule owns one category of clang node kinds (attributes,
//! comments, declarations, expressions, literals, operators, statements,
//! types) and exposes a `TABLE` of `(kind, constructor)` pairs. The
//! registry merges the eight tables once.

use super::node::NodeData;

pub mod attrs;
pub mod comments;
pub mod decls;
pub mod exprs;
pub mod literals;
pub mod operators;
pub mod stmts;
pub mod types;

/// Constructor for kinds without a payload.
pub(crate) fn bare() -> NodeData {
    NodeData::None
}
