//! clang AST node model and the passes that build it.

pub mod base;
pub mod context;
pub mod decoder;
pub mod errors;
pub(crate) mod json;
pub mod kind_names;
pub mod kinds;
pub mod linker;
pub mod location_fill;
pub mod node;
pub mod node_arena;
pub mod registry;
pub mod resolve;
pub mod traversal;

pub use base::NodeIndex;
pub use node::{Node, NodeData};
pub use node_arena::NodeArena;
