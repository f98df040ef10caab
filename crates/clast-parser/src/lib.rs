//! Decoder for clang's `-ast-dump=json` output.
//!
//! The pipeline is decode → link → fill:
//! - [`parser::decoder`] turns the JSON value tree into a [`NodeArena`] using
//!   the kind registry, interning kind/id/file strings as it goes.
//! - [`parser::linker`] assigns parent and sibling indices.
//! - [`parser::location_fill`] reconstructs the locations clang omitted.
//!
//! Traversal primitives and location resolution helpers live alongside.

pub mod parser;

pub use parser::base::NodeIndex;
pub use parser::decoder::{
    DecodeOptions, decode_document, decode_document_with_registry, decode_value,
};
pub use parser::errors::DecodeError;
pub use parser::linker::link_tree;
pub use parser::location_fill::fill_locations;
pub use parser::node::{Node, NodeData};
pub use parser::node_arena::NodeArena;
pub use parser::registry::{KindRegistry, NodeConstructor, kind_registry};
pub use parser::resolve::{resolve_node_file, resolve_node_location};
pub use parser::traversal::{VisitControl, post_order, pre_order, pre_order_mut};

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "../tests/decoder_tests.rs"]
mod decoder_tests;

#[cfg(test)]
#[path = "../tests/kind_payload_tests.rs"]
mod kind_payload_tests;

#[cfg(test)]
#[path = "../tests/linker_tests.rs"]
mod linker_tests;

#[cfg(test)]
#[path = "../tests/location_fill_tests.rs"]
mod location_fill_tests;

#[cfg(test)]
#[path = "../tests/traversal_tests.rs"]
mod traversal_tests;

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod resolve_tests;
