//! clast: decode clang's `-ast-dump=json` output into a linked,
//! location-resolved tree.
//!
//! ```no_run
//! let json = std::fs::read("a.json")?;
//! let unit = clast::parse_translation_unit(&json)?;
//! for (idx, node) in unit.arena.iter() {
//!     let loc = node.loc.as_ref().expect("filled by the pipeline");
//!     println!("{} {} line {:?}", idx.0, unit.arena.resolve(node.kind), loc.line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The heavy lifting lives in the workspace crates:
//! - `clast-common`: interning pool, location types, limits
//! - `clast-parser`: node model, kind registry, decoder and tree passes
//!
//! This crate wires them into the decode → link → fill pipeline and adds
//! the clang runner, tracing setup and the command-line front end.

pub use clast_common::{Atom, Interner, Loc, SourceRange, TypeDesc, limits};
pub use clast_parser::parser::kind_names;
pub use clast_parser::{
    DecodeError, DecodeOptions, KindRegistry, Node, NodeArena, NodeData, NodeIndex,
    VisitControl, kind_registry, post_order, pre_order, resolve_node_file,
    resolve_node_location,
};

pub mod pipeline;
pub use pipeline::{
    TranslationUnit, parse_translation_unit, parse_translation_unit_with,
    parse_translation_units, parse_translation_units_with,
};

pub mod clang;
pub use clang::{ClangError, ClangOptions, dump_ast_json, parse_source_file};

pub mod tracing_config;

#[cfg(feature = "cli")]
pub mod cli;
