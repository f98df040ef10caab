//! End-to-end entry points: decode, then link, then fill.
//!
//! The three stages always run in this order and each one finishes before
//! the next starts. Only decoding can fail; once a document has decoded the
//! tree passes cannot.

use clast_parser::{
    DecodeError, DecodeOptions, Node, NodeArena, NodeIndex, decode_document, fill_locations,
    link_tree,
};
use rayon::prelude::*;
use tracing::debug;

/// A fully decoded, linked and location-filled document.
#[derive(Debug)]
pub struct TranslationUnit {
    pub arena: NodeArena,
    /// The `TranslationUnitDecl` node
    pub root: NodeIndex,
}

impl TranslationUnit {
    pub fn root_node(&self) -> Option<&Node> {
        self.arena.get(self.root)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.arena.get(index)
    }

    /// Resolve an atom from this document's pool.
    pub fn resolve(&self, atom: clast_common::Atom) -> &str {
        self.arena.resolve(atom)
    }
}

/// Decode one document with default options.
pub fn parse_translation_unit(bytes: &[u8]) -> Result<TranslationUnit, DecodeError> {
    parse_translation_unit_with(bytes, &DecodeOptions::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(bytes = bytes.len()))]
pub fn parse_translation_unit_with(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<TranslationUnit, DecodeError> {
    let mut arena = decode_document(bytes, options)?;
    let root = arena.root();
    link_tree(&mut arena, root);
    fill_locations(&mut arena, root);
    debug!(nodes = arena.len(), "translation unit ready");
    Ok(TranslationUnit { arena, root })
}

/// Decode independent documents in parallel. Results come back in input
/// order; one failing document does not affect the others.
pub fn parse_translation_units<D>(documents: &[D]) -> Vec<Result<TranslationUnit, DecodeError>>
where
    D: AsRef<[u8]> + Sync,
{
    parse_translation_units_with(documents, &DecodeOptions::default())
}

pub fn parse_translation_units_with<D>(
    documents: &[D],
    options: &DecodeOptions,
) -> Vec<Result<TranslationUnit, DecodeError>>
where
    D: AsRef<[u8]> + Sync,
{
    debug!(documents = documents.len(), "parsing translation units");
    documents
        .par_iter()
        .map(|doc| parse_translation_unit_with(doc.as_ref(), options))
        .collect()
}
