//! Decode errors.
//!
//! Every error aborts the whole document: the decoder never hands back a
//! partial tree. Structurally odd `loc`/`range` objects are not errors; they
//! decode as "no location".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node carries a kind tag the registry does not know.
    #[error("unknown node kind: {kind}")]
    UnknownKind {
        kind: String,
        /// The node's `id`, empty when the node had none.
        id: String,
    },

    /// The top-level object is not a translation unit.
    #[error("expected TranslationUnitDecl at the document root, found `{kind}`")]
    UnexpectedRoot { kind: String },

    /// Node nesting went past the configured limit.
    #[error("AST nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: u32 },
}

impl DecodeError {
    /// The offending kind tag, for unknown-kind failures.
    pub fn unknown_kind(&self) -> Option<&str> {
        match self {
            DecodeError::UnknownKind { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
