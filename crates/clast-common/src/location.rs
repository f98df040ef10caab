//! Source location types as clang's JSON dumper emits them.
//!
//! clang writes a `loc` object per node and a `range` object with `begin` and
//! `end` locations. Any of `file`, `line` and `col` may be missing when it is
//! unchanged from the previously emitted location, so every component is
//! optional here and a separate pass reconstructs the omitted ones.

use crate::interner::Atom;
use serde::{Deserialize, Serialize};

/// A single point in source text.
///
/// `file`, `presumed_file` and `included_from` use `Atom::NONE` for "not
/// present". Macro locations nest: a location produced by macro expansion
/// carries a `spelling_loc` and an `expansion_loc` instead of its own
/// line/column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Loc {
    pub offset: Option<u32>,
    pub file: Atom,
    pub line: Option<u32>,
    pub presumed_file: Atom,
    pub presumed_line: Option<u32>,
    pub col: Option<u32>,
    pub tok_len: Option<u32>,
    pub included_from: Atom,
    pub is_macro_arg_expansion: bool,
    pub spelling_loc: Option<Box<Loc>>,
    pub expansion_loc: Option<Box<Loc>>,
}

impl Loc {
    /// Location with only the three carried components set.
    pub fn new(file: Atom, line: u32, col: u32) -> Loc {
        Loc {
            file,
            line: Some(line),
            col: Some(col),
            ..Loc::default()
        }
    }

    #[inline]
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    #[inline]
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }

    #[inline]
    pub fn has_col(&self) -> bool {
        self.col.is_some()
    }

    /// True when none of file, line or column is present.
    pub fn is_unpositioned(&self) -> bool {
        !self.has_file() && !self.has_line() && !self.has_col()
    }

    /// Whether this location came out of a macro expansion.
    pub fn is_macro_location(&self) -> bool {
        self.spelling_loc.is_some() || self.expansion_loc.is_some()
    }
}

/// A begin/end pair delimiting a node's source span.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SourceRange {
    pub begin: Loc,
    pub end: Loc,
}

impl SourceRange {
    pub fn new(begin: Loc, end: Loc) -> SourceRange {
        SourceRange { begin, end }
    }
}

/// Flat type descriptor attached by value to typed nodes.
///
/// Decoded straight from clang's `type` object:
/// `{"qualType": "size_t", "desugaredQualType": "unsigned long", "typeAliasDeclId": "0x..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeDesc {
    pub qual_type: String,
    pub desugared_qual_type: Option<String>,
    pub type_alias_decl_id: Option<String>,
}

impl TypeDesc {
    /// The fully desugared spelling, falling back to the written one.
    pub fn canonical(&self) -> &str {
        self.desugared_qual_type
            .as_deref()
            .unwrap_or(&self.qual_type)
    }

    pub fn is_empty(&self) -> bool {
        self.qual_type.is_empty()
            && self.desugared_qual_type.is_none()
            && self.type_alias_decl_id.is_none()
    }
}
