//! Attribute kinds.

use crate::parser::context::ParseContext;
use crate::parser::json::get_bool;
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use serde::Serialize;
use serde_json::Value;

use super::bare;

/// Attributes clang may synthesize (`"implicit": true`).
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImplicitAttrData {
    pub implicit: bool,
}

impl Unmarshal for ImplicitAttrData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.implicit = get_bool(value, "implicit");
    }
}

fn implicit_attr() -> NodeData {
    NodeData::ImplicitAttr(ImplicitAttrData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (ALIGNED_ATTR, bare),
    (ALWAYS_INLINE_ATTR, bare),
    (SECTION_ATTR, bare),
    (USED_ATTR, bare),
    (BUILTIN_ATTR, implicit_attr),
    (NO_THROW_ATTR, implicit_attr),
    (CONST_ATTR, implicit_attr),
    (UNUSED_ATTR, bare),
    (FORMAT_ATTR, bare),
    (FALL_THROUGH_ATTR, bare),
    (NO_BUILTIN_ATTR, bare),
    (PACKED_ATTR, bare),
    (LOOP_HINT_ATTR, implicit_attr),
    (WARN_UNUSED_RESULT_ATTR, bare),
    (GNU_INLINE_ATTR, bare),
    (NO_INSTRUMENT_FUNCTION_ATTR, bare),
    (ASM_LABEL_ATTR, bare),
    (RESTRICT_ATTR, bare),
    (ALLOC_SIZE_ATTR, bare),
    (PURE_ATTR, bare),
    (NON_NULL_ATTR, bare),
    (ASSUME_ALIGNED_ATTR, bare),
    (TRANSPARENT_UNION_ATTR, bare),
    (WEAK_ATTR, bare),
    (NO_INLINE_ATTR, bare),
    (DEPRECATED_ATTR, bare),
];
