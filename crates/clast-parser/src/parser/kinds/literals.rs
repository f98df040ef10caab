//! Literal kinds.

use super::exprs::ExprData;
use crate::parser::context::ParseContext;
use crate::parser::json::{get_i64, get_string};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use serde::Serialize;
use serde_json::Value;

/// Integer, floating and string literals. clang renders the value as text
/// (`"42"`, `"1.5"`, `"\"hello\""`), so it is kept verbatim.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LiteralData {
    pub expr: ExprData,
    pub value: String,
}

impl Unmarshal for LiteralData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.value = get_string(value, "value");
    }
}

/// Character literals carry their code point as a JSON number.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CharacterLiteralData {
    pub expr: ExprData,
    pub value: i64,
}

impl Unmarshal for CharacterLiteralData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.value = get_i64(value, "value");
    }
}

fn literal() -> NodeData {
    NodeData::Literal(LiteralData::default())
}

fn character_literal() -> NodeData {
    NodeData::CharacterLiteral(CharacterLiteralData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (INTEGER_LITERAL, literal),
    (STRING_LITERAL, literal),
    (CHARACTER_LITERAL, character_literal),
    (FLOATING_LITERAL, literal),
];
