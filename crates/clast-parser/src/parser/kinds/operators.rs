//! Operator kinds.

use super::exprs::{ExprData, expr};
use crate::parser::context::ParseContext;
use crate::parser::json::{get_bool, get_string, get_type};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use clast_common::TypeDesc;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize)]
pub struct BinaryOperatorData {
    pub expr: ExprData,
    /// Operator spelling: `"+"`, `"=="`, `","`, ...
    pub opcode: String,
}

impl Unmarshal for BinaryOperatorData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.opcode = get_string(value, "opcode");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UnaryOperatorData {
    pub expr: ExprData,
    pub is_postfix: bool,
    pub opcode: String,
    pub can_overflow: bool,
}

impl Unmarshal for UnaryOperatorData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.is_postfix = get_bool(value, "isPostfix");
        self.opcode = get_string(value, "opcode");
        self.can_overflow = get_bool(value, "canOverflow");
    }
}

/// `+=`, `<<=`, ... clang records the operand types the operation is
/// computed in as type objects.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CompoundAssignOperatorData {
    pub expr: ExprData,
    pub opcode: String,
    pub compute_lhs_type: TypeDesc,
    pub compute_result_type: TypeDesc,
}

impl Unmarshal for CompoundAssignOperatorData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.opcode = get_string(value, "opcode");
        self.compute_lhs_type = get_type(value, "computeLHSType");
        self.compute_result_type = get_type(value, "computeResultType");
    }
}

fn binary_operator() -> NodeData {
    NodeData::BinaryOperator(BinaryOperatorData::default())
}

fn unary_operator() -> NodeData {
    NodeData::UnaryOperator(UnaryOperatorData::default())
}

fn compound_assign_operator() -> NodeData {
    NodeData::CompoundAssignOperator(CompoundAssignOperatorData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (BINARY_OPERATOR, binary_operator),
    (UNARY_OPERATOR, unary_operator),
    (CONDITIONAL_OPERATOR, expr),
    (COMPOUND_ASSIGN_OPERATOR, compound_assign_operator),
    (BINARY_CONDITIONAL_OPERATOR, expr),
];
