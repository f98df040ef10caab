//! Statement kinds. Only `goto` and labels carry fields.

use super::bare;
use crate::parser::context::ParseContext;
use crate::parser::json::get_string;
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize)]
pub struct GotoStmtData {
    pub target_label_decl_id: String,
}

impl Unmarshal for GotoStmtData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.target_label_decl_id = get_string(value, "targetLabelDeclId");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct LabelStmtData {
    pub name: String,
    pub decl_id: String,
}

impl Unmarshal for LabelStmtData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.decl_id = get_string(value, "declId");
    }
}

fn goto_stmt() -> NodeData {
    NodeData::GotoStmt(GotoStmtData::default())
}

fn label_stmt() -> NodeData {
    NodeData::LabelStmt(LabelStmtData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (COMPOUND_STMT, bare),
    (GCC_ASM_STMT, bare),
    (RETURN_STMT, bare),
    (DECL_STMT, bare),
    (IF_STMT, bare),
    (SWITCH_STMT, bare),
    (CASE_STMT, bare),
    (ATTRIBUTED_STMT, bare),
    (NULL_STMT, bare),
    (BREAK_STMT, bare),
    (GOTO_STMT, goto_stmt),
    (DEFAULT_STMT, bare),
    (DO_STMT, bare),
    (FOR_STMT, bare),
    (LABEL_STMT, label_stmt),
    (CONTINUE_STMT, bare),
    (WHILE_STMT, bare),
];
