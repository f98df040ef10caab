//! Expression kinds.
//!
//! Every expression payload embeds [`ExprData`], the `type` and
//! `valueCategory` pair clang attaches to all value-producing nodes.
//! Operators and literals reuse it.

use super::decls::DeclRef;
use crate::parser::context::ParseContext;
use crate::parser::json::{get_bool, get_str, get_string, get_type};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use clast_common::{Atom, TypeDesc};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ExprData {
    pub ty: TypeDesc,
    /// Interned `"prvalue"`, `"lvalue"` or `"xvalue"`
    pub value_category: Atom,
}

impl Unmarshal for ExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.ty = get_type(value, "type");
        self.value_category = ctx.intern(get_str(value, "valueCategory"));
    }
}

/// A constant-folded expression; `value` is clang's rendering of the result.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConstantExprData {
    pub expr: ExprData,
    pub value: String,
}

impl Unmarshal for ConstantExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.value = get_string(value, "value");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DeclRefExprData {
    pub expr: ExprData,
    pub referenced_decl: DeclRef,
    /// `"unevaluated"`, `"constant"`, `"discarded"`, or empty
    pub non_odr_use_reason: String,
}

impl Unmarshal for DeclRefExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.referenced_decl = DeclRef::from_field(value, "referencedDecl", ctx);
        self.non_odr_use_reason = get_string(value, "nonOdrUseReason");
    }
}

/// `ImplicitCastExpr` and `CStyleCastExpr`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CastExprData {
    pub expr: ExprData,
    /// `"LValueToRValue"`, `"IntegralCast"`, `"NoOp"`, ...
    pub cast_kind: String,
}

impl Unmarshal for CastExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.cast_kind = get_string(value, "castKind");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct MemberExprData {
    pub expr: ExprData,
    pub is_arrow: bool,
    pub name: String,
    /// Id of the `FieldDecl` being accessed
    pub referenced_member_decl: String,
}

impl Unmarshal for MemberExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.is_arrow = get_bool(value, "isArrow");
        self.name = get_string(value, "name");
        self.referenced_member_decl = get_string(value, "referencedMemberDecl");
    }
}

/// `sizeof` / `_Alignof`. `arg_type` is set only for the type-operand form.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UnaryExprOrTypeTraitExprData {
    pub expr: ExprData,
    pub name: String,
    pub arg_type: TypeDesc,
}

impl Unmarshal for UnaryExprOrTypeTraitExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.name = get_string(value, "name");
        self.arg_type = get_type(value, "argType");
    }
}

/// GNU `&&label`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddrLabelExprData {
    pub expr: ExprData,
    pub label_decl_id: String,
    pub name: String,
}

impl Unmarshal for AddrLabelExprData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.expr.unmarshal(value, ctx);
        self.label_decl_id = get_string(value, "labelDeclId");
        self.name = get_string(value, "name");
    }
}

pub(crate) fn expr() -> NodeData {
    NodeData::Expr(ExprData::default())
}

fn constant_expr() -> NodeData {
    NodeData::ConstantExpr(ConstantExprData::default())
}

fn decl_ref_expr() -> NodeData {
    NodeData::DeclRefExpr(DeclRefExprData::default())
}

fn cast_expr() -> NodeData {
    NodeData::CastExpr(CastExprData::default())
}

fn member_expr() -> NodeData {
    NodeData::MemberExpr(MemberExprData::default())
}

fn unary_expr_or_type_trait_expr() -> NodeData {
    NodeData::UnaryExprOrTypeTraitExpr(UnaryExprOrTypeTraitExprData::default())
}

fn addr_label_expr() -> NodeData {
    NodeData::AddrLabelExpr(AddrLabelExprData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (CONSTANT_EXPR, constant_expr),
    (DECL_REF_EXPR, decl_ref_expr),
    (IMPLICIT_CAST_EXPR, cast_expr),
    (PAREN_EXPR, expr),
    (C_STYLE_CAST_EXPR, cast_expr),
    (CALL_EXPR, expr),
    (MEMBER_EXPR, member_expr),
    (ARRAY_SUBSCRIPT_EXPR, expr),
    (UNARY_EXPR_OR_TYPE_TRAIT_EXPR, unary_expr_or_type_trait_expr),
    (STMT_EXPR, expr),
    (INIT_LIST_EXPR, expr),
    (IMPLICIT_VALUE_INIT_EXPR, expr),
    (OFFSET_OF_EXPR, expr),
    (COMPOUND_LITERAL_EXPR, expr),
    (ADDR_LABEL_EXPR, addr_label_expr),
    (GENERIC_SELECTION_EXPR, expr),
    (PREDEFINED_EXPR, expr),
    (CHOOSE_EXPR, expr),
    (TYPE_TRAIT_EXPR, expr),
    (RECOVERY_EXPR, expr),
    (OPAQUE_VALUE_EXPR, expr),
];
