//! Node model.
//!
//! Every decoded node shares one header (`Node`): kind tag, id, location,
//! range, children and the tree links. Kind-specific fields live in
//! `NodeData`, a closed set of payload layouts. Kinds with identical field
//! sets share a layout (every `*Stmt` without extra fields uses
//! `NodeData::None`, both cast expressions use `NodeData::CastExpr`), so the
//! ~100 registered kinds map onto a few dozen variants.

use super::base::NodeIndex;
use super::context::ParseContext;
use super::kinds::attrs::ImplicitAttrData;
use super::kinds::comments::{
    InlineCommandCommentData, NamedCommentData, TextCommentData, VerbatimBlockCommentData,
};
use super::kinds::decls::{
    EnumConstantDeclData, FieldDeclData, FunctionDeclData, IndirectFieldDeclData, LabelDeclData,
    NamedDeclData, ParmVarDeclData, RecordDeclData, TypedefDeclData, VarDeclData,
};
use super::kinds::exprs::{
    AddrLabelExprData, CastExprData, ConstantExprData, DeclRefExprData, ExprData, MemberExprData,
    UnaryExprOrTypeTraitExprData,
};
use super::kinds::literals::{CharacterLiteralData, LiteralData};
use super::kinds::operators::{BinaryOperatorData, CompoundAssignOperatorData, UnaryOperatorData};
use super::kinds::stmts::{GotoStmtData, LabelStmtData};
use super::kinds::types::{
    ConstantArrayTypeData, DeclTypeData, ElaboratedTypeData, FunctionProtoTypeData, TypeNodeData,
};
use clast_common::{Atom, Loc, SourceRange, TypeDesc};
use serde::Serialize;
use serde_json::Value;

/// Kind-specific field decoding.
///
/// Implementations read only the fields they know; anything else in the
/// object is ignored. The shared header (`id`, `kind`, `loc`, `range`,
/// `inner`) is decoded by the decoder, not here.
pub trait Unmarshal {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>);
}

/// One decoded AST node.
#[derive(Clone, Debug, Serialize)]
pub struct Node {
    /// Interned kind tag (`"FunctionDecl"`, `"BinaryOperator"`, ...)
    pub kind: Atom,
    /// Interned clang node id (`"0x55d0c8a3b2c8"`); unique per document
    pub id: Atom,
    /// `None` until the location filler runs when clang omitted it
    pub loc: Option<Loc>,
    pub range: Option<SourceRange>,
    /// Children in document order
    pub inner: Vec<NodeIndex>,
    pub parent: NodeIndex,
    pub prev_sibling: NodeIndex,
    pub next_sibling: NodeIndex,
    pub data: NodeData,
}

impl Node {
    pub fn new(kind: Atom, data: NodeData) -> Node {
        Node {
            kind,
            id: Atom::NONE,
            loc: None,
            range: None,
            inner: Vec::new(),
            parent: NodeIndex::NONE,
            prev_sibling: NodeIndex::NONE,
            next_sibling: NodeIndex::NONE,
            data,
        }
    }

    /// Child indices in document order.
    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        &self.inner
    }
}

/// Kind-specific payload.
#[derive(Clone, Debug, Default, Serialize)]
pub enum NodeData {
    /// Kinds that carry nothing beyond the shared header
    #[default]
    None,

    // Attributes
    ImplicitAttr(ImplicitAttrData),

    // Comments
    InlineCommandComment(InlineCommandCommentData),
    BlockCommandComment(NamedCommentData),
    VerbatimBlockComment(VerbatimBlockCommentData),
    TextComment(TextCommentData),

    // Declarations
    NamedDecl(NamedDeclData),
    TypedefDecl(TypedefDeclData),
    EnumConstantDecl(EnumConstantDeclData),
    RecordDecl(RecordDeclData),
    FieldDecl(FieldDeclData),
    IndirectFieldDecl(IndirectFieldDeclData),
    FunctionDecl(FunctionDeclData),
    VarDecl(VarDeclData),
    ParmVarDecl(ParmVarDeclData),
    LabelDecl(LabelDeclData),

    // Expressions (also generic operators)
    Expr(ExprData),
    ConstantExpr(ConstantExprData),
    DeclRefExpr(DeclRefExprData),
    CastExpr(CastExprData),
    MemberExpr(MemberExprData),
    UnaryExprOrTypeTraitExpr(UnaryExprOrTypeTraitExprData),
    AddrLabelExpr(AddrLabelExprData),

    // Literals
    Literal(LiteralData),
    CharacterLiteral(CharacterLiteralData),

    // Operators
    BinaryOperator(BinaryOperatorData),
    UnaryOperator(UnaryOperatorData),
    CompoundAssignOperator(CompoundAssignOperatorData),

    // Statements
    GotoStmt(GotoStmtData),
    LabelStmt(LabelStmtData),

    // Types
    Type(TypeNodeData),
    DeclType(DeclTypeData),
    ElaboratedType(ElaboratedTypeData),
    ConstantArrayType(ConstantArrayTypeData),
    FunctionProtoType(FunctionProtoTypeData),
}

impl NodeData {
    /// Decode the kind-specific fields into this zero-valued payload.
    pub fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        match self {
            NodeData::None => {}
            NodeData::ImplicitAttr(d) => d.unmarshal(value, ctx),
            NodeData::InlineCommandComment(d) => d.unmarshal(value, ctx),
            NodeData::BlockCommandComment(d) => d.unmarshal(value, ctx),
            NodeData::VerbatimBlockComment(d) => d.unmarshal(value, ctx),
            NodeData::TextComment(d) => d.unmarshal(value, ctx),
            NodeData::NamedDecl(d) => d.unmarshal(value, ctx),
            NodeData::TypedefDecl(d) => d.unmarshal(value, ctx),
            NodeData::EnumConstantDecl(d) => d.unmarshal(value, ctx),
            NodeData::RecordDecl(d) => d.unmarshal(value, ctx),
            NodeData::FieldDecl(d) => d.unmarshal(value, ctx),
            NodeData::IndirectFieldDecl(d) => d.unmarshal(value, ctx),
            NodeData::FunctionDecl(d) => d.unmarshal(value, ctx),
            NodeData::VarDecl(d) => d.unmarshal(value, ctx),
            NodeData::ParmVarDecl(d) => d.unmarshal(value, ctx),
            NodeData::LabelDecl(d) => d.unmarshal(value, ctx),
            NodeData::Expr(d) => d.unmarshal(value, ctx),
            NodeData::ConstantExpr(d) => d.unmarshal(value, ctx),
            NodeData::DeclRefExpr(d) => d.unmarshal(value, ctx),
            NodeData::CastExpr(d) => d.unmarshal(value, ctx),
            NodeData::MemberExpr(d) => d.unmarshal(value, ctx),
            NodeData::UnaryExprOrTypeTraitExpr(d) => d.unmarshal(value, ctx),
            NodeData::AddrLabelExpr(d) => d.unmarshal(value, ctx),
            NodeData::Literal(d) => d.unmarshal(value, ctx),
            NodeData::CharacterLiteral(d) => d.unmarshal(value, ctx),
            NodeData::BinaryOperator(d) => d.unmarshal(value, ctx),
            NodeData::UnaryOperator(d) => d.unmarshal(value, ctx),
            NodeData::CompoundAssignOperator(d) => d.unmarshal(value, ctx),
            NodeData::GotoStmt(d) => d.unmarshal(value, ctx),
            NodeData::LabelStmt(d) => d.unmarshal(value, ctx),
            NodeData::Type(d) => d.unmarshal(value, ctx),
            NodeData::DeclType(d) => d.unmarshal(value, ctx),
            NodeData::ElaboratedType(d) => d.unmarshal(value, ctx),
            NodeData::ConstantArrayType(d) => d.unmarshal(value, ctx),
            NodeData::FunctionProtoType(d) => d.unmarshal(value, ctx),
        }
    }

    /// The declared or referenced name, for kinds that have one.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            NodeData::InlineCommandComment(d) => &d.name,
            NodeData::BlockCommandComment(d) => &d.name,
            NodeData::VerbatimBlockComment(d) => &d.name,
            NodeData::NamedDecl(d) => &d.name,
            NodeData::TypedefDecl(d) => &d.name,
            NodeData::EnumConstantDecl(d) => &d.name,
            NodeData::RecordDecl(d) => &d.name,
            NodeData::FieldDecl(d) => &d.name,
            NodeData::IndirectFieldDecl(d) => &d.name,
            NodeData::FunctionDecl(d) => &d.name,
            NodeData::VarDecl(d) => &d.name,
            NodeData::ParmVarDecl(d) => &d.name,
            NodeData::LabelDecl(d) => &d.name,
            NodeData::DeclRefExpr(d) => &d.referenced_decl.name,
            NodeData::MemberExpr(d) => &d.name,
            NodeData::UnaryExprOrTypeTraitExpr(d) => &d.name,
            NodeData::AddrLabelExpr(d) => &d.name,
            NodeData::LabelStmt(d) => &d.name,
            NodeData::DeclType(d) => &d.decl.name,
            _ => return None,
        };
        if name.is_empty() { None } else { Some(name) }
    }

    /// The attached type descriptor, for typed kinds.
    pub fn type_desc(&self) -> Option<&TypeDesc> {
        match self {
            NodeData::TypedefDecl(d) => Some(&d.ty),
            NodeData::EnumConstantDecl(d) => Some(&d.ty),
            NodeData::FieldDecl(d) => Some(&d.ty),
            NodeData::FunctionDecl(d) => Some(&d.ty),
            NodeData::VarDecl(d) => Some(&d.ty),
            NodeData::ParmVarDecl(d) => Some(&d.ty),
            NodeData::Expr(d) => Some(&d.ty),
            NodeData::ConstantExpr(d) => Some(&d.expr.ty),
            NodeData::DeclRefExpr(d) => Some(&d.expr.ty),
            NodeData::CastExpr(d) => Some(&d.expr.ty),
            NodeData::MemberExpr(d) => Some(&d.expr.ty),
            NodeData::UnaryExprOrTypeTraitExpr(d) => Some(&d.expr.ty),
            NodeData::AddrLabelExpr(d) => Some(&d.expr.ty),
            NodeData::Literal(d) => Some(&d.expr.ty),
            NodeData::CharacterLiteral(d) => Some(&d.expr.ty),
            NodeData::BinaryOperator(d) => Some(&d.expr.ty),
            NodeData::UnaryOperator(d) => Some(&d.expr.ty),
            NodeData::CompoundAssignOperator(d) => Some(&d.expr.ty),
            NodeData::Type(d) => Some(&d.ty),
            NodeData::DeclType(d) => Some(&d.base.ty),
            NodeData::ElaboratedType(d) => Some(&d.base.ty),
            NodeData::ConstantArrayType(d) => Some(&d.base.ty),
            NodeData::FunctionProtoType(d) => Some(&d.base.ty),
            _ => None,
        }
    }

    /// The shared expression fields, for expression, literal and operator kinds.
    pub fn expr(&self) -> Option<&ExprData> {
        match self {
            NodeData::Expr(d) => Some(d),
            NodeData::ConstantExpr(d) => Some(&d.expr),
            NodeData::DeclRefExpr(d) => Some(&d.expr),
            NodeData::CastExpr(d) => Some(&d.expr),
            NodeData::MemberExpr(d) => Some(&d.expr),
            NodeData::UnaryExprOrTypeTraitExpr(d) => Some(&d.expr),
            NodeData::AddrLabelExpr(d) => Some(&d.expr),
            NodeData::Literal(d) => Some(&d.expr),
            NodeData::CharacterLiteral(d) => Some(&d.expr),
            NodeData::BinaryOperator(d) => Some(&d.expr),
            NodeData::UnaryOperator(d) => Some(&d.expr),
            NodeData::CompoundAssignOperator(d) => Some(&d.expr),
            _ => None,
        }
    }
}
