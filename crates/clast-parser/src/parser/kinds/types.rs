//! Type kinds, as they appear in `TypedefDecl` children and
//! `-ast-dump-all` output.

use super::decls::DeclRef;
use crate::parser::context::ParseContext;
use crate::parser::json::{get_string, get_type, get_u64};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use clast_common::TypeDesc;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize)]
pub struct TypeNodeData {
    pub ty: TypeDesc,
}

impl Unmarshal for TypeNodeData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.ty = get_type(value, "type");
    }
}

/// Types naming a declaration: `RecordType`, `TypedefType`, `EnumType`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeclTypeData {
    pub base: TypeNodeData,
    pub decl: DeclRef,
}

impl Unmarshal for DeclTypeData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.base.unmarshal(value, ctx);
        self.decl = DeclRef::from_field(value, "decl", ctx);
    }
}

/// `struct foo` written with its tag; `owned_tag_decl` is set when the
/// record is defined inline.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ElaboratedTypeData {
    pub base: TypeNodeData,
    pub owned_tag_decl: DeclRef,
}

impl Unmarshal for ElaboratedTypeData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.base.unmarshal(value, ctx);
        self.owned_tag_decl = DeclRef::from_field(value, "ownedTagDecl", ctx);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ConstantArrayTypeData {
    pub base: TypeNodeData,
    pub size: u64,
}

impl Unmarshal for ConstantArrayTypeData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.base.unmarshal(value, ctx);
        self.size = get_u64(value, "size");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct FunctionProtoTypeData {
    pub base: TypeNodeData,
    /// Calling convention, e.g. `"cdecl"`
    pub cc: String,
}

impl Unmarshal for FunctionProtoTypeData {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.base.unmarshal(value, ctx);
        self.cc = get_string(value, "cc");
    }
}

fn type_node() -> NodeData {
    NodeData::Type(TypeNodeData::default())
}

fn decl_type() -> NodeData {
    NodeData::DeclType(DeclTypeData::default())
}

fn elaborated_type() -> NodeData {
    NodeData::ElaboratedType(ElaboratedTypeData::default())
}

fn constant_array_type() -> NodeData {
    NodeData::ConstantArrayType(ConstantArrayTypeData::default())
}

fn function_proto_type() -> NodeData {
    NodeData::FunctionProtoType(FunctionProtoTypeData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (BUILTIN_TYPE, type_node),
    (RECORD_TYPE, decl_type),
    (POINTER_TYPE, type_node),
    (CONSTANT_ARRAY_TYPE, constant_array_type),
    (TYPEDEF_TYPE, decl_type),
    (ELABORATED_TYPE, elaborated_type),
    (PAREN_TYPE, type_node),
    (FUNCTION_PROTO_TYPE, function_proto_type),
    (QUAL_TYPE, type_node),
    (ENUM_TYPE, decl_type),
];
