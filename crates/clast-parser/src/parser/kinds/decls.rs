//! Declaration kinds.

use crate::parser::context::ParseContext;
use crate::parser::json::{get_bool, get_str, get_string, get_type};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use clast_common::{Atom, TypeDesc};
use serde::Serialize;
use serde_json::Value;

use super::bare;

/// A reference to another declaration, embedded in expressions and types
/// (`referencedDecl`, `decl`, `ownedTagDecl`).
///
/// `id` points at the declaring node; look it up with
/// `NodeArena::find_by_id`. `ty` is empty for type-side references.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeclRef {
    pub id: Atom,
    pub kind: Atom,
    pub name: String,
    pub ty: TypeDesc,
}

impl DeclRef {
    /// Decode the object under `key`; a missing object leaves the default.
    pub(crate) fn from_field(value: &Value, key: &str, ctx: &mut ParseContext<'_>) -> DeclRef {
        let mut decl = DeclRef::default();
        if let Some(obj) = value.get(key).filter(|v| v.is_object()) {
            decl.unmarshal(obj, ctx);
        }
        decl
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_empty()
    }
}

impl Unmarshal for DeclRef {
    fn unmarshal(&mut self, value: &Value, ctx: &mut ParseContext<'_>) {
        self.id = ctx.intern(get_str(value, "id"));
        self.kind = ctx.intern(get_str(value, "kind"));
        self.name = get_string(value, "name");
        self.ty = get_type(value, "type");
    }
}

/// Declarations that carry only a name (`EnumDecl`).
#[derive(Clone, Debug, Default, Serialize)]
pub struct NamedDeclData {
    pub name: String,
}

impl Unmarshal for NamedDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct TypedefDeclData {
    pub is_implicit: bool,
    pub name: String,
    pub ty: TypeDesc,
}

impl Unmarshal for TypedefDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.is_implicit = get_bool(value, "isImplicit");
        self.name = get_string(value, "name");
        self.ty = get_type(value, "type");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct EnumConstantDeclData {
    pub name: String,
    pub ty: TypeDesc,
}

impl Unmarshal for EnumConstantDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.ty = get_type(value, "type");
    }
}

/// `struct` / `union` declarations. Anonymous records have an empty name.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecordDeclData {
    pub name: String,
    /// `"struct"` or `"union"`
    pub tag_used: String,
    pub complete_definition: bool,
}

impl Unmarshal for RecordDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.tag_used = get_string(value, "tagUsed");
        self.complete_definition = get_bool(value, "completeDefinition");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldDeclData {
    pub name: String,
    pub ty: TypeDesc,
    pub is_bitfield: bool,
}

impl Unmarshal for FieldDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.ty = get_type(value, "type");
        self.is_bitfield = get_bool(value, "isBitfield");
    }
}

/// Members of anonymous structs/unions, hoisted into the enclosing record.
#[derive(Clone, Debug, Default, Serialize)]
pub struct IndirectFieldDeclData {
    pub name: String,
    pub is_implicit: bool,
}

impl Unmarshal for IndirectFieldDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.is_implicit = get_bool(value, "isImplicit");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct FunctionDeclData {
    pub is_used: bool,
    pub name: String,
    pub mangled_name: String,
    pub ty: TypeDesc,
    /// `"static"`, `"extern"`, or empty
    pub storage_class: String,
    pub inline: bool,
}

impl Unmarshal for FunctionDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.is_used = get_bool(value, "isUsed");
        self.name = get_string(value, "name");
        self.mangled_name = get_string(value, "mangledName");
        self.ty = get_type(value, "type");
        self.storage_class = get_string(value, "storageClass");
        self.inline = get_bool(value, "inline");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct VarDeclData {
    pub is_used: bool,
    pub name: String,
    pub mangled_name: String,
    pub ty: TypeDesc,
    pub storage_class: String,
    /// Initialization style: `"c"`, `"call"`, `"list"`, or empty
    pub init: String,
}

impl Unmarshal for VarDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.is_used = get_bool(value, "isUsed");
        self.name = get_string(value, "name");
        self.mangled_name = get_string(value, "mangledName");
        self.ty = get_type(value, "type");
        self.storage_class = get_string(value, "storageClass");
        self.init = get_string(value, "init");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ParmVarDeclData {
    pub is_used: bool,
    pub name: String,
    pub mangled_name: String,
    pub ty: TypeDesc,
}

impl Unmarshal for ParmVarDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.is_used = get_bool(value, "isUsed");
        self.name = get_string(value, "name");
        self.mangled_name = get_string(value, "mangledName");
        self.ty = get_type(value, "type");
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct LabelDeclData {
    pub is_used: bool,
    pub name: String,
}

impl Unmarshal for LabelDeclData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.is_used = get_bool(value, "isUsed");
        self.name = get_string(value, "name");
    }
}

fn named_decl() -> NodeData {
    NodeData::NamedDecl(NamedDeclData::default())
}

fn typedef_decl() -> NodeData {
    NodeData::TypedefDecl(TypedefDeclData::default())
}

fn enum_constant_decl() -> NodeData {
    NodeData::EnumConstantDecl(EnumConstantDeclData::default())
}

fn record_decl() -> NodeData {
    NodeData::RecordDecl(RecordDeclData::default())
}

fn field_decl() -> NodeData {
    NodeData::FieldDecl(FieldDeclData::default())
}

fn function_decl() -> NodeData {
    NodeData::FunctionDecl(FunctionDeclData::default())
}

fn var_decl() -> NodeData {
    NodeData::VarDecl(VarDeclData::default())
}

fn parm_var_decl() -> NodeData {
    NodeData::ParmVarDecl(ParmVarDeclData::default())
}

fn label_decl() -> NodeData {
    NodeData::LabelDecl(LabelDeclData::default())
}

fn indirect_field_decl() -> NodeData {
    NodeData::IndirectFieldDecl(IndirectFieldDeclData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (TRANSLATION_UNIT_DECL, bare),
    (TYPEDEF_DECL, typedef_decl),
    (ENUM_DECL, named_decl),
    (ENUM_CONSTANT_DECL, enum_constant_decl),
    (RECORD_DECL, record_decl),
    (FIELD_DECL, field_decl),
    (FUNCTION_DECL, function_decl),
    (VAR_DECL, var_decl),
    (PARM_VAR_DECL, parm_var_decl),
    (EMPTY_DECL, bare),
    (STATIC_ASSERT_DECL, bare),
    (LABEL_DECL, label_decl),
    (INDIRECT_FIELD_DECL, indirect_field_decl),
];
