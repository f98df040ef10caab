//! Documentation comment kinds (`-fparse-all-comments` / doxygen blocks).

use crate::parser::context::ParseContext;
use crate::parser::json::{get_string, get_string_array};
use crate::parser::kind_names::*;
use crate::parser::node::{NodeData, Unmarshal};
use crate::parser::registry::NodeConstructor;
use serde::Serialize;
use serde_json::Value;

use super::bare;

/// `\c foo`, `\p bar`: a command rendered inline.
#[derive(Clone, Debug, Default, Serialize)]
pub struct InlineCommandCommentData {
    pub name: String,
    pub render_kind: String,
    pub args: Vec<String>,
}

impl Unmarshal for InlineCommandCommentData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.render_kind = get_string(value, "renderKind");
        self.args = get_string_array(value, "args");
    }
}

/// Block commands (`\brief`, `\return`).
#[derive(Clone, Debug, Default, Serialize)]
pub struct NamedCommentData {
    pub name: String,
}

impl Unmarshal for NamedCommentData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
    }
}

/// `\verbatim ... \endverbatim` and friends.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VerbatimBlockCommentData {
    pub name: String,
    pub close_name: String,
}

impl Unmarshal for VerbatimBlockCommentData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.name = get_string(value, "name");
        self.close_name = get_string(value, "closeName");
    }
}

/// Plain comment text, also used for verbatim lines.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TextCommentData {
    pub text: String,
}

impl Unmarshal for TextCommentData {
    fn unmarshal(&mut self, value: &Value, _ctx: &mut ParseContext<'_>) {
        self.text = get_string(value, "text");
    }
}

fn inline_command() -> NodeData {
    NodeData::InlineCommandComment(InlineCommandCommentData::default())
}

fn block_command() -> NodeData {
    NodeData::BlockCommandComment(NamedCommentData::default())
}

fn verbatim_block() -> NodeData {
    NodeData::VerbatimBlockComment(VerbatimBlockCommentData::default())
}

fn text() -> NodeData {
    NodeData::TextComment(TextCommentData::default())
}

pub(crate) const TABLE: &[(&str, NodeConstructor)] = &[
    (FULL_COMMENT, bare),
    (PARAGRAPH_COMMENT, bare),
    (TEXT_COMMENT, text),
    (INLINE_COMMAND_COMMENT, inline_command),
    (BLOCK_COMMAND_COMMENT, block_command),
    (VERBATIM_BLOCK_COMMENT, verbatim_block),
    (VERBATIM_BLOCK_LINE_COMMENT, text),
    (VERBATIM_LINE_COMMENT, text),
];
