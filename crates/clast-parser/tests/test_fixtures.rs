//! Shared JSON documents and helpers for the parser tests.

use crate::parser::base::NodeIndex;
use crate::parser::decoder::{DecodeOptions, decode_document, decode_value};
use crate::parser::linker::link_tree;
use crate::parser::location_fill::fill_locations;
use crate::parser::node_arena::NodeArena;
use serde_json::{Value, json};

/// `clang -Xclang -ast-dump=json -fsyntax-only a.c` for
///
/// ```c
/// int add(int a, int b) {
///   return a + b;
/// }
/// ```
///
/// trimmed to one builtin typedef.
pub(crate) const SAMPLE_TU: &str = r#"{
  "id": "0x1",
  "kind": "TranslationUnitDecl",
  "loc": {},
  "range": { "begin": {}, "end": {} },
  "inner": [
    {
      "id": "0x2",
      "kind": "TypedefDecl",
      "loc": {},
      "range": { "begin": {}, "end": {} },
      "isImplicit": true,
      "name": "__int128_t",
      "type": { "qualType": "__int128" },
      "inner": [
        { "id": "0x3", "kind": "BuiltinType", "type": { "qualType": "__int128" } }
      ]
    },
    {
      "id": "0x10",
      "kind": "FunctionDecl",
      "loc": { "offset": 4, "file": "a.c", "line": 1, "col": 5, "tokLen": 3 },
      "range": {
        "begin": { "offset": 0, "col": 1, "tokLen": 3 },
        "end": { "offset": 39, "line": 3, "col": 1, "tokLen": 1 }
      },
      "name": "add",
      "mangledName": "add",
      "type": { "qualType": "int (int, int)" },
      "inner": [
        {
          "id": "0x11",
          "kind": "ParmVarDecl",
          "loc": { "offset": 12, "line": 1, "col": 13, "tokLen": 1 },
          "range": {
            "begin": { "offset": 8, "col": 9, "tokLen": 3 },
            "end": { "offset": 12, "col": 13, "tokLen": 1 }
          },
          "isUsed": true,
          "name": "a",
          "mangledName": "a",
          "type": { "qualType": "int" }
        },
        {
          "id": "0x12",
          "kind": "ParmVarDecl",
          "loc": { "offset": 19, "col": 20, "tokLen": 1 },
          "range": {
            "begin": { "offset": 15, "col": 16, "tokLen": 3 },
            "end": { "offset": 19, "col": 20, "tokLen": 1 }
          },
          "isUsed": true,
          "name": "b",
          "mangledName": "b",
          "type": { "qualType": "int" }
        },
        {
          "id": "0x13",
          "kind": "CompoundStmt",
          "range": {
            "begin": { "offset": 22, "col": 23, "tokLen": 1 },
            "end": { "offset": 39, "line": 3, "col": 1, "tokLen": 1 }
          },
          "inner": [
            {
              "id": "0x14",
              "kind": "ReturnStmt",
              "range": {
                "begin": { "offset": 26, "line": 2, "col": 3, "tokLen": 6 },
                "end": { "offset": 37, "col": 14, "tokLen": 1 }
              },
              "inner": [
                {
                  "id": "0x15",
                  "kind": "BinaryOperator",
                  "range": {
                    "begin": { "offset": 33, "col": 10, "tokLen": 1 },
                    "end": { "offset": 37, "col": 14, "tokLen": 1 }
                  },
                  "type": { "qualType": "int" },
                  "valueCategory": "prvalue",
                  "opcode": "+",
                  "inner": [
                    {
                      "id": "0x16",
                      "kind": "ImplicitCastExpr",
                      "range": {
                        "begin": { "offset": 33, "col": 10, "tokLen": 1 },
                        "end": { "offset": 33, "col": 10, "tokLen": 1 }
                      },
                      "type": { "qualType": "int" },
                      "valueCategory": "prvalue",
                      "castKind": "LValueToRValue",
                      "inner": [
                        {
                          "id": "0x17",
                          "kind": "DeclRefExpr",
                          "range": {
                            "begin": { "offset": 33, "col": 10, "tokLen": 1 },
                            "end": { "offset": 33, "col": 10, "tokLen": 1 }
                          },
                          "type": { "qualType": "int" },
                          "valueCategory": "lvalue",
                          "referencedDecl": {
                            "id": "0x11",
                            "kind": "ParmVarDecl",
                            "name": "a",
                            "type": { "qualType": "int" }
                          }
                        }
                      ]
                    },
                    {
                      "id": "0x18",
                      "kind": "ImplicitCastExpr",
                      "range": {
                        "begin": { "offset": 37, "col": 14, "tokLen": 1 },
                        "end": { "offset": 37, "col": 14, "tokLen": 1 }
                      },
                      "type": { "qualType": "int" },
                      "valueCategory": "prvalue",
                      "castKind": "LValueToRValue",
                      "inner": [
                        {
                          "id": "0x19",
                          "kind": "DeclRefExpr",
                          "range": {
                            "begin": { "offset": 37, "col": 14, "tokLen": 1 },
                            "end": { "offset": 37, "col": 14, "tokLen": 1 }
                          },
                          "type": { "qualType": "int" },
                          "valueCategory": "lvalue",
                          "referencedDecl": {
                            "id": "0x12",
                            "kind": "ParmVarDecl",
                            "name": "b",
                            "type": { "qualType": "int" }
                          }
                        }
                      ]
                    }
                  ]
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Pre-order kinds of [`SAMPLE_TU`].
pub(crate) const SAMPLE_KINDS: [&str; 13] = [
    "TranslationUnitDecl",
    "TypedefDecl",
    "BuiltinType",
    "FunctionDecl",
    "ParmVarDecl",
    "ParmVarDecl",
    "CompoundStmt",
    "ReturnStmt",
    "BinaryOperator",
    "ImplicitCastExpr",
    "DeclRefExpr",
    "ImplicitCastExpr",
    "DeclRefExpr",
];

pub(crate) fn decode_str(json: &str) -> NodeArena {
    decode_document(json.as_bytes(), &DecodeOptions::default()).expect("fixture should decode")
}

pub(crate) fn decode_json(value: &Value) -> NodeArena {
    decode_value(value, &DecodeOptions::default()).expect("fixture should decode")
}

/// Decode and link.
pub(crate) fn linked(value: &Value) -> NodeArena {
    let mut arena = decode_json(value);
    let root = arena.root();
    link_tree(&mut arena, root);
    arena
}

/// Decode, link and fill.
pub(crate) fn filled(value: &Value) -> NodeArena {
    let mut arena = linked(value);
    let root = arena.root();
    fill_locations(&mut arena, root);
    arena
}

/// [`SAMPLE_TU`] decoded and linked.
pub(crate) fn sample_linked() -> NodeArena {
    let value: Value = serde_json::from_str(SAMPLE_TU).expect("fixture is valid JSON");
    linked(&value)
}

/// [`SAMPLE_TU`] decoded, linked and filled.
pub(crate) fn sample() -> NodeArena {
    let mut arena = sample_linked();
    let root = arena.root();
    fill_locations(&mut arena, root);
    arena
}

/// A translation unit with the given top-level children.
pub(crate) fn tu(inner: Vec<Value>) -> Value {
    json!({
        "id": "0x1",
        "kind": "TranslationUnitDecl",
        "inner": inner,
    })
}

/// Kind tags in arena order.
pub(crate) fn kinds(arena: &NodeArena) -> Vec<&str> {
    arena
        .iter()
        .map(|(_, node)| arena.resolve(node.kind))
        .collect()
}

/// Every node of the given kind, in arena order.
pub(crate) fn find_kind(arena: &NodeArena, kind: &str) -> Vec<NodeIndex> {
    arena
        .iter()
        .filter(|(_, node)| arena.resolve(node.kind) == kind)
        .map(|(idx, _)| idx)
        .collect()
}

/// `depth` nested `ParenExpr`s under a translation unit.
pub(crate) fn paren_chain(depth: usize) -> Value {
    let mut node = json!({ "kind": "IntegerLiteral", "value": "0" });
    for _ in 0..depth {
        node = json!({ "kind": "ParenExpr", "inner": [node] });
    }
    tu(vec![node])
}
