//! End-to-end tests through the public pipeline API.

use clast::{
    DecodeError, DecodeOptions, NodeData, NodeIndex, VisitControl, kind_names,
    parse_translation_unit, parse_translation_unit_with, parse_translation_units, post_order,
    pre_order, resolve_node_file,
};
use serde_json::json;

fn document() -> Vec<u8> {
    let doc = json!({
        "id": "0x1",
        "kind": "TranslationUnitDecl",
        "loc": {},
        "range": { "begin": {}, "end": {} },
        "inner": [
            {
                "id": "0x10",
                "kind": "RecordDecl",
                "loc": { "offset": 7, "file": "shape.h", "line": 3, "col": 8, "tokLen": 5 },
                "range": {
                    "begin": { "offset": 0, "col": 1, "tokLen": 6 },
                    "end": { "offset": 40, "line": 6, "col": 1, "tokLen": 1 },
                },
                "name": "shape",
                "tagUsed": "struct",
                "completeDefinition": true,
                "inner": [
                    {
                        "id": "0x11",
                        "kind": "FieldDecl",
                        "loc": { "offset": 21, "line": 4, "col": 9, "tokLen": 5 },
                        "range": {
                            "begin": { "offset": 17, "col": 5, "tokLen": 3 },
                            "end": { "offset": 21, "col": 9, "tokLen": 5 },
                        },
                        "name": "sides",
                        "type": { "qualType": "int" },
                    },
                    {},
                    {
                        "id": "0x12",
                        "kind": "FieldDecl",
                        "loc": { "offset": 35, "line": 5, "col": 12, "tokLen": 4 },
                        "name": "area",
                        "type": { "qualType": "double" },
                    },
                ],
            },
            {
                "id": "0x20",
                "kind": "VarDecl",
                "loc": { "offset": 60, "file": "main.c", "line": 2, "col": 14, "tokLen": 1 },
                "name": "s",
                "type": { "qualType": "struct shape" },
            },
        ],
    });
    serde_json::to_vec(&doc).expect("serializable")
}

#[test]
fn test_pipeline_produces_linked_filled_tree() {
    let unit = parse_translation_unit(&document()).expect("decodes");
    assert_eq!(unit.root, NodeIndex(0));
    assert_eq!(unit.node_count(), 5);
    let root = unit.root_node().expect("root");
    assert_eq!(unit.resolve(root.kind), kind_names::TRANSLATION_UNIT_DECL);

    for (idx, node) in unit.arena.iter() {
        assert!(node.loc.is_some(), "node {idx:?} has no location");
        assert!(node.range.is_some(), "node {idx:?} has no range");
        if idx != unit.root {
            assert!(node.parent.is_some());
        }
    }

    let fields: Vec<NodeIndex> = unit
        .arena
        .iter()
        .filter(|(_, n)| unit.resolve(n.kind) == kind_names::FIELD_DECL)
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(fields.len(), 2);
    // The `{}` slot between them is gone
    assert_eq!(unit.arena.next_sibling(fields[0]), fields[1]);

    let area = unit.get(fields[1]).expect("field");
    let loc = area.loc.as_ref().expect("loc");
    assert_eq!(unit.resolve(loc.file), "shape.h");
    assert_eq!((loc.line, loc.col), (Some(5), Some(12)));
    // No range in the input: synthesized from the carry
    let range = area.range.as_ref().expect("range");
    assert_eq!((range.end.line, range.end.col), (Some(5), Some(12)));

    let var = unit.arena.find_by_id("0x20").expect("indexed");
    let file = resolve_node_file(&unit.arena, var).expect("file");
    assert_eq!(unit.resolve(file), "main.c");
    assert!(matches!(&unit.get(var).expect("var").data, NodeData::VarDecl(d) if d.name == "s"));
}

#[test]
fn test_pre_and_post_order_agree_on_node_set() {
    let unit = parse_translation_unit(&document()).expect("decodes");
    let mut pre = Vec::new();
    pre_order(&unit.arena, unit.root, |idx, _, _| {
        pre.push(idx);
        VisitControl::Continue
    });
    let mut post = Vec::new();
    post_order(&unit.arena, unit.root, |idx, _, _| {
        post.push(idx);
        VisitControl::Continue
    });
    assert_eq!(pre.first(), Some(&unit.root));
    assert_eq!(post.last(), Some(&unit.root));
    pre.sort();
    post.sort();
    assert_eq!(pre, post);
}

#[test]
fn test_batch_decoding_keeps_input_order() {
    let good = document();
    let bad = br#"{"kind": "TranslationUnitDecl", "inner": [{"kind": "ObjCInterfaceDecl"}]}"#.to_vec();
    let results = parse_translation_units(&[good.clone(), bad, good]);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    match &results[1] {
        Err(DecodeError::UnknownKind { kind, .. }) => assert_eq!(kind, "ObjCInterfaceDecl"),
        other => panic!("unexpected result {other:?}"),
    }
    let a = results[0].as_ref().expect("ok");
    let c = results[2].as_ref().expect("ok");
    assert_eq!(a.node_count(), c.node_count());
}

#[test]
fn test_each_document_has_its_own_pool() {
    let results = parse_translation_units(&[document(), document()]);
    let a = results[0].as_ref().expect("ok");
    let b = results[1].as_ref().expect("ok");
    assert!(!std::ptr::eq(a.arena.interner(), b.arena.interner()));
    assert_eq!(a.arena.interner().len(), b.arena.interner().len());
}

#[test]
fn test_options_are_honoured() {
    let options = DecodeOptions {
        max_depth: 1,
        ..DecodeOptions::default()
    };
    let err = parse_translation_unit_with(&document(), &options).unwrap_err();
    assert!(matches!(err, DecodeError::DepthLimitExceeded { limit: 1 }));
}
