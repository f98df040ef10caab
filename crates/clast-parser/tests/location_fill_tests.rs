use crate::parser::base::NodeIndex;
use crate::parser::location_fill::fill_locations;
use crate::parser::node_arena::NodeArena;
use crate::test_fixtures::*;
use clast_common::Loc;
use serde_json::json;

/// (file, line, col) of a location, with the file resolved.
fn triple<'a>(arena: &'a NodeArena, loc: &Loc) -> (&'a str, Option<u32>, Option<u32>) {
    (arena.resolve(loc.file), loc.line, loc.col)
}

fn loc_of(arena: &NodeArena, idx: NodeIndex) -> (&str, Option<u32>, Option<u32>) {
    let loc = arena.get(idx).and_then(|n| n.loc.as_ref()).expect("filled loc");
    triple(arena, loc)
}

#[test]
fn test_inherits_components_across_siblings() {
    let doc = tu(vec![
        json!({ "kind": "EmptyDecl", "loc": { "file": "a.c", "line": 10, "col": 1 } }),
        json!({ "kind": "EmptyDecl", "loc": { "line": 12 } }),
        json!({ "kind": "EmptyDecl" }),
    ]);
    let arena = filled(&doc);
    let children = arena.children(arena.root()).to_vec();
    assert_eq!(loc_of(&arena, children[0]), ("a.c", Some(10), Some(1)));
    assert_eq!(loc_of(&arena, children[1]), ("a.c", Some(12), Some(1)));
    assert_eq!(loc_of(&arena, children[2]), ("a.c", Some(12), Some(1)));
}

#[test]
fn test_range_end_sees_begin_update() {
    let doc = tu(vec![
        json!({ "kind": "EmptyDecl", "loc": { "file": "a.c", "line": 3, "col": 2 } }),
        json!({
            "kind": "EmptyDecl",
            "loc": { "col": 5 },
            "range": { "begin": { "line": 7, "col": 1 }, "end": { "col": 9 } },
        }),
    ]);
    let arena = filled(&doc);
    let second = arena.children(arena.root())[1];
    let node = arena.get(second).expect("node");
    let range = node.range.as_ref().expect("range");
    assert_eq!(loc_of(&arena, second), ("a.c", Some(3), Some(5)));
    assert_eq!(triple(&arena, &range.begin), ("a.c", Some(7), Some(1)));
    // Line comes from begin, not from the node location
    assert_eq!(triple(&arena, &range.end), ("a.c", Some(7), Some(9)));
}

#[test]
fn test_missing_range_is_synthesized_from_carry() {
    let doc = tu(vec![
        json!({ "kind": "EmptyDecl", "loc": { "file": "b.c", "line": 4, "col": 8 } }),
        json!({ "kind": "NullStmt" }),
    ]);
    let arena = filled(&doc);
    for (_, node) in arena.iter() {
        assert!(node.loc.is_some());
        assert!(node.range.is_some());
    }
    let stmt = arena.children(arena.root())[1];
    let range = arena.get(stmt).and_then(|n| n.range.as_ref()).expect("range");
    assert_eq!(triple(&arena, &range.begin), ("b.c", Some(4), Some(8)));
    assert_eq!(triple(&arena, &range.end), ("b.c", Some(4), Some(8)));
}

#[test]
fn test_no_locations_anywhere_fills_empty() {
    let doc = tu(vec![json!({ "kind": "EmptyDecl" }), json!({ "kind": "NullStmt" })]);
    let arena = filled(&doc);
    for (_, node) in arena.iter() {
        let loc = node.loc.as_ref().expect("filled");
        assert!(loc.is_unpositioned());
        let range = node.range.as_ref().expect("filled");
        assert!(range.begin.is_unpositioned());
        assert!(range.end.is_unpositioned());
    }
}

#[test]
fn test_fill_sample() {
    let arena = sample();

    let function = find_kind(&arena, "FunctionDecl")[0];
    assert_eq!(loc_of(&arena, function), ("a.c", Some(1), Some(5)));
    let range = arena.get(function).and_then(|n| n.range.as_ref()).expect("range");
    assert_eq!(triple(&arena, &range.begin), ("a.c", Some(1), Some(1)));
    assert_eq!(triple(&arena, &range.end), ("a.c", Some(3), Some(1)));

    let parms = find_kind(&arena, "ParmVarDecl");
    assert_eq!(loc_of(&arena, parms[0]), ("a.c", Some(1), Some(13)));
    assert_eq!(loc_of(&arena, parms[1]), ("a.c", Some(1), Some(20)));

    // No loc of its own: the carry after the second parameter's range
    let body = find_kind(&arena, "CompoundStmt")[0];
    assert_eq!(loc_of(&arena, body), ("a.c", Some(1), Some(20)));

    let ret = find_kind(&arena, "ReturnStmt")[0];
    let range = arena.get(ret).and_then(|n| n.range.as_ref()).expect("range");
    assert_eq!(triple(&arena, &range.begin), ("a.c", Some(2), Some(3)));
    assert_eq!(triple(&arena, &range.end), ("a.c", Some(2), Some(14)));

    let refs = find_kind(&arena, "DeclRefExpr");
    let range = arena.get(refs[1]).and_then(|n| n.range.as_ref()).expect("range");
    assert_eq!(triple(&arena, &range.begin), ("a.c", Some(2), Some(14)));

    // Builtin typedefs come before any file is named
    let typedef = find_kind(&arena, "TypedefDecl")[0];
    assert_eq!(loc_of(&arena, typedef), ("", None, None));
}

#[test]
fn test_carry_does_not_leak_between_runs() {
    let first = tu(vec![json!({ "kind": "EmptyDecl", "loc": { "file": "x.c", "line": 1, "col": 1 } })]);
    let second = tu(vec![json!({ "kind": "EmptyDecl" })]);
    let _ = filled(&first);
    let arena = filled(&second);
    let child = arena.children(arena.root())[0];
    assert_eq!(loc_of(&arena, child), ("", None, None));
}

#[test]
fn test_macro_location_resolves_to_expansion_site() {
    let doc = tu(vec![
        json!({ "kind": "EmptyDecl", "loc": { "file": "a.c", "line": 2, "col": 1 } }),
        json!({
            "kind": "IntegerLiteral",
            "loc": {
                "spellingLoc": { "file": "m.h", "line": 1, "col": 9 },
                "expansionLoc": { "file": "a.c", "line": 9, "col": 4 },
            },
            "value": "1",
        }),
        json!({ "kind": "EmptyDecl", "loc": { "col": 10 } }),
    ]);
    let arena = filled(&doc);
    let children = arena.children(arena.root()).to_vec();

    let loc = arena.get(children[1]).and_then(|n| n.loc.as_ref()).expect("loc");
    assert_eq!(triple(&arena, loc), ("a.c", Some(9), Some(4)));
    let spelling = loc.spelling_loc.as_deref().expect("spelling");
    assert_eq!(triple(&arena, spelling), ("m.h", Some(1), Some(9)));

    // The next node continues from the expansion site
    assert_eq!(loc_of(&arena, children[2]), ("a.c", Some(9), Some(10)));
}

#[test]
fn test_macro_nested_locations_inherit_omitted_components() {
    let doc = tu(vec![
        json!({ "kind": "EmptyDecl", "loc": { "file": "a.c", "line": 2, "col": 1 } }),
        json!({
            "kind": "IntegerLiteral",
            "loc": {
                "spellingLoc": { "file": "<scratch space>", "line": 1, "col": 1 },
                "expansionLoc": { "line": 9, "col": 4 },
            },
            "value": "1",
        }),
        json!({ "kind": "EmptyDecl", "loc": { "line": 11 } }),
    ]);
    let arena = filled(&doc);
    let children = arena.children(arena.root()).to_vec();

    let loc = arena.get(children[1]).and_then(|n| n.loc.as_ref()).expect("loc");
    let expansion = loc.expansion_loc.as_deref().expect("expansion");
    // File carried over from the spelling location, as clang omitted it
    assert_eq!(triple(&arena, expansion), ("<scratch space>", Some(9), Some(4)));
    assert_eq!(triple(&arena, loc), ("<scratch space>", Some(9), Some(4)));
    assert_eq!(loc_of(&arena, children[2]), ("<scratch space>", Some(11), Some(4)));
}

#[test]
fn test_fill_is_stable_when_rerun() {
    let mut arena = sample();
    let before: Vec<_> = arena.iter().map(|(_, n)| (n.loc.clone(), n.range.clone())).collect();
    let root = arena.root();
    fill_locations(&mut arena, root);
    let after: Vec<_> = arena.iter().map(|(_, n)| (n.loc.clone(), n.range.clone())).collect();
    assert_eq!(before, after);
}
