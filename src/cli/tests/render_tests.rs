use super::render::*;
use crate::pipeline::parse_translation_unit;

const DOC: &str = r#"{
  "id": "0x1",
  "kind": "TranslationUnitDecl",
  "loc": {},
  "range": { "begin": {}, "end": {} },
  "inner": [
    {
      "id": "0x2",
      "kind": "VarDecl",
      "loc": { "offset": 4, "file": "g.c", "line": 1, "col": 5, "tokLen": 7 },
      "range": {
        "begin": { "offset": 0, "col": 1, "tokLen": 3 },
        "end": { "offset": 14, "col": 15, "tokLen": 1 }
      },
      "name": "counter",
      "type": { "qualType": "int" },
      "init": "c",
      "inner": [
        {
          "id": "0x3",
          "kind": "IntegerLiteral",
          "range": {
            "begin": { "offset": 14, "col": 15, "tokLen": 1 },
            "end": { "offset": 14, "col": 15, "tokLen": 1 }
          },
          "type": { "qualType": "int" },
          "valueCategory": "prvalue",
          "value": "0"
        }
      ]
    }
  ]
}"#;

#[test]
fn test_write_tree() {
    let unit = parse_translation_unit(DOC.as_bytes()).expect("decodes");
    let mut out = Vec::new();
    write_tree(&mut out, &unit).expect("writes");
    let text = String::from_utf8(out).expect("utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "TranslationUnitDecl 0x1 ?:?:?",
            "  VarDecl 0x2 g.c:1:5 'counter'",
            "    IntegerLiteral 0x3 g.c:1:15",
        ]
    );
}

#[test]
fn test_kind_summary() {
    let unit = parse_translation_unit(DOC.as_bytes()).expect("decodes");
    let summary = kind_summary(&unit);
    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.kinds.get("VarDecl"), Some(&1));
    assert_eq!(summary.kinds.get("IntegerLiteral"), Some(&1));

    let mut out = Vec::new();
    write_kinds(&mut out, &unit).expect("writes");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(value["nodes"], 3);
    assert_eq!(value["kinds"]["TranslationUnitDecl"], 1);
}
