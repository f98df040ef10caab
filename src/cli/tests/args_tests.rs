use super::args::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_source_with_defaults() {
    let args = CliArgs::try_parse_from(["clast", "a.c"]).expect("valid");
    assert_eq!(args.source, Some(PathBuf::from("a.c")));
    assert_eq!(args.json, None);
    assert_eq!(args.clang, PathBuf::from("clang"));
    assert_eq!(args.format, OutputFormat::Tree);
    assert_eq!(args.max_depth, clast_common::limits::MAX_AST_DEPTH);
    assert!(args.clang_args.is_empty());
}

#[test]
fn test_json_input_and_format() {
    let args = CliArgs::try_parse_from(["clast", "--json", "-", "--format", "kinds"]).expect("valid");
    assert_eq!(args.json, Some(PathBuf::from("-")));
    assert_eq!(args.source, None);
    assert_eq!(args.format, OutputFormat::Kinds);
}

#[test]
fn test_trailing_clang_args() {
    let args = CliArgs::try_parse_from([
        "clast",
        "--clang",
        "/usr/bin/clang-18",
        "--max-depth",
        "64",
        "main.c",
        "--",
        "-Iinclude",
        "-DNDEBUG",
    ])
    .expect("valid");
    assert_eq!(args.clang, PathBuf::from("/usr/bin/clang-18"));
    assert_eq!(args.max_depth, 64);
    assert_eq!(args.clang_args, ["-Iinclude", "-DNDEBUG"]);
}

#[test]
fn test_input_is_required() {
    assert!(CliArgs::try_parse_from(["clast"]).is_err());
}

#[test]
fn test_source_and_json_conflict() {
    assert!(CliArgs::try_parse_from(["clast", "a.c", "--json", "a.json"]).is_err());
}

#[test]
fn test_unknown_format_rejected() {
    assert!(CliArgs::try_parse_from(["clast", "a.c", "--format", "yaml"]).is_err());
}
