//! Loads the input named on the command line and prints it.

use super::args::{CliArgs, OutputFormat};
use super::render::{write_kinds, write_tree};
use crate::clang::{ClangOptions, parse_source_file_with};
use crate::pipeline::{TranslationUnit, parse_translation_unit_with};
use anyhow::{Context, Result, bail};
use clast_parser::DecodeOptions;
use std::io::{Read, Write};
use std::path::Path;

pub fn decode_options(args: &CliArgs) -> DecodeOptions {
    DecodeOptions {
        max_depth: args.max_depth,
        ..DecodeOptions::default()
    }
}

pub fn clang_options(args: &CliArgs) -> ClangOptions {
    ClangOptions {
        clang_path: args.clang.clone(),
        args: args.clang_args.clone(),
    }
}

/// Read a JSON document from `path`, or stdin for `-`.
fn read_json(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read JSON from stdin")?;
        Ok(bytes)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

pub fn load(args: &CliArgs) -> Result<TranslationUnit> {
    let decode = decode_options(args);
    if let Some(path) = &args.json {
        let bytes = read_json(path)?;
        return parse_translation_unit_with(&bytes, &decode)
            .with_context(|| format!("failed to decode {}", path.display()));
    }
    let Some(source) = &args.source else {
        bail!("no input: pass a source file or --json <PATH>");
    };
    parse_source_file_with(source, &clang_options(args), &decode)
        .with_context(|| format!("failed to parse {}", source.display()))
}

pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    let unit = load(args)?;
    let written = match args.format {
        OutputFormat::Tree => write_tree(out, &unit),
        OutputFormat::Kinds => write_kinds(out, &unit),
    };
    written.context("failed to write output")?;
    out.flush().context("failed to flush output")
}
