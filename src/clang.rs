//! Running clang to produce the JSON dump.

use crate::pipeline::{TranslationUnit, parse_translation_unit_with};
use clast_parser::{DecodeError, DecodeOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ClangOptions {
    /// The compiler to run
    pub clang_path: PathBuf,
    /// Extra arguments placed before the source file (`-I`, `-D`, `-std=`...)
    pub args: Vec<String>,
}

impl Default for ClangOptions {
    fn default() -> Self {
        ClangOptions {
            clang_path: PathBuf::from("clang"),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClangError {
    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with {status}", path.display())]
    Exit { status: ExitStatus, path: PathBuf },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The command `dump_ast_json` runs: stdout is captured, stderr passes
/// through so compiler diagnostics reach the user.
pub fn clang_command(source: &Path, options: &ClangOptions) -> Command {
    let mut cmd = Command::new(&options.clang_path);
    cmd.args(["-Xclang", "-ast-dump=json", "-fsyntax-only"])
        .args(&options.args)
        .arg(source)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    cmd
}

/// Run clang over `source` and return the JSON it prints.
pub fn dump_ast_json(source: impl AsRef<Path>, options: &ClangOptions) -> Result<Vec<u8>, ClangError> {
    let source = source.as_ref();
    debug!(source = %source.display(), clang = %options.clang_path.display(), "dumping AST");

    let output = clang_command(source, options)
        .output()
        .map_err(|source| ClangError::Spawn {
            path: options.clang_path.clone(),
            source,
        })?;
    if !output.status.success() {
        return Err(ClangError::Exit {
            status: output.status,
            path: options.clang_path.clone(),
        });
    }

    debug!(bytes = output.stdout.len(), "clang finished");
    Ok(output.stdout)
}

/// Dump `source` with clang and run the full pipeline over the result.
pub fn parse_source_file(
    source: impl AsRef<Path>,
    options: &ClangOptions,
) -> Result<TranslationUnit, ClangError> {
    parse_source_file_with(source, options, &DecodeOptions::default())
}

pub fn parse_source_file_with(
    source: impl AsRef<Path>,
    options: &ClangOptions,
    decode: &DecodeOptions,
) -> Result<TranslationUnit, ClangError> {
    let json = dump_ast_json(source, options)?;
    Ok(parse_translation_unit_with(&json, decode)?)
}

#[cfg(test)]
#[path = "tests/clang_tests.rs"]
mod clang_tests;
