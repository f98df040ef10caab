use clap::{Parser, ValueEnum};
use clast_common::limits::MAX_AST_DEPTH;
use std::path::PathBuf;

/// CLI arguments for the clast binary.
#[derive(Parser, Debug)]
#[command(
    name = "clast",
    version,
    about = "Decode clang's JSON AST dump into a linked, location-resolved tree"
)]
pub struct CliArgs {
    /// C source file to run through clang.
    #[arg(required_unless_present = "json", conflicts_with = "json")]
    pub source: Option<PathBuf>,

    /// Read an existing `-ast-dump=json` document instead of running clang
    /// (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// The clang executable to run.
    #[arg(long, value_name = "PATH", default_value = "clang")]
    pub clang: PathBuf,

    /// What to print.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,

    /// Deepest node nesting accepted before decoding fails.
    #[arg(long, default_value_t = MAX_AST_DEPTH)]
    pub max_depth: u32,

    /// Extra arguments passed to clang, after `--`.
    #[arg(last = true, value_name = "CLANG_ARGS")]
    pub clang_args: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per node, indented by depth.
    Tree,
    /// Node count per kind, as JSON.
    Kinds,
}
