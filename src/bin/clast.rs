use anyhow::Result;
use clap::Parser;
use std::io::BufWriter;

use clast::cli::args::CliArgs;
use clast::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if CLAST_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports CLAST_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    clast::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    driver::run(&args, &mut out)
}
