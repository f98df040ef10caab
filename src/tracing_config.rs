//! Tracing configuration for the `clast` binary.
//!
//! `CLAST_LOG` (or `RUST_LOG` when it is unset) holds the filter directives
//! and `CLAST_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: `tracing-tree` indentation, one level per pipeline stage
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! # Per-stage timings and node counts as a tree
//! CLAST_LOG=debug CLAST_LOG_FORMAT=tree clast a.c
//!
//! # Every skipped kind-less child
//! CLAST_LOG="clast_parser=trace" clast --json a.json
//! ```
//!
//! Nothing is installed when neither variable is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `CLAST_LOG_FORMAT` value; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// `EnvFilter` directives, e.g. `debug` or `clast_parser=trace`
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read settings through `var`. `None` when no filter variable is set;
    /// `CLAST_LOG` wins over `RUST_LOG`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = var("CLAST_LOG").or_else(|| var("RUST_LOG"))?;
        let format = var("CLAST_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(TracingSettings { directives, format })
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }

    /// Install the global subscriber, writing to stderr. A subscriber that
    /// is already installed stays in place.
    pub fn install(&self) {
        let tree = (self.format == LogFormat::Tree).then(|| {
            tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true)
        });
        let json = (self.format == LogFormat::Json)
            .then(|| fmt::layer().json().with_writer(std::io::stderr));
        let text =
            (self.format == LogFormat::Text).then(|| fmt::layer().with_writer(std::io::stderr));

        let _ = Registry::default()
            .with(self.filter())
            .with(tree)
            .with(json)
            .with(text)
            .try_init();
    }
}

/// Install tracing when `CLAST_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    if let Some(settings) = TracingSettings::from_env() {
        settings.install();
    }
}
