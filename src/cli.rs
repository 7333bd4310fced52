//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// Output format for tracing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    /// Human-readable output for local development.
    Pretty,
    /// Line-delimited JSON for log aggregation.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "admin-select", about = "Typeahead select-list API for the store admin area")]
pub struct Args {
    /// Tracing output format.
    #[arg(long, value_enum, default_value_t = TracingFormat::Pretty)]
    pub tracing: TracingFormat,
}
