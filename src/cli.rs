// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `wfsched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wfsched",
    version,
    about = "HEFT scheduling and trace validation for heterogeneous task DAGs.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WFSCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Schedule a workflow DAG onto heterogeneous processors with HEFT.
    Schedule {
        /// Path to the workflow file (JSON).
        #[arg(value_name = "WORKFLOW")]
        workflow: String,

        /// Write the schedule as JSON to this path instead of stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Check an execution trace (YAML) for timing consistency.
    Validate {
        /// Path to the trace file (YAML).
        #[arg(value_name = "TRACE")]
        trace: String,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
