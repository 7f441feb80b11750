use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mtx` binary.
#[derive(Debug, Parser)]
#[command(name = "mtx", version, about = "Matrix - use-case ledger consistency tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from config, else table)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .matrix)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Global flags with `fallback` used when `--format` was not given.
    #[must_use]
    pub fn global_flags(&self, fallback: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(fallback),
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}
