//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Covenant CLI - Extract contractual obligations from contract documents.
#[derive(Debug, Parser)]
#[command(name = "covenant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON envelope
    Json,
    /// CSV export
    Csv,
    /// Plain-text summary report
    Report,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract obligations from a contract file
    Extract(ExtractArgs),

    /// Show provider and parser readiness
    Status,

    /// Inspect a document without running extraction
    Info(InfoArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Contract file to process (.pdf or .txt)
    pub file: PathBuf,

    /// Declared file type, overriding the file extension
    #[arg(short = 't', long)]
    pub file_type: Option<String>,

    /// Write the rendered output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the info command.
#[derive(Debug, Parser)]
pub struct InfoArgs {
    /// Document to inspect
    pub file: PathBuf,
}
