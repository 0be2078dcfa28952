//! Covenant CLI library.
//!
//! Command-line front end for the contract obligation extractor: argument
//! parsing, command execution, and output formatting. The upload size
//! limit is enforced here, before file contents reach the pipeline.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
