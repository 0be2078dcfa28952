//! Covenant CLI - Extract contractual obligations from contract documents.

use clap::Parser;
use covenant_cli::{commands, Cli, CliFormat, Command, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> covenant_cli::Result<()> {
    // Diagnostics go to stderr so piped output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format.unwrap_or(CliFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &formatter).await?;
        }
        Command::Status => {
            commands::execute_status(&formatter)?;
        }
        Command::Info(args) => {
            commands::execute_info(args, &formatter)?;
        }
    }

    Ok(())
}
