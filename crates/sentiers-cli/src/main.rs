//! Sentiers CLI - Command-line interface
//!
//! Terminal front end for the trail catalog: loads the dataset, evaluates filters,
//! and renders tables, cards, details, or an HTML page.

mod cli;
mod commands;
mod context;
mod errors;
mod html;
mod interactive;
mod output;
mod output_types;
mod progress;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing on stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create async runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Execute the command
    if let Err(error) = runtime.block_on(commands::execute(cli)) {
        match error.downcast::<errors::CliError>() {
            Ok(cli_error) => cli_error.display(),
            Err(other) => errors::from_anyhow(other).display(),
        }
        std::process::exit(1);
    }

    Ok(())
}
