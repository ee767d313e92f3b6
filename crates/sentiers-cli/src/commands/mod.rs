//! Command implementations

mod browse;
mod config;
mod export;
mod list;
mod locations;
mod show;
mod theme;

use crate::cli::{Cli, Commands};
use crate::context::resolve_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::List(args) => list::execute(args, &config, &output, cli.explain).await,
        Commands::Show(args) => show::execute(args, &config, &output).await,
        Commands::Locations => locations::execute(&config, &output).await,
        Commands::Export(args) => export::execute(args, &config, &output).await,
        Commands::Browse => browse::execute(&config, &output, cli.explain).await,
        Commands::Theme(args) => theme::execute(args, &config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
