//! Configuration resolution and the one-time dataset load shared by commands

use anyhow::Result;
use sentiers_core::config::{CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE};
use sentiers_core::loader::{load_catalog, source_for};
use sentiers_filter::CatalogSession;

use crate::cli::Cli;
use crate::errors;
use crate::output::OutputWriter;
use crate::progress::{create_spinner, finish_error, finish_success};

/// Resolve configuration: defaults, then file, then environment, then flags
pub fn resolve_config(cli: &Cli) -> Result<LayeredConfig> {
    let config = LayeredConfig::with_defaults();

    let config = match cli.config {
        Some(ref path) => config.load_from_file(path),
        None => config.load_from_file_if_present(DEFAULT_CONFIG_FILE),
    }
    .map_err(errors::from_sentiers)?;

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        dataset: cli.dataset.clone(),
        preferences: cli.preferences.clone(),
        view: cli.view.map(Into::into),
    });

    Ok(config)
}

/// Fetch the dataset once and open a session over it
pub async fn load_session(config: &LayeredConfig, output: &OutputWriter) -> Result<CatalogSession> {
    let source = source_for(&config.dataset.value);
    let spinner = create_spinner(&format!("Loading {}...", source.describe()), output.is_json());

    match load_catalog(source.as_ref()).await {
        Ok(catalog) => {
            finish_success(&spinner, &format!("Loaded {} trails", catalog.len()));
            Ok(CatalogSession::new(catalog))
        }
        Err(error) => {
            finish_error(&spinner, "Dataset unavailable");
            Err(errors::from_sentiers(error).into())
        }
    }
}
