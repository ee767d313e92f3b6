use crate::error::{Result, SentiersError};
use crate::models::ViewMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Dataset location used when nothing else is configured
pub const DEFAULT_DATASET: &str = "sentiers_metadata_data.json";

/// Preference file used when nothing else is configured
pub const DEFAULT_PREFERENCES: &str = ".sentiers/preferences.toml";

/// Configuration file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "sentiers.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Sentiers
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub dataset: ConfigValue<String>,
    pub preferences: ConfigValue<PathBuf>,
    pub view: ConfigValue<ViewMode>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            dataset: ConfigValue::new(DEFAULT_DATASET.to_string(), ConfigSource::Default),
            preferences: ConfigValue::new(
                PathBuf::from(DEFAULT_PREFERENCES),
                ConfigSource::Default,
            ),
            view: ConfigValue::new(ViewMode::Table, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| SentiersError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| SentiersError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(dataset) = file_config.dataset {
            self.dataset.update(dataset, ConfigSource::File);
        }

        if let Some(preferences) = file_config.preferences {
            self.preferences.update(preferences, ConfigSource::File);
        }

        if let Some(view) = file_config.view {
            self.view.update(view, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the file layer only if the file exists
    pub fn load_from_file_if_present<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // SENTIERS_DATASET
        if let Ok(dataset) = env::var("SENTIERS_DATASET") {
            if dataset.trim().is_empty() {
                tracing::warn!("Ignoring empty SENTIERS_DATASET");
            } else {
                self.dataset.update(dataset, ConfigSource::Environment);
            }
        }

        // SENTIERS_PREFERENCES
        if let Ok(preferences) = env::var("SENTIERS_PREFERENCES") {
            self.preferences.update(PathBuf::from(preferences), ConfigSource::Environment);
        }

        // SENTIERS_VIEW
        if let Ok(view_str) = env::var("SENTIERS_VIEW") {
            match view_str.parse::<ViewMode>() {
                Ok(view) => self.view.update(view, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid SENTIERS_VIEW value '{}': expected table or cards",
                    view_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(dataset) = overrides.dataset {
            self.dataset.update(dataset, ConfigSource::Cli);
        }

        if let Some(preferences) = overrides.preferences {
            self.preferences.update(preferences, ConfigSource::Cli);
        }

        if let Some(view) = overrides.view {
            self.view.update(view, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("dataset".to_string(), (self.dataset.value.clone(), self.dataset.source));

        map.insert(
            "preferences".to_string(),
            (self.preferences.value.display().to_string(), self.preferences.source),
        );

        map.insert("view".to_string(), (self.view.value.to_string(), self.view.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    dataset: Option<String>,
    preferences: Option<PathBuf>,
    view: Option<ViewMode>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub dataset: Option<String>,
    pub preferences: Option<PathBuf>,
    pub view: Option<ViewMode>,
}
