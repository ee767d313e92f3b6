//! Persisted display preferences
//!
//! A single `theme` key is stored as TOML. It is read once at startup and
//! written on every change.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SentiersError};
use crate::models::Theme;

#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferenceFile {
    theme: Option<Theme>,
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored theme, falling back to the light theme when nothing is stored
    pub fn load(&self) -> Result<Theme> {
        if !self.path.exists() {
            return Ok(Theme::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: PreferenceFile =
            toml::from_str(&content).map_err(|e| SentiersError::PreferencesInvalid {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(file.theme.unwrap_or_default())
    }

    /// Persist the theme
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string(&PreferenceFile { theme: Some(theme) })
            .map_err(|e| SentiersError::Serialization(e.to_string()))?;
        fs::write(&self.path, content)?;

        tracing::debug!(path = %self.path.display(), theme = %theme, "Saved theme preference");
        Ok(())
    }

    /// Flip the stored theme and return the new value
    pub fn toggle(&self) -> Result<Theme> {
        let theme = self.load()?.toggle();
        self.save(theme)?;
        Ok(theme)
    }
}
