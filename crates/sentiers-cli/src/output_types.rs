use chrono::{DateTime, Utc};
use sentiers_core::{Theme, TrailRecord, ViewMode};
use sentiers_filter::{FilterCriteria, FilterReport, ResultState};
use serde::Serialize;
use std::path::PathBuf;

/// Output for list command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub count: usize,
    pub state: ResultState,
    pub view: ViewMode,
    pub criteria: FilterCriteria,
    pub selected: Option<String>,
    pub trails: Vec<TrailRecord>,
    pub explanation: Option<FilterReport>,
}

/// Output for show command
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub trail: TrailRecord,
    pub difficulty_level: u8,
    pub badge: Option<&'static str>,
}

/// Output for locations command
#[derive(Debug, Serialize)]
pub struct LocationsOutput {
    pub count: usize,
    pub locations: Vec<String>,
}

/// Output for theme command
#[derive(Debug, Serialize)]
pub struct ThemeOutput {
    pub theme: Theme,
    pub path: PathBuf,
    pub changed: bool,
}

/// Output for export command
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub path: PathBuf,
    pub count: usize,
    pub theme: Theme,
    pub selected: Option<String>,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: String,
}
