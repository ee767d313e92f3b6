//! Error types for Sentiers

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentiersError {
    // Dataset load failures
    #[error("Dataset unavailable at {source_desc}: {reason}")]
    DatasetUnavailable { source_desc: String, reason: String },

    #[error("Dataset request to {url} failed with status {status}")]
    DatasetStatus { url: String, status: u16 },

    #[error("Dataset at {source_desc} is not a valid trail list: {reason}")]
    DatasetParse { source_desc: String, reason: String },

    // Lookup errors
    #[error("Trail not found: {code}")]
    TrailNotFound { code: String },

    // Filter errors
    #[error("Unknown {facet} filter value '{value}'. Expected one of: {expected}")]
    UnknownFilterTag {
        facet: &'static str,
        value: String,
        expected: &'static str,
    },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Preference errors
    #[error("Invalid preferences file {path}: {reason}")]
    PreferencesInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SentiersError {
    /// Whether this error means the dataset could not be loaded at all
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SentiersError::DatasetUnavailable { .. }
                | SentiersError::DatasetStatus { .. }
                | SentiersError::DatasetParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SentiersError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_family() {
        let unavailable = SentiersError::DatasetUnavailable {
            source_desc: "trails.json".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let status = SentiersError::DatasetStatus {
            url: "https://example.org/trails.json".to_string(),
            status: 404,
        };
        let not_found = SentiersError::TrailNotFound {
            code: "GR10".to_string(),
        };

        assert!(unavailable.is_load_failure());
        assert!(status.is_load_failure());
        assert!(!not_found.is_load_failure());
    }

    #[test]
    fn test_unknown_tag_message_lists_expected_values() {
        let err = SentiersError::UnknownFilterTag {
            facet: "distance",
            value: "20+".to_string(),
            expected: "0-5, 5-10, 10+",
        };
        let message = err.to_string();
        assert!(message.contains("distance"));
        assert!(message.contains("20+"));
        assert!(message.contains("10+"));
    }
}
