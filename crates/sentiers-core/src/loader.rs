//! Dataset adapters: local file and HTTP

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::{Result, SentiersError};
use crate::models::{Catalog, TrailRecord};
use crate::ports::DatasetSource;

/// Reads the dataset from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<TrailRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SentiersError::DatasetUnavailable {
                source_desc: self.describe(),
                reason: e.to_string(),
            }
        })?;

        decode_records(&content, &self.describe())
    }
}

/// Fetches the dataset with a single `GET`
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxy, TLS, timeouts)
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<TrailRecord>> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            SentiersError::DatasetUnavailable {
                source_desc: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentiersError::DatasetStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| SentiersError::DatasetUnavailable {
            source_desc: self.url.clone(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        decode_records(&body, &self.url)
    }
}

/// Choose the adapter for a configured dataset location
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if is_remote(location) {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Whether a dataset location is an HTTP(S) URL
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load the catalog once; any failure leaves no partial data behind
pub async fn load_catalog(source: &dyn DatasetSource) -> Result<Catalog> {
    let description = source.describe();
    tracing::debug!(source = %description, "Loading trail dataset");

    let records = source.fetch().await.inspect_err(|e| {
        tracing::error!(source = %description, error = %e, "Failed to load trail dataset");
    })?;

    tracing::info!(source = %description, trails = records.len(), "Loaded trail dataset");

    Ok(Catalog::new(description, records))
}

/// Decode a JSON array of trail records
pub fn decode_records(content: &str, source_desc: &str) -> Result<Vec<TrailRecord>> {
    serde_json::from_str(content).map_err(|e| SentiersError::DatasetParse {
        source_desc: source_desc.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.org/sentiers.json"));
        assert!(is_remote("HTTP://example.org/sentiers.json"));
        assert!(!is_remote("sentiers_metadata_data.json"));
        assert!(!is_remote("/srv/data/https.json"));
    }

    #[test]
    fn test_source_for_describes_location() {
        assert_eq!(source_for("data/trails.json").describe(), "data/trails.json");
        assert_eq!(
            source_for("https://example.org/trails.json").describe(),
            "https://example.org/trails.json"
        );
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_records(r#"{"code": "GR10"}"#, "inline").unwrap_err();
        assert!(matches!(err, SentiersError::DatasetParse { .. }));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_decode_preserves_order() {
        let records = decode_records(
            r#"[
                {"code": "B", "name": "b", "type": "Walking", "difficulty": 1, "starting_point": "X: y"},
                {"code": "A", "name": "a", "type": "Walking", "difficulty": 1, "starting_point": "X: y"}
            ]"#,
            "inline",
        )
        .unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }
}
