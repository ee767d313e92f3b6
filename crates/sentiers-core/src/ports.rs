//! Port trait definitions
//!
//! These traits define the interfaces that dataset adapters must implement.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::TrailRecord;

/// Port for fetching the static trail dataset
///
/// Implementations perform exactly one read per call, with no retry.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location of the dataset (path or URL)
    fn describe(&self) -> String;

    /// Fetch and decode the full trail list
    async fn fetch(&self) -> Result<Vec<TrailRecord>>;
}
