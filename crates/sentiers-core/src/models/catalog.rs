use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TrailRecord;

/// The trail list loaded once at startup
///
/// Records are never mutated after construction; every view reads the same slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Where the records were loaded from
    pub source: String,

    /// When the load completed
    pub loaded_at: DateTime<Utc>,

    records: Vec<TrailRecord>,
}

impl Catalog {
    /// Create a catalog stamped with the current time
    pub fn new(source: impl Into<String>, records: Vec<TrailRecord>) -> Self {
        Self {
            source: source.into(),
            loaded_at: Utc::now(),
            records,
        }
    }

    /// All records in dataset order
    pub fn records(&self) -> &[TrailRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by its code
    pub fn find(&self, code: &str) -> Option<&TrailRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Position of a record in dataset order
    pub fn position(&self, code: &str) -> Option<usize> {
        self.records.iter().position(|record| record.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            "fixture",
            vec![
                TrailRecord::new("GR10", "Tour", "Walking", 1, "Nice: Port"),
                TrailRecord::new("P2", "Remparts", "Cultural Heritage", 2, "Antibes: Vieille ville"),
            ],
        )
    }

    #[test]
    fn test_find_by_code() {
        let catalog = sample();
        assert_eq!(catalog.find("P2").map(|r| r.name.as_str()), Some("Remparts"));
        assert!(catalog.find("p2").is_none());
        assert_eq!(catalog.position("P2"), Some(1));
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(sample().len(), 2);
        assert!(Catalog::new("empty", Vec::new()).is_empty());
    }
}
