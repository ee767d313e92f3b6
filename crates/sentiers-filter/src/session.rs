//! Browsing session state
//!
//! One session is the single source of truth for every view of the catalog:
//! the current criteria, the result they produce, and the selected trail.

use sentiers_core::error::{Result, SentiersError};
use sentiers_core::{Catalog, TrailRecord};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::criteria::FilterCriteria;
use crate::engine::{evaluate_positions, FilterReport};
use crate::facets::derive_locations;

/// What the result area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum ResultState {
    /// The dataset loaded but contains no trails
    EmptyCatalog,
    /// Trails exist but none satisfy the criteria
    NoMatches,
    /// This many trails match
    Results(usize),
}

/// Application state owned by the presentation layer
#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Catalog,
    locations: BTreeSet<String>,
    criteria: FilterCriteria,
    matches: Vec<usize>,
    report: FilterReport,
    selected: Option<String>,
}

impl CatalogSession {
    /// Start a session with no criteria applied
    pub fn new(catalog: Catalog) -> Self {
        let locations = derive_locations(catalog.records());
        let criteria = FilterCriteria::new();
        let (matches, report) = evaluate_positions(catalog.records(), &criteria);

        Self {
            catalog,
            locations,
            criteria,
            matches,
            report,
            selected: None,
        }
    }

    /// Replace the criteria and recompute the result in full
    pub fn apply(&mut self, criteria: FilterCriteria) -> &FilterReport {
        let (matches, report) = evaluate_positions(self.catalog.records(), &criteria);
        self.criteria = criteria;
        self.matches = matches;
        self.report = report;
        &self.report
    }

    /// Clear every criterion and re-evaluate
    pub fn reset(&mut self) -> &FilterReport {
        self.apply(FilterCriteria::new())
    }

    /// Open the details of a trail
    pub fn select(&mut self, code: &str) -> Result<&TrailRecord> {
        let position = self.catalog.position(code).ok_or_else(|| SentiersError::TrailNotFound {
            code: code.to_string(),
        })?;
        self.selected = Some(code.to_string());
        Ok(&self.catalog.records()[position])
    }

    /// Close the details
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&TrailRecord> {
        self.selected.as_deref().and_then(|code| self.catalog.find(code))
    }

    /// Whether a row should be highlighted
    pub fn is_selected(&self, record: &TrailRecord) -> bool {
        self.selected.as_deref() == Some(record.code.as_str())
    }

    /// Matching records in dataset order
    pub fn results(&self) -> Vec<&TrailRecord> {
        let records = self.catalog.records();
        self.matches.iter().map(|index| &records[*index]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.matches.len()
    }

    pub fn state(&self) -> ResultState {
        if self.catalog.is_empty() {
            ResultState::EmptyCatalog
        } else if self.matches.is_empty() {
            ResultState::NoMatches
        } else {
            ResultState::Results(self.matches.len())
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn report(&self) -> &FilterReport {
        &self.report
    }

    pub fn locations(&self) -> &BTreeSet<String> {
        &self.locations
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::DistanceBucket;

    fn session() -> CatalogSession {
        CatalogSession::new(Catalog::new(
            "fixture",
            vec![
                TrailRecord::new("GR10", "Tour", "Walking", 1, "Nice: Port").with_distance("3"),
                TrailRecord::new("PAT1", "Remparts", "Cultural Heritage", 2, "Antibes: Ville")
                    .with_distance("8"),
            ],
        ))
    }

    #[test]
    fn test_new_session_shows_everything() {
        let session = session();
        assert_eq!(session.result_count(), 2);
        assert_eq!(session.state(), ResultState::Results(2));
        assert!(session.criteria().is_empty());
        assert_eq!(session.locations().len(), 2);
    }

    #[test]
    fn test_apply_replaces_criteria() {
        let mut session = session();

        session.apply(FilterCriteria::new().with_difficulty(1));
        assert_eq!(session.result_count(), 1);

        // Criteria are replaced, not accumulated
        session.apply(FilterCriteria::new().with_difficulty(2));
        let codes: Vec<&str> = session.results().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["PAT1"]);
    }

    #[test]
    fn test_no_matches_state() {
        let mut session = session();
        let report = session.apply(FilterCriteria::new().with_distance(DistanceBucket::Over10));
        assert_eq!(report.records_matched, 0);
        assert_eq!(session.state(), ResultState::NoMatches);
    }

    #[test]
    fn test_empty_catalog_state() {
        let session = CatalogSession::new(Catalog::new("empty", Vec::new()));
        assert_eq!(session.state(), ResultState::EmptyCatalog);
    }

    #[test]
    fn test_reset_clears_criteria() {
        let mut session = session();
        session.apply(FilterCriteria::new().with_search("zzz"));
        assert_eq!(session.result_count(), 0);

        session.reset();
        assert!(session.criteria().is_empty());
        assert_eq!(session.result_count(), 2);
    }

    #[test]
    fn test_selection_does_not_filter() {
        let mut session = session();
        session.select("PAT1").unwrap();

        assert_eq!(session.result_count(), 2);
        assert!(session.is_selected(session.catalog().find("PAT1").unwrap()));
        assert!(!session.is_selected(session.catalog().find("GR10").unwrap()));

        session.clear_selection();
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut session = session();
        session.select("GR10").unwrap();
        session.apply(FilterCriteria::new().with_difficulty(2));
        assert_eq!(session.selected().map(|r| r.code.as_str()), Some("GR10"));
    }

    #[test]
    fn test_select_unknown_code() {
        let mut session = session();
        let err = session.select("NOPE").unwrap_err();
        assert!(matches!(err, SentiersError::TrailNotFound { .. }));
        assert!(session.selected().is_none());
    }
}
