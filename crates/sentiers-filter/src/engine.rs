use sentiers_core::TrailRecord;
use serde::{Deserialize, Serialize};

use crate::criteria::{Facet, FilterCriteria};

/// Records that satisfy every active facet, in their original order
///
/// The input is never reordered or copied; the result borrows from it.
pub fn evaluate<'a>(records: &'a [TrailRecord], criteria: &FilterCriteria) -> Vec<&'a TrailRecord> {
    records.iter().filter(|record| criteria.matches(record)).collect()
}

/// Same as [`evaluate`], with a per-facet account of what was rejected
pub fn evaluate_with_report<'a>(
    records: &'a [TrailRecord],
    criteria: &FilterCriteria,
) -> (Vec<&'a TrailRecord>, FilterReport) {
    let (positions, report) = evaluate_positions(records, criteria);
    let matched = positions.into_iter().map(|index| &records[index]).collect();
    (matched, report)
}

/// Positions of the matching records plus the evaluation report
pub(crate) fn evaluate_positions(
    records: &[TrailRecord],
    criteria: &FilterCriteria,
) -> (Vec<usize>, FilterReport) {
    let active: Vec<Facet> =
        Facet::ALL.into_iter().filter(|facet| criteria.is_active(*facet)).collect();

    let mut rejections = FacetRejections::default();
    let mut positions = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let mut passed = true;
        for facet in &active {
            if !criteria.matches_facet(*facet, record) {
                rejections.record(*facet);
                passed = false;
            }
        }
        if passed {
            positions.push(index);
        }
    }

    let report = FilterReport {
        records_evaluated: records.len(),
        records_matched: positions.len(),
        active_facets: active,
        rejections,
    };

    tracing::debug!(
        evaluated = report.records_evaluated,
        matched = report.records_matched,
        "Evaluated filter criteria"
    );

    (positions, report)
}

/// Explanation of one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    /// Number of records evaluated
    pub records_evaluated: usize,

    /// Number of records that passed every facet
    pub records_matched: usize,

    /// Facets that placed a constraint
    pub active_facets: Vec<Facet>,

    /// How many records each facet rejected
    pub rejections: FacetRejections,
}

/// Rejection counts per facet
///
/// A record failing several facets is counted once for each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRejections {
    pub search: usize,
    pub difficulty: usize,
    pub trail_type: usize,
    pub location: usize,
    pub distance: usize,
    pub duration: usize,
}

impl FacetRejections {
    fn record(&mut self, facet: Facet) {
        *self.count_mut(facet) += 1;
    }

    fn count_mut(&mut self, facet: Facet) -> &mut usize {
        match facet {
            Facet::Search => &mut self.search,
            Facet::Difficulty => &mut self.difficulty,
            Facet::Type => &mut self.trail_type,
            Facet::Location => &mut self.location,
            Facet::Distance => &mut self.distance,
            Facet::Duration => &mut self.duration,
        }
    }

    pub fn get(&self, facet: Facet) -> usize {
        match facet {
            Facet::Search => self.search,
            Facet::Difficulty => self.difficulty,
            Facet::Type => self.trail_type,
            Facet::Location => self.location,
            Facet::Distance => self.distance,
            Facet::Duration => self.duration,
        }
    }
}
