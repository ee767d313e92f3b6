//! Sentiers Filter - Facet filtering over the trail catalog
//!
//! This crate implements the filter engine: criteria, field parsing, predicate
//! evaluation, location facet derivation, and the browsing session that holds
//! the current criteria, result, and selection.

pub mod criteria;
pub mod engine;
pub mod facets;
pub mod parse;
pub mod session;

pub use criteria::{DistanceBucket, DurationBucket, Facet, FilterCriteria};
pub use engine::{evaluate, evaluate_with_report, FacetRejections, FilterReport};
pub use facets::derive_locations;
pub use parse::{parse_distance_km, parse_duration_minutes};
pub use session::{CatalogSession, ResultState};
