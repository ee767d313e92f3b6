use sentiers_core::error::{Result, SentiersError};
use sentiers_core::{TrailRecord, TrailType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::parse::{parse_distance_km, parse_duration_minutes};

/// One independent filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Search,
    Difficulty,
    Type,
    Location,
    Distance,
    Duration,
}

impl Facet {
    pub const ALL: [Facet; 6] = [
        Facet::Search,
        Facet::Difficulty,
        Facet::Type,
        Facet::Location,
        Facet::Distance,
        Facet::Duration,
    ];
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::Search => "search",
            Facet::Difficulty => "difficulty",
            Facet::Type => "type",
            Facet::Location => "location",
            Facet::Distance => "distance",
            Facet::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// Distance range in kilometres
///
/// `From5To10` is inclusive at both ends, so 5 and 10 fall in it and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistanceBucket {
    #[serde(rename = "0-5")]
    Under5,
    #[serde(rename = "5-10")]
    From5To10,
    #[serde(rename = "10+")]
    Over10,
}

impl DistanceBucket {
    pub const ALL: [DistanceBucket; 3] =
        [DistanceBucket::Under5, DistanceBucket::From5To10, DistanceBucket::Over10];

    const EXPECTED: &'static str = "0-5, 5-10, 10+ (or under5, 5to10, over10)";

    pub fn contains(&self, km: f64) -> bool {
        match self {
            DistanceBucket::Under5 => km < 5.0,
            DistanceBucket::From5To10 => (5.0..=10.0).contains(&km),
            DistanceBucket::Over10 => km > 10.0,
        }
    }

    /// Tag used in the dataset page and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            DistanceBucket::Under5 => "0-5",
            DistanceBucket::From5To10 => "5-10",
            DistanceBucket::Over10 => "10+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBucket::Under5 => "Less than 5 km",
            DistanceBucket::From5To10 => "5 to 10 km",
            DistanceBucket::Over10 => "More than 10 km",
        }
    }
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DistanceBucket {
    type Err = SentiersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0-5" | "under5" => Ok(DistanceBucket::Under5),
            "5-10" | "5to10" => Ok(DistanceBucket::From5To10),
            "10+" | "over10" => Ok(DistanceBucket::Over10),
            _ => Err(SentiersError::UnknownFilterTag {
                facet: "distance",
                value: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Duration range in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "0-1h")]
    Under1h,
    #[serde(rename = "1h-2h")]
    From1hTo2h,
    #[serde(rename = "2h-3h")]
    From2hTo3h,
    #[serde(rename = "3h+")]
    Over3h,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::Under1h,
        DurationBucket::From1hTo2h,
        DurationBucket::From2hTo3h,
        DurationBucket::Over3h,
    ];

    const EXPECTED: &'static str =
        "0-1h, 1h-2h, 2h-3h, 3h+ (or under1h, 1to2h, 2to3h, over3h)";

    pub fn contains(&self, minutes: i64) -> bool {
        match self {
            DurationBucket::Under1h => minutes < 60,
            DurationBucket::From1hTo2h => (60..=120).contains(&minutes),
            DurationBucket::From2hTo3h => minutes > 120 && minutes <= 180,
            DurationBucket::Over3h => minutes > 180,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DurationBucket::Under1h => "0-1h",
            DurationBucket::From1hTo2h => "1h-2h",
            DurationBucket::From2hTo3h => "2h-3h",
            DurationBucket::Over3h => "3h+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Under1h => "Less than 1 h",
            DurationBucket::From1hTo2h => "1 h to 2 h",
            DurationBucket::From2hTo3h => "2 h to 3 h",
            DurationBucket::Over3h => "More than 3 h",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DurationBucket {
    type Err = SentiersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0-1h" | "under1h" => Ok(DurationBucket::Under1h),
            "1h-2h" | "1to2h" => Ok(DurationBucket::From1hTo2h),
            "2h-3h" | "2to3h" => Ok(DurationBucket::From2hTo3h),
            "3h+" | "over3h" => Ok(DurationBucket::Over3h),
            _ => Err(SentiersError::UnknownFilterTag {
                facet: "duration",
                value: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Map a user-facing type name onto a trail type
///
/// `walking` and `heritage` are shorthands; anything else is matched literally.
pub fn trail_type_from_tag(tag: &str) -> TrailType {
    match tag.trim().to_lowercase().as_str() {
        "walking" | "randonnee" | "randonnée" => TrailType::Walking,
        "heritage" | "cultural-heritage" | "cultural heritage" | "patrimoine" => {
            TrailType::CulturalHeritage
        }
        _ => TrailType::from(tag),
    }
}

/// Filter criteria, rebuilt from the current input on every evaluation
///
/// Empty fields place no constraint. Facets combine with AND; values within a
/// facet combine with OR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against code, name, and starting point
    #[serde(default)]
    pub search: String,

    /// Exact raw difficulty values
    #[serde(default)]
    pub difficulties: BTreeSet<i64>,

    /// Exact trail types
    #[serde(default)]
    pub types: BTreeSet<TrailType>,

    /// Literal, case-sensitive prefix of the starting point
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub distance_buckets: BTreeSet<DistanceBucket>,

    #[serde(default)]
    pub duration_buckets: BTreeSet<DurationBucket>,
}

impl FilterCriteria {
    /// Create criteria with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: i64) -> Self {
        self.difficulties.insert(difficulty);
        self
    }

    pub fn with_type(mut self, trail_type: impl Into<TrailType>) -> Self {
        self.types.insert(trail_type.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_distance(mut self, bucket: DistanceBucket) -> Self {
        self.distance_buckets.insert(bucket);
        self
    }

    pub fn with_duration(mut self, bucket: DurationBucket) -> Self {
        self.duration_buckets.insert(bucket);
        self
    }

    /// The location constraint, if one is set and non-empty
    pub fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|location| !location.is_empty())
    }

    /// Whether a facet places any constraint
    pub fn is_active(&self, facet: Facet) -> bool {
        match facet {
            Facet::Search => !self.search.is_empty(),
            Facet::Difficulty => !self.difficulties.is_empty(),
            Facet::Type => !self.types.is_empty(),
            Facet::Location => self.active_location().is_some(),
            Facet::Distance => !self.distance_buckets.is_empty(),
            Facet::Duration => !self.duration_buckets.is_empty(),
        }
    }

    /// Check if the criteria place no constraint at all
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|facet| !self.is_active(*facet))
    }

    /// Check one facet against a record
    pub fn matches_facet(&self, facet: Facet, record: &TrailRecord) -> bool {
        match facet {
            Facet::Search => self.matches_search(record),
            Facet::Difficulty => self.matches_difficulty(record),
            Facet::Type => self.matches_type(record),
            Facet::Location => self.matches_location(record),
            Facet::Distance => self.matches_distance(record),
            Facet::Duration => self.matches_duration(record),
        }
    }

    /// Check if a record satisfies every active facet
    pub fn matches(&self, record: &TrailRecord) -> bool {
        Facet::ALL.iter().all(|facet| self.matches_facet(*facet, record))
    }

    fn matches_search(&self, record: &TrailRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        [&record.name, &record.code, &record.starting_point]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_difficulty(&self, record: &TrailRecord) -> bool {
        self.difficulties.is_empty() || self.difficulties.contains(&record.difficulty)
    }

    fn matches_type(&self, record: &TrailRecord) -> bool {
        self.types.is_empty() || self.types.contains(&record.trail_type)
    }

    fn matches_location(&self, record: &TrailRecord) -> bool {
        match self.active_location() {
            None => true,
            Some(location) => record.starting_point.starts_with(location),
        }
    }

    fn matches_distance(&self, record: &TrailRecord) -> bool {
        if self.distance_buckets.is_empty() {
            return true;
        }

        let Some(km) = non_empty(&record.distance).and_then(parse_distance_km) else {
            return false;
        };
        self.distance_buckets.iter().any(|bucket| bucket.contains(km))
    }

    fn matches_duration(&self, record: &TrailRecord) -> bool {
        if self.duration_buckets.is_empty() {
            return true;
        }

        let Some(raw) = non_empty(&record.duration) else {
            return false;
        };
        let minutes = parse_duration_minutes(raw);
        self.duration_buckets.iter().any(|bucket| bucket.contains(minutes))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrailRecord {
        TrailRecord::new("GR10", "Tour du Port", "Walking", 2, "Nice: Port Lympia")
            .with_distance("7,5")
            .with_duration("2h30")
    }

    #[test]
    fn test_empty_criteria() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn test_empty_location_is_no_constraint() {
        let criteria = FilterCriteria::new().with_location("");
        assert!(criteria.is_empty());
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn test_search_fields_case_insensitive() {
        assert!(FilterCriteria::new().with_search("gr1").matches(&record()));
        assert!(FilterCriteria::new().with_search("PORT").matches(&record()));
        assert!(FilterCriteria::new().with_search("lympia").matches(&record()));
        assert!(!FilterCriteria::new().with_search("menton").matches(&record()));
    }

    #[test]
    fn test_whitespace_search_is_literal() {
        assert!(FilterCriteria::new().with_search(" ").matches(&record()));
        assert!(!FilterCriteria::new().with_search("  ").matches(&record()));
    }

    #[test]
    fn test_location_is_case_sensitive_prefix() {
        assert!(FilterCriteria::new().with_location("Nice").matches(&record()));
        assert!(!FilterCriteria::new().with_location("nice").matches(&record()));
        assert!(!FilterCriteria::new().with_location("Port").matches(&record()));
    }

    #[test]
    fn test_type_exact_match() {
        assert!(FilterCriteria::new().with_type(TrailType::Walking).matches(&record()));
        assert!(!FilterCriteria::new()
            .with_type(TrailType::CulturalHeritage)
            .matches(&record()));
        assert!(!FilterCriteria::new().with_type("walking").matches(&record()));
    }

    #[test]
    fn test_distance_bucket_boundaries() {
        assert!(DistanceBucket::Under5.contains(4.99));
        assert!(!DistanceBucket::Under5.contains(5.0));
        assert!(DistanceBucket::From5To10.contains(5.0));
        assert!(DistanceBucket::From5To10.contains(10.0));
        assert!(!DistanceBucket::Over10.contains(10.0));
        assert!(DistanceBucket::Over10.contains(10.01));
    }

    #[test]
    fn test_duration_bucket_boundaries() {
        assert!(DurationBucket::Under1h.contains(59));
        assert!(DurationBucket::From1hTo2h.contains(60));
        assert!(DurationBucket::From1hTo2h.contains(120));
        assert!(!DurationBucket::From2hTo3h.contains(120));
        assert!(DurationBucket::From2hTo3h.contains(180));
        assert!(!DurationBucket::Over3h.contains(180));
        assert!(DurationBucket::Over3h.contains(181));
    }

    #[test]
    fn test_empty_duration_never_matches_bucket() {
        let mut record = record();
        record.duration = Some(String::new());
        let criteria = FilterCriteria::new().with_duration(DurationBucket::Under1h);
        assert!(!criteria.matches(&record));
    }

    #[test]
    fn test_bucket_tags_parse() {
        assert_eq!("0-5".parse::<DistanceBucket>().unwrap(), DistanceBucket::Under5);
        assert_eq!("5to10".parse::<DistanceBucket>().unwrap(), DistanceBucket::From5To10);
        assert_eq!("10+".parse::<DistanceBucket>().unwrap(), DistanceBucket::Over10);
        assert_eq!("3h+".parse::<DurationBucket>().unwrap(), DurationBucket::Over3h);
        assert_eq!("1TO2H".parse::<DurationBucket>().unwrap(), DurationBucket::From1hTo2h);
    }

    #[test]
    fn test_unknown_bucket_tag_is_rejected() {
        let err = "20+".parse::<DistanceBucket>().unwrap_err();
        assert!(matches!(err, SentiersError::UnknownFilterTag { facet: "distance", .. }));
        assert!("4h+".parse::<DurationBucket>().is_err());
    }

    #[test]
    fn test_bucket_tags_round_trip_through_display() {
        for bucket in DistanceBucket::ALL {
            assert_eq!(bucket.to_string().parse::<DistanceBucket>().unwrap(), bucket);
        }
        for bucket in DurationBucket::ALL {
            assert_eq!(bucket.to_string().parse::<DurationBucket>().unwrap(), bucket);
        }
    }

    #[test]
    fn test_trail_type_from_tag() {
        assert_eq!(trail_type_from_tag("walking"), TrailType::Walking);
        assert_eq!(trail_type_from_tag("Heritage"), TrailType::CulturalHeritage);
        assert_eq!(trail_type_from_tag("Cultural Heritage"), TrailType::CulturalHeritage);
        assert_eq!(trail_type_from_tag("Cycling"), TrailType::Other("Cycling".to_string()));
    }

    #[test]
    fn test_criteria_serialize_bucket_tags() {
        let criteria = FilterCriteria::new()
            .with_distance(DistanceBucket::Over10)
            .with_duration(DurationBucket::Under1h);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["distance_buckets"][0], "10+");
        assert_eq!(json["duration_buckets"][0], "0-1h");
    }
}
