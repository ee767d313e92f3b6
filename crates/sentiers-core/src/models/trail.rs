use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest difficulty level rendered as icons
pub const MAX_DIFFICULTY_LEVEL: u8 = 3;

/// Kind of trail
///
/// Two values are known and drive badge styling; anything else is kept verbatim
/// so that type filtering stays an exact string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrailType {
    Walking,
    CulturalHeritage,
    Other(String),
}

impl TrailType {
    /// The dataset spelling of this type
    pub fn as_str(&self) -> &str {
        match self {
            TrailType::Walking => "Walking",
            TrailType::CulturalHeritage => "Cultural Heritage",
            TrailType::Other(value) => value,
        }
    }
}

impl From<String> for TrailType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Walking" => TrailType::Walking,
            "Cultural Heritage" => TrailType::CulturalHeritage,
            _ => TrailType::Other(value),
        }
    }
}

impl From<&str> for TrailType {
    fn from(value: &str) -> Self {
        TrailType::from(value.to_string())
    }
}

impl From<TrailType> for String {
    fn from(value: TrailType) -> Self {
        match value {
            TrailType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TrailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry, exactly as published in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailRecord {
    /// Unique identifier
    pub code: String,

    /// Display name
    pub name: String,

    /// Trail type
    #[serde(rename = "type")]
    pub trail_type: TrailType,

    /// Raw difficulty, usually 1..=3
    pub difficulty: i64,

    /// "<Location>: <free text>"
    pub starting_point: String,

    /// Kilometres, comma or dot decimal separator
    #[serde(default)]
    pub distance: Option<String>,

    /// "<H>h<MM>"
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub altitude: Option<String>,

    #[serde(default)]
    pub parking: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl TrailRecord {
    /// Create a record with only the required fields set
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        trail_type: impl Into<TrailType>,
        difficulty: i64,
        starting_point: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            trail_type: trail_type.into(),
            difficulty,
            starting_point: starting_point.into(),
            distance: None,
            duration: None,
            altitude: None,
            parking: None,
            description: None,
            image_url: None,
            url: None,
        }
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_altitude(mut self, altitude: impl Into<String>) -> Self {
        self.altitude = Some(altitude.into());
        self
    }

    pub fn with_parking(mut self, parking: impl Into<String>) -> Self {
        self.parking = Some(parking.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Location facet: the part of the starting point before the first `:`, trimmed
    pub fn location(&self) -> &str {
        self.starting_point
            .split_once(':')
            .map_or(self.starting_point.as_str(), |(location, _)| location)
            .trim()
    }

    /// Difficulty as displayed, clamped to `0..=MAX_DIFFICULTY_LEVEL`
    ///
    /// Filtering never uses this value; it compares the raw `difficulty`.
    pub fn difficulty_level(&self) -> u8 {
        self.difficulty.clamp(0, i64::from(MAX_DIFFICULTY_LEVEL)) as u8
    }
}
