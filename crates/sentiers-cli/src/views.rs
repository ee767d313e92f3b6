//! Terminal views of the catalog: table rows, cards, and the detail panel
//!
//! Both list layouts render from the same session, so they can never disagree
//! about the current result or selection.

use console::style;
use sentiers_core::{TrailRecord, TrailType, ViewMode};
use sentiers_filter::{CatalogSession, ResultState};
use tabled::Tabled;

use crate::output::OutputWriter;

const DIFFICULTY_ICON: &str = "⚡";
const SELECTED_MARKER: &str = "▶";

/// Badge text for the two known trail types
pub fn type_badge(trail_type: &TrailType) -> Option<&'static str> {
    match trail_type {
        TrailType::Walking => Some("Randonnée"),
        TrailType::CulturalHeritage => Some("Patrimoine"),
        TrailType::Other(_) => None,
    }
}

/// One icon per difficulty level, clamped for display
pub fn difficulty_icons(record: &TrailRecord) -> String {
    DIFFICULTY_ICON.repeat(usize::from(record.difficulty_level()))
}

pub fn results_heading(count: usize) -> String {
    format!("Trails ({})", count)
}

/// Table row for the wide layout
#[derive(Debug, Tabled)]
pub struct TrailRow {
    #[tabled(rename = "")]
    pub marker: &'static str,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub badge: String,
    #[tabled(rename = "Difficulty")]
    pub difficulty: String,
    #[tabled(rename = "Starting point")]
    pub starting_point: String,
}

impl TrailRow {
    pub fn new(record: &TrailRecord, selected: bool) -> Self {
        Self {
            marker: if selected { SELECTED_MARKER } else { "" },
            code: record.code.clone(),
            name: record.name.clone(),
            badge: type_badge(&record.trail_type).unwrap_or_default().to_string(),
            difficulty: difficulty_icons(record),
            starting_point: record.starting_point.clone(),
        }
    }
}

/// Card for the narrow layout
pub fn render_card(record: &TrailRecord, selected: bool) -> String {
    let marker = if selected { SELECTED_MARKER } else { " " };
    let mut header = format!("{} {}", marker, style(&record.code).blue().bold());
    if let Some(badge) = type_badge(&record.trail_type) {
        header.push_str(&format!(" [{}]", badge));
    }

    [
        header,
        format!("  {}", style(&record.name).bold()),
        format!("  📍 {}", record.starting_point),
        format!("  Difficulty: {}", difficulty_icons(record)),
    ]
    .join("\n")
}

/// Which trail attribute a detail line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Code,
    Type,
    Difficulty,
    StartingPoint,
    Distance,
    Duration,
    Altitude,
    Parking,
    Description,
    Image,
    Link,
}

impl DetailKind {
    /// Terminal label
    pub fn label(&self) -> &'static str {
        match self {
            DetailKind::Code => "Code",
            DetailKind::Type => "Type",
            DetailKind::Difficulty => "Difficulty",
            DetailKind::StartingPoint => "Starting point",
            DetailKind::Distance => "Distance",
            DetailKind::Duration => "Duration",
            DetailKind::Altitude => "Altitude",
            DetailKind::Parking => "Parking",
            DetailKind::Description => "Description",
            DetailKind::Image => "Image",
            DetailKind::Link => "More info",
        }
    }

    /// Label on the exported page
    pub fn label_fr(&self) -> &'static str {
        match self {
            DetailKind::Code => "Code",
            DetailKind::Type => "Type",
            DetailKind::Difficulty => "Difficulté",
            DetailKind::StartingPoint => "Point de départ",
            DetailKind::Distance => "Distance",
            DetailKind::Duration => "Durée",
            DetailKind::Altitude => "Altitude",
            DetailKind::Parking => "Parking",
            DetailKind::Description => "Description",
            DetailKind::Image => "Image",
            DetailKind::Link => "Plus d'infos",
        }
    }
}

/// One line of the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub kind: DetailKind,
    pub value: String,
}

impl DetailField {
    fn new(kind: DetailKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Detail panel content; optional fields appear only when present and non-empty
pub fn detail_fields(record: &TrailRecord) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new(DetailKind::Code, record.code.clone()),
        DetailField::new(
            DetailKind::Type,
            type_badge(&record.trail_type).unwrap_or(record.trail_type.as_str()),
        ),
        DetailField::new(
            DetailKind::Difficulty,
            format!("{} Level {}", difficulty_icons(record), record.difficulty),
        ),
        DetailField::new(DetailKind::StartingPoint, record.starting_point.clone()),
    ];

    let optional = [
        (DetailKind::Distance, &record.distance),
        (DetailKind::Duration, &record.duration),
        (DetailKind::Altitude, &record.altitude),
        (DetailKind::Parking, &record.parking),
        (DetailKind::Description, &record.description),
        (DetailKind::Image, &record.image_url),
        (DetailKind::Link, &record.url),
    ];

    for (kind, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            fields.push(DetailField::new(kind, value));
        }
    }

    fields
}

/// Print the current result in the requested layout
pub fn print_results(output: &OutputWriter, session: &CatalogSession, view: ViewMode) {
    output.section(results_heading(session.result_count()));

    match session.state() {
        ResultState::EmptyCatalog => {
            output.empty("The dataset contains no trails.");
        }
        ResultState::NoMatches => {
            output.empty("No trail matches these filters. Try removing some of them.");
        }
        ResultState::Results(_) => match view {
            ViewMode::Table => {
                let rows = session
                    .results()
                    .into_iter()
                    .map(|record| TrailRow::new(record, session.is_selected(record)))
                    .collect();
                output.table::<TrailRow>(rows);
            }
            ViewMode::Cards => {
                for record in session.results() {
                    output.text(render_card(record, session.is_selected(record)));
                    output.text("");
                }
            }
        },
    }
}

/// Print the detail panel of one trail
pub fn print_details(output: &OutputWriter, record: &TrailRecord) {
    output.section(&record.name);
    for field in detail_fields(record) {
        output.kv(field.kind.label(), field.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrailRecord {
        TrailRecord::new("GR10", "Tour du Port", "Walking", 2, "Nice: Port Lympia")
    }

    #[test]
    fn test_type_badges() {
        assert_eq!(type_badge(&TrailType::Walking), Some("Randonnée"));
        assert_eq!(type_badge(&TrailType::CulturalHeritage), Some("Patrimoine"));
        assert_eq!(type_badge(&TrailType::Other("Cycling".to_string())), None);
    }

    #[test]
    fn test_difficulty_icons_are_clamped() {
        let mut record = record();
        assert_eq!(difficulty_icons(&record), "⚡⚡");

        record.difficulty = 9;
        assert_eq!(difficulty_icons(&record), "⚡⚡⚡");

        record.difficulty = -2;
        assert_eq!(difficulty_icons(&record), "");
    }

    #[test]
    fn test_row_marks_selection() {
        assert_eq!(TrailRow::new(&record(), true).marker, "▶");
        assert_eq!(TrailRow::new(&record(), false).marker, "");
        assert_eq!(TrailRow::new(&record(), false).badge, "Randonnée");
    }

    #[test]
    fn test_card_contains_fields() {
        let card = render_card(&record(), false);
        assert!(card.contains("GR10"));
        assert!(card.contains("Tour du Port"));
        assert!(card.contains("Nice: Port Lympia"));
        assert!(card.contains("Randonnée"));
    }

    #[test]
    fn test_detail_fields_skip_absent_values() {
        let record = record().with_distance("7,5").with_duration("").with_url("https://example.org");
        let kinds: Vec<DetailKind> = detail_fields(&record).iter().map(|f| f.kind).collect();

        assert!(kinds.contains(&DetailKind::Distance));
        assert!(kinds.contains(&DetailKind::Link));
        assert!(!kinds.contains(&DetailKind::Duration));
        assert!(!kinds.contains(&DetailKind::Parking));
    }

    #[test]
    fn test_detail_difficulty_shows_raw_level() {
        let mut record = record();
        record.difficulty = 5;
        let difficulty = detail_fields(&record)
            .into_iter()
            .find(|f| f.kind == DetailKind::Difficulty)
            .unwrap();
        assert_eq!(difficulty.value, "⚡⚡⚡ Level 5");
    }

    #[test]
    fn test_heading() {
        assert_eq!(results_heading(3), "Trails (3)");
    }
}
