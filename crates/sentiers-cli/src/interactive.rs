use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};
use sentiers_core::TrailType;
use sentiers_filter::{CatalogSession, DistanceBucket, DurationBucket, FilterCriteria};

use crate::views::type_badge;

/// One step of the interactive browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    EditFilters,
    ResetFilters,
    SelectTrail,
    CloseDetails,
    SwitchView,
    ToggleTheme,
    Quit,
}

impl BrowseAction {
    const ALL: [BrowseAction; 7] = [
        BrowseAction::EditFilters,
        BrowseAction::ResetFilters,
        BrowseAction::SelectTrail,
        BrowseAction::CloseDetails,
        BrowseAction::SwitchView,
        BrowseAction::ToggleTheme,
        BrowseAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            BrowseAction::EditFilters => "Edit filters",
            BrowseAction::ResetFilters => "Reset filters",
            BrowseAction::SelectTrail => "Show trail details",
            BrowseAction::CloseDetails => "Close details",
            BrowseAction::SwitchView => "Switch between table and cards",
            BrowseAction::ToggleTheme => "Toggle theme",
            BrowseAction::Quit => "Quit",
        }
    }
}

/// Ask for the next browser action
pub fn prompt_action() -> Result<BrowseAction> {
    let labels: Vec<&str> = BrowseAction::ALL.iter().map(BrowseAction::label).collect();
    let index = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(BrowseAction::ALL[index])
}

/// Ask for every filter control, starting from the current criteria
///
/// The result is a fresh set of criteria; nothing from the previous evaluation
/// leaks in except the values offered as defaults.
pub fn prompt_criteria(session: &CatalogSession) -> Result<FilterCriteria> {
    let current = session.criteria();
    let mut criteria = FilterCriteria::new();

    let search: String = Input::new()
        .with_prompt("Search (code, name, starting point)")
        .with_initial_text(current.search.clone())
        .allow_empty(true)
        .interact_text()?;
    criteria = criteria.with_search(search);

    let levels: [i64; 3] = [1, 2, 3];
    let level_labels: Vec<String> = levels.iter().map(|l| format!("Level {}", l)).collect();
    let level_defaults: Vec<bool> =
        levels.iter().map(|l| current.difficulties.contains(l)).collect();
    for index in MultiSelect::new()
        .with_prompt("Difficulty")
        .items(&level_labels)
        .defaults(&level_defaults)
        .interact()?
    {
        criteria = criteria.with_difficulty(levels[index]);
    }

    let types = [TrailType::Walking, TrailType::CulturalHeritage];
    let type_labels: Vec<String> = types
        .iter()
        .map(|t| format!("{} ({})", t, type_badge(t).unwrap_or_default()))
        .collect();
    let type_defaults: Vec<bool> = types.iter().map(|t| current.types.contains(t)).collect();
    for index in MultiSelect::new()
        .with_prompt("Type")
        .items(&type_labels)
        .defaults(&type_defaults)
        .interact()?
    {
        criteria = criteria.with_type(types[index].clone());
    }

    let locations: Vec<&String> = session.locations().iter().collect();
    let mut location_labels = vec!["All locations".to_string()];
    location_labels.extend(locations.iter().map(|l| l.to_string()));
    let location_default = current
        .active_location()
        .and_then(|active| locations.iter().position(|l| l.as_str() == active))
        .map(|position| position + 1)
        .unwrap_or(0);
    let location_index = Select::new()
        .with_prompt("Location")
        .items(&location_labels)
        .default(location_default)
        .interact()?;
    if location_index > 0 {
        criteria = criteria.with_location(locations[location_index - 1].clone());
    }

    let distance_labels: Vec<&str> = DistanceBucket::ALL.iter().map(|b| b.label()).collect();
    let distance_defaults: Vec<bool> = DistanceBucket::ALL
        .iter()
        .map(|b| current.distance_buckets.contains(b))
        .collect();
    for index in MultiSelect::new()
        .with_prompt("Distance")
        .items(&distance_labels)
        .defaults(&distance_defaults)
        .interact()?
    {
        criteria = criteria.with_distance(DistanceBucket::ALL[index]);
    }

    let duration_labels: Vec<&str> = DurationBucket::ALL.iter().map(|b| b.label()).collect();
    let duration_defaults: Vec<bool> = DurationBucket::ALL
        .iter()
        .map(|b| current.duration_buckets.contains(b))
        .collect();
    for index in MultiSelect::new()
        .with_prompt("Duration")
        .items(&duration_labels)
        .defaults(&duration_defaults)
        .interact()?
    {
        criteria = criteria.with_duration(DurationBucket::ALL[index]);
    }

    Ok(criteria)
}

/// Ask which of the current results to open; `None` when there is nothing to pick
pub fn prompt_trail(session: &CatalogSession) -> Result<Option<String>> {
    let results = session.results();
    if results.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> =
        results.iter().map(|r| format!("{}  {}", r.code, r.name)).collect();
    let default = results
        .iter()
        .position(|r| session.is_selected(r))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Trail")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Some(results[index].code.clone()))
}
