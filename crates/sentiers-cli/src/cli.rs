use clap::{Args, Parser, Subcommand, ValueEnum};
use sentiers_core::error::Result;
use sentiers_core::ViewMode;
use sentiers_filter::criteria::trail_type_from_tag;
use sentiers_filter::{DistanceBucket, DurationBucket, FilterCriteria};
use std::path::PathBuf;

/// Sentiers - Walking and heritage trail catalog
#[derive(Parser, Debug)]
#[command(name = "sentiers")]
#[command(about = "Browse and filter a catalog of walking and heritage trails", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show how many trails each filter rejected
    #[arg(long, global = true)]
    pub explain: bool,

    /// Dataset file path or http(s) URL
    #[arg(long, global = true, value_name = "PATH|URL")]
    pub dataset: Option<String>,

    /// Configuration file (defaults to ./sentiers.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preference file holding the theme
    #[arg(long, global = true, value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    /// Result layout
    #[arg(long, global = true)]
    pub view: Option<ViewArg>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Result layout selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    /// One row per trail (wide terminals)
    Table,
    /// One card per trail (narrow terminals)
    Cards,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Table => ViewMode::Table,
            ViewArg::Cards => ViewMode::Cards,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the trails matching the filters
    List(ListArgs),

    /// Show the details of one trail
    Show(ShowArgs),

    /// List the locations available to --location
    Locations,

    /// Write the filtered catalog as a standalone HTML page
    Export(ExportArgs),

    /// Browse the catalog interactively
    Browse,

    /// Show or change the persisted colour theme
    Theme(ThemeArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

/// Filters shared by every command that evaluates the catalog
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against code, name, and starting point
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Difficulty level (repeatable)
    #[arg(long, short = 'd', value_name = "LEVEL")]
    pub difficulty: Vec<i64>,

    /// Trail type: walking, heritage, or a literal type (repeatable)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub trail_type: Vec<String>,

    /// Location, as listed by `sentiers locations`
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Distance range: 0-5, 5-10, 10+ (repeatable)
    #[arg(long, value_name = "RANGE")]
    pub distance: Vec<String>,

    /// Duration range: 0-1h, 1h-2h, 2h-3h, 3h+ (repeatable)
    #[arg(long, value_name = "RANGE")]
    pub duration: Vec<String>,
}

impl FilterArgs {
    /// Build fresh criteria from the arguments
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::new();

        if let Some(ref search) = self.search {
            criteria = criteria.with_search(search.clone());
        }

        for difficulty in &self.difficulty {
            criteria = criteria.with_difficulty(*difficulty);
        }

        for tag in &self.trail_type {
            criteria = criteria.with_type(trail_type_from_tag(tag));
        }

        if let Some(ref location) = self.location {
            criteria = criteria.with_location(location.clone());
        }

        for tag in &self.distance {
            criteria = criteria.with_distance(tag.parse::<DistanceBucket>()?);
        }

        for tag in &self.duration {
            criteria = criteria.with_duration(tag.parse::<DurationBucket>()?);
        }

        Ok(criteria)
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Highlight this trail in the results
    #[arg(long, value_name = "CODE")]
    pub select: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Trail code
    pub code: String,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output HTML file
    #[arg(long, short = 'o', default_value = "sentiers.html")]
    pub output: PathBuf,

    /// Open the details panel for this trail
    #[arg(long, value_name = "CODE")]
    pub select: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// What to do with the theme
    #[arg(value_enum, default_value = "show")]
    pub action: ThemeAction,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Store the dark theme
    Dark,
    /// Store the light theme
    Light,
    /// Switch between dark and light
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiers_core::TrailType;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::parse_from([
            "sentiers",
            "list",
            "--search",
            "port",
            "-d",
            "1",
            "-d",
            "3",
            "--type",
            "heritage",
            "--distance",
            "5-10",
            "--duration",
            "0-1h",
        ]);

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        let criteria = args.filters.to_criteria().unwrap();

        assert_eq!(criteria.search, "port");
        assert_eq!(criteria.difficulties.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(criteria.types.contains(&TrailType::CulturalHeritage));
        assert!(criteria.distance_buckets.contains(&DistanceBucket::From5To10));
        assert!(criteria.duration_buckets.contains(&DurationBucket::Under1h));
    }

    #[test]
    fn test_unknown_range_is_an_error() {
        let args = FilterArgs {
            distance: vec!["20+".to_string()],
            ..FilterArgs::default()
        };
        assert!(args.to_criteria().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sentiers", "locations", "--json", "--dataset", "x.json"]);
        assert!(cli.json);
        assert_eq!(cli.dataset.as_deref(), Some("x.json"));
    }

    #[test]
    fn test_theme_defaults_to_show() {
        let cli = Cli::parse_from(["sentiers", "theme"]);
        let Commands::Theme(args) = cli.command else {
            panic!("expected theme command");
        };
        assert!(matches!(args.action, ThemeAction::Show));
    }
}
