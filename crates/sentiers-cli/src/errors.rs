use console::style;
use sentiers_core::SentiersError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a dataset that could not be loaded
pub fn dataset_unavailable(error: &SentiersError) -> CliError {
    let error = error.to_string();
    CliError::new("Could not load the trail dataset")
        .with_context(format!(
            "The dataset could not be read, so no trails are shown.\n\nError: {}",
            error
        ))
        .with_suggestion("Check the path or URL: --dataset sentiers_metadata_data.json")
        .with_suggestion("Or set SENTIERS_DATASET, or `dataset = \"...\"` in sentiers.toml")
        .with_suggestion("The file must contain a JSON array of trail objects")
        .with_help("Run: sentiers config")
}

/// Create error for an unknown trail code
pub fn trail_not_found(code: &str) -> CliError {
    CliError::new(format!("Trail not found: {}", code))
        .with_context("No trail in the dataset has this code. Codes are case-sensitive.")
        .with_suggestion("List the available codes: sentiers list")
        .with_suggestion("Search by name: sentiers list --search <text>")
        .with_help("Run: sentiers show --help")
}

/// Create error for a filter value that is not recognised
pub fn invalid_filter(error: &SentiersError) -> CliError {
    CliError::new("Invalid filter")
        .with_context(error.to_string())
        .with_help("Run: sentiers list --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check sentiers.toml for syntax errors")
        .with_suggestion("Or unset the SENTIERS_* environment variables")
        .with_help("Run: sentiers config")
}

/// Map a library error onto the matching presenter
pub fn from_sentiers(error: SentiersError) -> CliError {
    match &error {
        e if e.is_load_failure() => dataset_unavailable(e),
        SentiersError::TrailNotFound { code } => trail_not_found(code),
        SentiersError::UnknownFilterTag { .. } => invalid_filter(&error),
        SentiersError::ConfigInvalid { key, reason } => invalid_config(key, reason),
        SentiersError::PreferencesInvalid { path, reason } => {
            invalid_config(&path.display().to_string(), reason)
        }
        _ => CliError::new(error.to_string()),
    }
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<SentiersError>() {
        Ok(sentiers_error) => return from_sentiers(sentiers_error),
        Err(other) => other,
    };

    let message = error.to_string();

    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check the file path and try again")
    } else if message.contains("permission denied") || message.contains("Permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(format!("{:#}", error))
    }
}
