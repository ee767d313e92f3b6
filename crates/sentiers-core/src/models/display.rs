use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SentiersError;

/// Colour theme persisted between sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SentiersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(SentiersError::ConfigInvalid {
                key: "theme".to_string(),
                reason: format!("Invalid theme: {}. Use dark or light", s),
            }),
        }
    }
}

/// How a result list is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Wide layout, one row per trail
    #[default]
    Table,
    /// Narrow layout, one card per trail
    Cards,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Cards => f.write_str("cards"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = SentiersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "desktop" => Ok(ViewMode::Table),
            "cards" | "card" | "mobile" => Ok(ViewMode::Cards),
            _ => Err(SentiersError::ConfigInvalid {
                key: "view".to_string(),
                reason: format!("Invalid view: {}. Use table or cards", s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_parse_view_mode() {
        assert_eq!("table".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert_eq!("Mobile".parse::<ViewMode>().unwrap(), ViewMode::Cards);
        assert!("grid".parse::<ViewMode>().is_err());
    }
}
