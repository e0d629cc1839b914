use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

/// Stored theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

/// The mode actually applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> ThemeMode {
        match self {
            Theme::Auto if prefers_dark => ThemeMode::Dark,
            Theme::Auto | Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        }
    }

    /// Explicit preference opposite to what is currently shown.
    #[must_use]
    pub fn toggled(self, prefers_dark: bool) -> Theme {
        match self.resolve(prefers_dark) {
            ThemeMode::Dark => Theme::Light,
            ThemeMode::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Theme::Auto),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_platform() {
        assert_eq!(Theme::Auto.resolve(true), ThemeMode::Dark);
        assert_eq!(Theme::Auto.resolve(false), ThemeMode::Light);
        assert_eq!(Theme::Light.resolve(true), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_resolved_mode() {
        assert_eq!(Theme::Auto.toggled(true), Theme::Light);
        assert_eq!(Theme::Light.toggled(true), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(false), Theme::Light);
    }

    #[test]
    fn parses_stored_tokens() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Auto).unwrap(), "\"auto\"");
    }
}
