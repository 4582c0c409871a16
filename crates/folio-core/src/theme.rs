//! Theme preference, persisted as an opaque string key-value pair

use serde::{Serialize, Deserialize};

/// Storage key for the persisted theme name
pub const THEME_STORAGE_KEY: &str = "theme";

/// Light or dark, surviving across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Stored string form
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse the stored form; anything unrecognized falls back to light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_storage_form() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::from_stored(Some(pref.as_str())), pref);
        }
    }

    #[test]
    fn test_unknown_stored_value_defaults_to_light() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
        assert_eq!(
            ThemePreference::from_stored(Some("solarized")),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
