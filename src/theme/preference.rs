//! The user's theme choice and the platform's reported appearance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Theme mode chosen by the user on the settings screen.
///
/// `System` defers to whatever the platform reports; `Light` and `Dark`
/// override it. Serialized in lowercase (`"system"`, `"light"`, `"dark"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Every preference, in the order the settings screen lists them.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::System,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Short description shown next to the option in the settings list.
    pub fn description(self) -> &'static str {
        match self {
            ThemePreference::System => "Follow device setting",
            ThemePreference::Light => "Always use light theme",
            ThemePreference::Dark => "Always use dark theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Parses `system`, `light` or `dark`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ThemePreference::ALL
            .into_iter()
            .find(|pref| pref.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ThemeError::InvalidPreference(s.to_string()))
    }
}

/// Appearance reported by the operating system.
///
/// An unknown or unsupported report is modelled as `Option<Appearance>::None`
/// by the callers rather than as a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Interprets a raw platform color-scheme value.
    ///
    /// Only `"light"` and `"dark"` are recognized; anything else, including
    /// no value at all, is unknown.
    ///
    /// ```rust
    /// use tiktrack_theme::Appearance;
    ///
    /// assert_eq!(Appearance::from_platform(Some("dark")), Some(Appearance::Dark));
    /// assert_eq!(Appearance::from_platform(Some("no-preference")), None);
    /// assert_eq!(Appearance::from_platform(None), None);
    /// ```
    pub fn from_platform(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "light" => Some(Appearance::Light),
            "dark" => Some(Appearance::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn test_preference_parse_known_values() {
        assert_eq!("system".parse::<ThemePreference>().unwrap(), ThemePreference::System);
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!(" DARK ".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
    }

    #[test]
    fn test_preference_parse_rejects_unknown() {
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPreference(ref v) if v == "sepia"));
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_preference_serde_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(back, ThemePreference::System);
    }

    #[test]
    fn test_preference_display_matches_as_str() {
        for pref in ThemePreference::ALL {
            assert_eq!(pref.to_string(), pref.as_str());
        }
    }

    #[test]
    fn test_appearance_from_platform_is_strict() {
        assert_eq!(Appearance::from_platform(Some("light")), Some(Appearance::Light));
        assert_eq!(Appearance::from_platform(Some("Dark")), None);
        assert_eq!(Appearance::from_platform(Some("")), None);
    }
}
