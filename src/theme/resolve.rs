//! Pure resolution of a preference against the platform appearance.

use serde::Serialize;

use super::palette::{Palette, StatusBarStyle};
use super::preference::{Appearance, ThemePreference};

/// The palette and flags actually applied to the UI at one moment.
///
/// Never stored; recompute it whenever the preference or the platform
/// appearance may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    #[serde(rename = "colors")]
    pub palette: &'static Palette,
    pub is_dark: bool,
    #[serde(rename = "themePreference")]
    pub preference: ThemePreference,
}

impl ResolvedTheme {
    pub fn status_bar_style(&self) -> StatusBarStyle {
        self.palette.status_bar_style
    }
}

/// Resolves `preference` into a concrete theme.
///
/// An explicit `Light` or `Dark` choice always wins. `System` follows
/// `appearance`, and falls back to the light palette when the platform does
/// not report one.
///
/// # Example
///
/// ```rust
/// use tiktrack_theme::{resolve, Appearance, Palette, ThemePreference};
///
/// let theme = resolve(ThemePreference::System, Some(Appearance::Dark));
/// assert!(theme.is_dark);
/// assert_eq!(theme.palette, &Palette::DARK);
///
/// let theme = resolve(ThemePreference::System, None);
/// assert_eq!(theme.palette, &Palette::LIGHT);
/// ```
pub fn resolve(preference: ThemePreference, appearance: Option<Appearance>) -> ResolvedTheme {
    let effective = match preference {
        ThemePreference::System => appearance,
        ThemePreference::Light => Some(Appearance::Light),
        ThemePreference::Dark => Some(Appearance::Dark),
    };

    let is_dark = effective == Some(Appearance::Dark);
    ResolvedTheme {
        palette: if is_dark { &Palette::DARK } else { &Palette::LIGHT },
        is_dark,
        preference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_preference() -> impl Strategy<Value = ThemePreference> {
        prop::sample::select(ThemePreference::ALL.to_vec())
    }

    fn any_appearance() -> impl Strategy<Value = Option<Appearance>> {
        prop::option::of(prop::sample::select(vec![Appearance::Light, Appearance::Dark]))
    }

    #[test]
    fn test_system_follows_dark_platform() {
        let theme = resolve(ThemePreference::System, Some(Appearance::Dark));
        assert!(theme.is_dark);
        assert_eq!(theme.status_bar_style(), StatusBarStyle::Light);
        assert_eq!(theme.status_bar_style().as_str(), "light");
    }

    #[test]
    fn test_explicit_light_overrides_dark_platform() {
        let theme = resolve(ThemePreference::Light, Some(Appearance::Dark));
        assert!(!theme.is_dark);
        assert_eq!(theme.palette, &Palette::LIGHT);
    }

    #[test]
    fn test_explicit_dark_overrides_light_platform() {
        let theme = resolve(ThemePreference::Dark, Some(Appearance::Light));
        assert!(theme.is_dark);
        assert_eq!(theme.palette, &Palette::DARK);
    }

    #[test]
    fn test_unknown_platform_falls_back_to_light() {
        let raw: Option<&str> = None;
        let theme = resolve(ThemePreference::System, Appearance::from_platform(raw));
        assert!(!theme.is_dark);
        assert_eq!(theme.palette, &Palette::LIGHT);

        let odd = resolve(ThemePreference::System, Appearance::from_platform(Some("sepia")));
        assert_eq!(odd.palette, &Palette::LIGHT);
    }

    #[test]
    fn test_resolved_theme_keeps_preference() {
        let theme = resolve(ThemePreference::System, Some(Appearance::Light));
        assert_eq!(theme.preference, ThemePreference::System);
    }

    #[test]
    fn test_resolved_theme_serializes_consumer_shape() {
        let value = serde_json::to_value(resolve(ThemePreference::Dark, None)).unwrap();
        assert_eq!(value["isDark"], true);
        assert_eq!(value["themePreference"], "dark");
        assert_eq!(value["colors"]["background"], "#121212");
    }

    proptest! {
        #[test]
        fn prop_dark_iff_dark_or_system_on_dark(
            preference in any_preference(),
            appearance in any_appearance(),
        ) {
            let expect_dark = preference == ThemePreference::Dark
                || (preference == ThemePreference::System && appearance == Some(Appearance::Dark));
            let theme = resolve(preference, appearance);

            prop_assert_eq!(theme.is_dark, expect_dark);
            let expected = if expect_dark { &Palette::DARK } else { &Palette::LIGHT };
            prop_assert_eq!(theme.palette, expected);
        }

        #[test]
        fn prop_resolve_is_pure(
            preference in any_preference(),
            appearance in any_appearance(),
        ) {
            prop_assert_eq!(resolve(preference, appearance), resolve(preference, appearance));
        }
    }
}
