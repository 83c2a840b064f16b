//! Sources for the platform's current appearance.
//!
//! The store samples an [`AppearanceSource`] every time it resolves a theme,
//! so a platform switch between light and dark shows up on the next read
//! without any notification plumbing.

use std::cell::Cell;
use std::rc::Rc;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::preference::Appearance;

/// Read-only view of the platform appearance setting.
pub trait AppearanceSource {
    /// Current appearance, or `None` when the platform does not say.
    fn appearance(&self) -> Option<Appearance>;
}

impl<F> AppearanceSource for F
where
    F: Fn() -> Option<Appearance>,
{
    fn appearance(&self) -> Option<Appearance> {
        self()
    }
}

/// Asks the operating system via `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAppearance;

impl AppearanceSource for SystemAppearance {
    fn appearance(&self) -> Option<Appearance> {
        match detect_os_theme() {
            OsThemeMode::Dark => Some(Appearance::Dark),
            OsThemeMode::Light => Some(Appearance::Light),
        }
    }
}

/// An appearance the host sets explicitly.
///
/// Clones share the same cell, so a host can keep one handle to push platform
/// changes while the store samples through another. Also the natural stand-in
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedAppearance {
    current: Rc<Cell<Option<Appearance>>>,
}

impl FixedAppearance {
    pub fn new(appearance: Option<Appearance>) -> Self {
        Self {
            current: Rc::new(Cell::new(appearance)),
        }
    }

    pub fn set(&self, appearance: Option<Appearance>) {
        self.current.set(appearance);
    }
}

impl AppearanceSource for FixedAppearance {
    fn appearance(&self) -> Option<Appearance> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_appearance_shared_between_clones() {
        let host = FixedAppearance::new(Some(Appearance::Light));
        let sampled = host.clone();
        assert_eq!(sampled.appearance(), Some(Appearance::Light));

        host.set(Some(Appearance::Dark));
        assert_eq!(sampled.appearance(), Some(Appearance::Dark));

        host.set(None);
        assert_eq!(sampled.appearance(), None);
    }

    #[test]
    fn test_fixed_appearance_default_is_unknown() {
        assert_eq!(FixedAppearance::default().appearance(), None);
    }

    #[test]
    fn test_closure_is_a_source() {
        let source = || Some(Appearance::Dark);
        assert_eq!(source.appearance(), Some(Appearance::Dark));
    }
}
