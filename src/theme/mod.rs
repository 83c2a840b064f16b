//! Theme model: preferences, palettes and resolution.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: the user's System / Light / Dark choice
//! - [`Appearance`]: what the platform reports
//! - [`Palette`]: the two fixed color palettes, keyed by [`ColorRole`]
//! - [`resolve`]: the pure function turning a preference into a [`ResolvedTheme`]
//! - [`AppearanceSource`]: where the platform appearance is sampled from
//!
//! Nothing here does I/O except [`SystemAppearance`], which queries the OS.

mod appearance;
mod palette;
mod preference;
mod resolve;

pub use appearance::{AppearanceSource, FixedAppearance, SystemAppearance};
pub use palette::{Color, ColorRole, Palette, StatusBarStyle};
pub use preference::{Appearance, ThemePreference};
pub use resolve::{resolve, ResolvedTheme};
