//! # tiktrack-theme - Theme preference store for the TikTok tracker client
//!
//! Every screen of the client draws with one of two fixed palettes. Which one
//! depends on a single persisted user setting (System, Light or Dark) and,
//! for System, on what the platform currently reports. This crate owns that
//! setting and the rule that turns it into colors.
//!
//! ## Concepts
//!
//! - [`ThemePreference`]: the user's choice, default [`ThemePreference::System`]
//! - [`Appearance`]: the platform's light/dark report (may be unknown)
//! - [`Palette`]: semantic color roles mapped to concrete colors
//! - [`resolve`]: pure `(preference, appearance) -> ResolvedTheme`
//! - [`ThemeStore`]: persisted, observable state with get / set / subscribe
//!
//! ## Quick start
//!
//! ```rust
//! use tiktrack_theme::{
//!     FixedAppearance, MemoryStorage, StatusBarStyle, ThemePreference, ThemeStore,
//! };
//!
//! let mut store = ThemeStore::open(MemoryStorage::new(), FixedAppearance::default());
//! store.subscribe(|theme| println!("background is now {}", theme.palette.background));
//!
//! store.set_preference(ThemePreference::Dark);
//! let theme = store.theme();
//! assert!(theme.is_dark);
//! assert_eq!(theme.status_bar_style(), StatusBarStyle::Light);
//! ```
//!
//! ## Resolution rule
//!
//! An explicit Light or Dark preference always wins. System follows the
//! platform. If the platform reports nothing usable, the light palette is
//! used.
//!
//! ## Persistence
//!
//! The preference is stored under the key [`STORAGE_KEY`] as
//! `{"themePreference":"dark"}` through any [`KeyValueStorage`]. Storage
//! failures are logged with `tracing` and never surface to the caller; the
//! in-memory value stays in effect for the session.

pub mod error;
pub mod store;
pub mod theme;
mod util;

pub use error::{ColorParseError, StorageError, ThemeError};
pub use store::{
    load_preference, save_preference, FileStorage, KeyValueStorage, MemoryStorage,
    SubscriptionId, ThemeStore, STORAGE_KEY,
};
pub use theme::{
    resolve, Appearance, AppearanceSource, Color, ColorRole, FixedAppearance, Palette,
    ResolvedTheme, StatusBarStyle, SystemAppearance, ThemePreference,
};
