//! Error types for preference parsing and persistence.

use thiserror::Error;

/// Errors surfaced by the theme store and its parsers.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A preference string was not one of `system`, `light` or `dark`.
    #[error("invalid theme preference '{0}' (expected system, light or dark)")]
    InvalidPreference(String),

    /// Reading or writing the durable store failed.
    ///
    /// The store logs and swallows these; they only escape through the
    /// lower-level persistence helpers.
    #[error("theme persistence failed: {0}")]
    Persistence(#[from] StorageError),
}

/// Failure of a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend cannot be reached at all (no config directory, etc.).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A color string was not a `#RRGGBB` hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}' (expected #RRGGBB)")]
pub struct ColorParseError(pub String);
