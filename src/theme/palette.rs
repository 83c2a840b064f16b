//! Fixed light and dark color palettes.
//!
//! A [`Palette`] maps every semantic [`ColorRole`] to a concrete [`Color`] and
//! carries the status bar style that reads well on top of it. Only two
//! palettes exist, [`Palette::LIGHT`] and [`Palette::DARK`]; they are static
//! configuration and never change at runtime.
//!
//! Palettes serialize to the flat camelCase object screens consume:
//!
//! ```json
//! { "background": "#FFFFFF", "textSecondary": "#6A6F81", ..., "statusBarStyle": "dark" }
//! ```

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;
use crate::util::{parse_hex_rgb, rgb_to_ansi256};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Nearest ANSI 256-color index, for terminal rendering.
    pub fn to_ansi256(self) -> u8 {
        rgb_to_ansi256(self.to_rgb())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_rgb(s)
            .map(|(r, g, b)| Color::rgb(r, g, b))
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Semantic color roles shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Surface,
    SurfaceElevated,
    SurfaceCard,
    SurfaceHighest,
    Text,
    TextSecondary,
    TextTertiary,
    Primary,
    PrimaryMuted,
    Accent,
    Success,
    Warning,
    Danger,
    Border,
    BorderMuted,
}

impl ColorRole {
    pub const ALL: [ColorRole; 16] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::SurfaceElevated,
        ColorRole::SurfaceCard,
        ColorRole::SurfaceHighest,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::TextTertiary,
        ColorRole::Primary,
        ColorRole::PrimaryMuted,
        ColorRole::Accent,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::Border,
        ColorRole::BorderMuted,
    ];

    /// The camelCase key consumers use for this role.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceElevated => "surfaceElevated",
            ColorRole::SurfaceCard => "surfaceCard",
            ColorRole::SurfaceHighest => "surfaceHighest",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::TextTertiary => "textTertiary",
            ColorRole::Primary => "primary",
            ColorRole::PrimaryMuted => "primaryMuted",
            ColorRole::Accent => "accent",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Danger => "danger",
            ColorRole::Border => "border",
            ColorRole::BorderMuted => "borderMuted",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ColorRole::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style of the status bar content drawn over a palette's background.
///
/// Note the inversion: dark backgrounds want `Light` status bar content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBarStyle {
    Light,
    Dark,
}

impl StatusBarStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusBarStyle::Light => "light",
            StatusBarStyle::Dark => "dark",
        }
    }
}

impl fmt::Display for StatusBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete color palette for one display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // Backgrounds
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_card: Color,
    pub surface_highest: Color,
    // Text and icons
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    // Brand
    pub primary: Color,
    pub primary_muted: Color,
    pub accent: Color,
    // Semantic
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    // Chrome
    pub border: Color,
    pub border_muted: Color,

    pub status_bar_style: StatusBarStyle,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::hex(0xFFFFFF),
        surface: Color::hex(0xFFFFFF),
        surface_elevated: Color::hex(0xF8F9FB),
        surface_card: Color::hex(0xFFFFFF),
        surface_highest: Color::hex(0xF5F5F5),
        text: Color::hex(0x1B2034),
        text_secondary: Color::hex(0x6A6F81),
        text_tertiary: Color::hex(0x9CA3AF),
        primary: Color::hex(0x6B5BFF),
        primary_muted: Color::hex(0xF4F5F7),
        accent: Color::hex(0x1ECC45),
        success: Color::hex(0x22C55E),
        warning: Color::hex(0xFFCE6A),
        danger: Color::hex(0xFF6B6B),
        border: Color::hex(0xE5E7EB),
        border_muted: Color::hex(0xD7DAE0),
        status_bar_style: StatusBarStyle::Dark,
    };

    // Charcoal rather than pure black; accents are brightened a step so
    // they keep contrast against the darker surfaces.
    pub const DARK: Palette = Palette {
        background: Color::hex(0x121212),
        surface: Color::hex(0x1E1E1E),
        surface_elevated: Color::hex(0x2A2A2A),
        surface_card: Color::hex(0x262626),
        surface_highest: Color::hex(0x333333),
        text: Color::hex(0xFFFFFF),
        text_secondary: Color::hex(0xB3B3B3),
        text_tertiary: Color::hex(0x8A8A8A),
        primary: Color::hex(0x8B7AFF),
        primary_muted: Color::hex(0x2A2A2A),
        accent: Color::hex(0x34D058),
        success: Color::hex(0x34D058),
        warning: Color::hex(0xFFD666),
        danger: Color::hex(0xFF7B7B),
        border: Color::hex(0x404040),
        border_muted: Color::hex(0x333333),
        status_bar_style: StatusBarStyle::Light,
    };

    /// Returns the color assigned to `role`.
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceElevated => self.surface_elevated,
            ColorRole::SurfaceCard => self.surface_card,
            ColorRole::SurfaceHighest => self.surface_highest,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextTertiary => self.text_tertiary,
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryMuted => self.primary_muted,
            ColorRole::Accent => self.accent,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Danger => self.danger,
            ColorRole::Border => self.border,
            ColorRole::BorderMuted => self.border_muted,
        }
    }

    /// Looks a color up by its camelCase role name.
    pub fn color(&self, name: &str) -> Option<Color> {
        ColorRole::from_name(name).map(|role| self.get(role))
    }

    /// Iterates every role with its color, in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// A terminal foreground style approximating `role`.
    pub fn style(&self, role: ColorRole) -> Style {
        Style::new().color256(self.get(role).to_ansi256())
    }

    /// A terminal style filling the cell with `role` as background.
    pub fn swatch(&self, role: ColorRole) -> Style {
        Style::new().on_color256(self.get(role).to_ansi256())
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorRole::ALL.len() + 1))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), &color)?;
        }
        map.serialize_entry("statusBarStyle", &self.status_bar_style)?;
        map.end()
    }
}
