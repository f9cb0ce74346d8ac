//! Theme Model
//!
//! A custom theme is two full palettes, one per light/dark mode. Every palette
//! carries all [`ThemePalette::KEYS`] as `#RRGGBB` strings.

use serde::{Deserialize, Serialize};

/// Light or dark presentation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Full color palette for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    pub body_color: String,
    pub field_color: String,
    pub border_color: String,
    pub text_color: String,
    pub text_color_muted: String,
    pub text_color_accent: String,
    pub secondary_color: String,
    pub secondary_color_hover: String,
    pub accent_color: String,
    pub accent_color_hover: String,
    pub accent_color_dark: String,
    pub error_color: String,
    pub error_color_dark: String,
    pub info_color: String,
    pub info_color_dark: String,
    pub accept_color: String,
    pub accept_color_dark: String,
}

impl ThemePalette {
    /// Serialized key names, in declaration order
    pub const KEYS: [&'static str; 17] = [
        "bodyColor",
        "fieldColor",
        "borderColor",
        "textColor",
        "textColorMuted",
        "textColorAccent",
        "secondaryColor",
        "secondaryColorHover",
        "accentColor",
        "accentColorHover",
        "accentColorDark",
        "errorColor",
        "errorColorDark",
        "infoColor",
        "infoColorDark",
        "acceptColor",
        "acceptColorDark",
    ];

    /// Built-in light palette
    pub fn default_light() -> Self {
        Self::from_hex([
            "#f5f5f4", "#ffffff", "#d6d3d1", "#1c1917", "#78716c", "#b45309", "#e7e5e4",
            "#d6d3d1", "#d97706", "#b45309", "#92400e", "#dc2626", "#991b1b", "#2563eb",
            "#1e40af", "#16a34a", "#166534",
        ])
    }

    /// Built-in dark palette
    pub fn default_dark() -> Self {
        Self::from_hex([
            "#1c1917", "#292524", "#44403c", "#f5f5f4", "#a8a29e", "#fbbf24", "#44403c",
            "#57534e", "#f59e0b", "#d97706", "#b45309", "#ef4444", "#b91c1c", "#3b82f6",
            "#1d4ed8", "#22c55e", "#15803d",
        ])
    }

    fn from_hex(c: [&str; 17]) -> Self {
        Self {
            body_color: c[0].into(),
            field_color: c[1].into(),
            border_color: c[2].into(),
            text_color: c[3].into(),
            text_color_muted: c[4].into(),
            text_color_accent: c[5].into(),
            secondary_color: c[6].into(),
            secondary_color_hover: c[7].into(),
            accent_color: c[8].into(),
            accent_color_hover: c[9].into(),
            accent_color_dark: c[10].into(),
            error_color: c[11].into(),
            error_color_dark: c[12].into(),
            info_color: c[13].into(),
            info_color_dark: c[14].into(),
            accept_color: c[15].into(),
            accept_color_dark: c[16].into(),
        }
    }
}

/// Per-profile custom theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub light: ThemePalette,
    pub dark: ThemePalette,
}

impl CustomTheme {
    pub fn palette(&self, mode: ThemeMode) -> &ThemePalette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
