//! Theme state
//!
//! Holds the current light/dark mode and the focused profile's custom
//! palettes. Profile imports apply or clear the custom theme through here.

use shared::models::{CustomTheme, ThemeMode, ThemePalette};

#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    mode: ThemeMode,
    custom: Option<CustomTheme>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode, custom: None }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn custom(&self) -> Option<&CustomTheme> {
        self.custom.as_ref()
    }

    /// Use a profile's custom palettes
    pub fn set_profile_custom_theme(&mut self, theme: CustomTheme) {
        tracing::debug!("Applying profile custom theme");
        self.custom = Some(theme);
    }

    /// Back to the built-in palettes
    pub fn reset_to_default_theme(&mut self) {
        tracing::debug!("Resetting to default theme");
        self.custom = None;
    }

    /// Apply whatever theme a profile carries
    pub fn apply_profile(&mut self, theme: Option<&CustomTheme>) {
        match theme {
            Some(t) => self.set_profile_custom_theme(t.clone()),
            None => self.reset_to_default_theme(),
        }
    }

    /// Palette in effect for the current mode
    pub fn active_palette(&self) -> ThemePalette {
        match (&self.custom, self.mode) {
            (Some(custom), mode) => custom.palette(mode).clone(),
            (None, ThemeMode::Light) => ThemePalette::default_light(),
            (None, ThemeMode::Dark) => ThemePalette::default_dark(),
        }
    }
}
