//! Startup settings for Plainpad
//!
//! This module defines the `Settings` struct that shapes the window the
//! notepad opens in. Document display settings (font size, family and
//! color) are not part of it: they always start from the session defaults.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the egui visuals for this theme.
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Initial window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Whether the window starts maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Startup settings.
///
/// Every field has a default so a partial JSON file is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme
    pub theme: Theme,
    /// Initial window size
    pub window_size: WindowSize,
    /// Wrap long lines in the text area
    pub word_wrap: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_size: WindowSize::default(),
            word_wrap: true,
        }
    }
}

impl Settings {
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// The config file is hand-edited, so anything may be in it.
    pub fn sanitize(&mut self) {
        self.window_size.width = sanitize_dimension(
            self.window_size.width,
            WindowSize::default().width,
        );
        self.window_size.height = sanitize_dimension(
            self.window_size.height,
            WindowSize::default().height,
        );
    }

    /// Deserialize settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

/// Clamp a window dimension, falling back to `default` for NaN.
fn sanitize_dimension(value: f32, default: f32) -> f32 {
    if value.is_nan() {
        return default;
    }
    value.clamp(Settings::MIN_WINDOW_SIZE, Settings::MAX_WINDOW_SIZE)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.window_size.width, 800.0);
        assert_eq!(settings.window_size.height, 600.0);
        assert!(!settings.window_size.maximized);
        assert!(settings.word_wrap);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_sanitized(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.window_size, WindowSize::default());
        assert!(settings.word_wrap);
    }

    #[test]
    fn test_window_size_is_clamped() {
        let json = r#"{"window_size": {"width": 50.0, "height": 99999.0}}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_nan_dimension_falls_back_to_default() {
        let mut settings = Settings::default();
        settings.window_size.width = f32::NAN;
        settings.sanitize();
        assert_eq!(settings.window_size.width, 800.0);
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        assert!(Settings::from_json_sanitized(r#"{"theme": "neon"}"#).is_err());
    }

    #[test]
    fn test_theme_visuals() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
    }
}
