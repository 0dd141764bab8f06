//! Theme management and ANSI escape sequence generation.
//!
//! Defines the color scheme for the terminal UI, supporting built-in themes
//! and custom themes loaded from TOML files, plus utilities for converting
//! hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `default-dark`: Dark theme (default)
//! - `default-light`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#c9d1d9"
//! text_normal = "#c9d1d9"
//! text_dim = "#8b949e"
//! border = "#30363d"
//! accent = "#58a6ff"
//! badge_fg = "#0d1117"
//! badge_bg = "#58a6ff"
//! correct_fg = "#3fb950"
//! incorrect_fg = "#f85149"
//! match_highlight_fg = "#0d1117"
//! match_highlight_bg = "#d29922"
//! empty_state_fg = "#79c0ff"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#c9d1d9").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Accent color (sort indicators, active page number, progress bars).
    pub accent: String,

    /// Subject badge foreground.
    pub badge_fg: String,
    /// Subject badge background.
    pub badge_bg: String,

    /// Correct-answer indicator color.
    pub correct_fg: String,
    /// Incorrect-answer indicator color.
    pub incorrect_fg: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `default-dark`, `default-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default-dark" => include_str!("../../themes/default-dark.toml"),
            "default-light" => include_str!("../../themes/default-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content
    /// cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`default-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default-dark").expect("Built-in default-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        let dark = Theme::from_name("default-dark").expect("dark theme");
        assert_eq!(dark.name, "default-dark");

        let light = Theme::from_name("default-light").expect("light theme");
        assert_eq!(light.name, "default-light");
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn fg_escape_from_hex() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::fg("00ff00"), "\u{001b}[38;2;0;255;0m");
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#xyz"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn from_file_reads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"
name = "custom"

[colors]
header_fg = "#ffffff"
text_normal = "#ffffff"
text_dim = "#888888"
border = "#444444"
accent = "#00aaff"
badge_fg = "#000000"
badge_bg = "#00aaff"
correct_fg = "#00ff00"
incorrect_fg = "#ff0000"
match_highlight_fg = "#000000"
match_highlight_bg = "#ffff00"
empty_state_fg = "#00aaff"
"##
        )
        .expect("write");

        let theme = Theme::from_file(file.path()).expect("parse");
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.accent, "#00aaff");
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not = [valid").expect("write");

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.contains("parse"));
    }
}
