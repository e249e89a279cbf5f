//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the binary, `dark` (the default) and `light`.
//! Custom themes are loaded from TOML files with the same shape.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e1cf"
//! header_bg = "#1f2430"        # optional
//! text_normal = "#cbccc6"
//! text_dim = "#707a8c"
//! border = "#3d4452"
//! selection_fg = "#1f2430"
//! selection_bg = "#ffcc66"
//! focus_fg = "#5ccfe6"
//! button_fg = "#bae67e"
//! disabled_fg = "#4d5566"
//! empty_state_fg = "#73d0ff"
//! loading_fg = "#ffa759"
//! ```
//!
//! # Example
//!
//! ```rust
//! use gallerist::ui::theme::Theme;
//!
//! let theme = Theme::from_name("light").unwrap();
//! print!("{}title{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! ```

use crate::domain::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Color scheme for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colors for every UI element, as hex strings (`#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text: authors, URLs, the footer.
    pub text_dim: String,
    pub border: String,

    /// Selected card.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Marker on the card focus returned to.
    pub focus_fg: String,

    /// Enabled navigation buttons.
    pub button_fg: String,
    /// Disabled navigation buttons.
    pub disabled_fg: String,

    pub empty_state_fg: String,
    pub loading_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`dark` or `light`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => include_str!("../../themes/dark.toml"),
            "light" => include_str!("../../themes/light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GalleryError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| GalleryError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the configured theme: a file wins over a name, and an unknown
    /// name falls back to the default theme with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error only for an unreadable or invalid theme file.
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file {
            return Self::from_file(file);
        }
        let Some(name) = name else {
            return Ok(Self::default());
        };
        Ok(Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using {DEFAULT_THEME}");
            Self::default()
        }))
    }

    /// Parses `#rrggbb`, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Plain palette used if the bundled default cannot be parsed.
    fn fallback() -> Self {
        let white = "#ffffff".to_string();
        let grey = "#808080".to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                text_normal: white.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                selection_fg: "#000000".to_string(),
                selection_bg: white.clone(),
                focus_fg: white.clone(),
                button_fg: white.clone(),
                disabled_fg: grey,
                empty_state_fg: white.clone(),
                loading_fg: white,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["dark", "light"] {
            let theme = Theme::from_name(name).expect("built-in theme parses");
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn light_theme_has_no_header_background() {
        let light = Theme::from_name("light").expect("parses");
        assert!(light.colors.header_bg.is_none());
    }

    #[test]
    fn resolve_prefers_file_over_name() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(include_str!("../../themes/light.toml").replace("\"light\"", "\"custom\"").as_bytes())
            .expect("write theme");

        let theme = Theme::resolve(Some("dark"), Some(file.path())).expect("resolves");
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn resolve_falls_back_on_unknown_name() {
        let theme = Theme::resolve(Some("nope"), None).expect("resolves");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn invalid_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"name = 3").expect("write");
        assert!(matches!(Theme::from_file(file.path()), Err(GalleryError::Theme(_))));
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("bad"), "\u{1b}[48;2;255;255;255m");
    }
}
