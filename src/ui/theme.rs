//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavours, compiled in from
//! `themes/*.toml`. Custom themes use the same TOML layout:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! field_active = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#a6e3a1"
//! ```

use crate::domain::error::{BooklistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Labels, footer, column headings.
    pub text_dim: String,

    pub border: String,

    /// Field being edited.
    pub field_active: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Current page button and the armed search marker.
    pub accent: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    ///
    /// ```
    /// use booklist::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").map(|t| t.name), Some("catppuccin-latte".into()));
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// The file uses the layout shown in the module docs. `header_bg` may be
    /// omitted; every other color is required.
    ///
    /// # Parameters
    ///
    /// * `path` - Sandbox path of the theme file, already tilde-expanded
    ///
    /// # Errors
    ///
    /// Returns [`BooklistError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| BooklistError::Theme(format!("read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| BooklistError::Theme(format!("parse {}: {e}", path.display())))
    }

    /// Monochrome palette used if the compiled-in default ever fails to parse.
    fn plain() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: color("#ffffff"),
                header_bg: None,
                selection_fg: color("#000000"),
                selection_bg: color("#d0d0d0"),
                text_normal: color("#e0e0e0"),
                text_dim: color("#808080"),
                border: color("#606060"),
                field_active: color("#ffffff"),
                match_highlight_fg: color("#000000"),
                match_highlight_bg: color("#ffff80"),
                empty_state_fg: color("#c0c0c0"),
                accent: color("#ffffff"),
            },
        }
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// ```
    /// use booklist::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold text escape.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Faint text escape.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears every color and style set before it.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name);
            assert_eq!(theme.map(|t| t.name), Some(name.to_string()));
        }
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("f5c2e7"), "\u{1b}[48;2;245;194;231m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".into();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(BooklistError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(BooklistError::Theme(_))
        ));
    }
}
