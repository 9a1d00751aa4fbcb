//! Theme type definitions
//!
//! Contains the struct definitions for theme configuration:
//! - SurfaceColors, TextColors, AccentColors, UIColors
//! - ColorScheme, FontConfig, Theme

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hex_color::{hex_color_serde, HexColor};
use crate::error::{Result, VitrineError};

/// Surface (background) color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Page background (#0a0a0a)
    #[serde(with = "hex_color_serde")]
    pub background: HexColor,
    /// Card and panel background (#141414)
    #[serde(with = "hex_color_serde")]
    pub card: HexColor,
    /// Floating surfaces: menus, tooltips, dialogs (#1c1c1c)
    #[serde(with = "hex_color_serde")]
    pub popover: HexColor,
    /// Catalog sidebar background (#101010)
    #[serde(default = "default_sidebar", with = "hex_color_serde")]
    pub sidebar: HexColor,
}

fn default_sidebar() -> HexColor {
    0x101010
}

/// Text color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary text color (#fafafa)
    #[serde(with = "hex_color_serde")]
    pub foreground: HexColor,
    /// Secondary text color (#a3a3a3)
    #[serde(with = "hex_color_serde")]
    pub muted: HexColor,
    /// De-emphasized text color (#737373)
    #[serde(with = "hex_color_serde")]
    pub faint: HexColor,
    /// Text drawn on filled accent surfaces (#0a0a0a on light, #fafafa on dark fills)
    #[serde(default = "default_inverted", with = "hex_color_serde")]
    pub inverted: HexColor,
}

fn default_inverted() -> HexColor {
    0xfafafa
}

/// Accent colors used by filled and outlined controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentColors {
    /// Primary action color (#3b82f6 - blue-500)
    #[serde(with = "hex_color_serde")]
    pub blue: HexColor,
    /// Destructive action color (#ef4444 - red-500)
    #[serde(with = "hex_color_serde")]
    pub red: HexColor,
    /// Affirmative action color (#22c55e - green-500)
    #[serde(with = "hex_color_serde")]
    pub green: HexColor,
}

/// Border and status colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIColors {
    /// Border color (#262626)
    #[serde(with = "hex_color_serde")]
    pub border: HexColor,
    /// Success color (#22c55e - green-500)
    #[serde(default = "default_success_color", with = "hex_color_serde")]
    pub success: HexColor,
    /// Warning color (#f59e0b - amber-500)
    #[serde(default = "default_warning_color", with = "hex_color_serde")]
    pub warning: HexColor,
    /// Error color (#ef4444 - red-500)
    #[serde(default = "default_error_color", with = "hex_color_serde")]
    pub error: HexColor,
    /// Info color (#3b82f6 - blue-500)
    #[serde(default = "default_info_color", with = "hex_color_serde")]
    pub info: HexColor,
}

/// Default success color (green-500)
fn default_success_color() -> HexColor {
    0x22c55e
}

/// Default warning color (amber-500)
fn default_warning_color() -> HexColor {
    0xf59e0b
}

/// Default error color (red-500)
fn default_error_color() -> HexColor {
    0xef4444
}

/// Default info color (blue-500)
fn default_info_color() -> HexColor {
    0x3b82f6
}

/// Complete color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub ui: UIColors,
}

impl ColorScheme {
    /// Create a dark mode color scheme (default dark colors)
    pub fn dark_default() -> Self {
        ColorScheme {
            surface: SurfaceColors {
                background: 0x0a0a0a,
                card: 0x141414,
                popover: 0x1c1c1c,
                sidebar: 0x101010,
            },
            text: TextColors {
                foreground: 0xfafafa,
                muted: 0xa3a3a3,
                faint: 0x737373,
                inverted: 0xfafafa,
            },
            accent: AccentColors {
                blue: 0x3b82f6,  // blue-500
                red: 0xef4444,   // red-500
                green: 0x22c55e, // green-500
            },
            ui: UIColors {
                border: 0x262626,
                success: 0x22c55e,
                warning: 0xf59e0b,
                error: 0xef4444,
                info: 0x3b82f6,
            },
        }
    }

    /// Create a light mode color scheme
    pub fn light_default() -> Self {
        ColorScheme {
            surface: SurfaceColors {
                background: 0xffffff,
                card: 0xf5f5f5,
                popover: 0xfafafa,
                sidebar: 0xf0f0f0,
            },
            text: TextColors {
                foreground: 0x0a0a0a,
                muted: 0x525252,
                faint: 0x737373,
                inverted: 0xfafafa,
            },
            accent: AccentColors {
                blue: 0x2563eb,  // blue-600 (darker for light mode)
                red: 0xdc2626,   // red-600
                green: 0x16a34a, // green-600
            },
            ui: UIColors {
                border: 0xd4d4d4,
                success: 0x16a34a,
                warning: 0xd97706,
                error: 0xdc2626,
                info: 0x2563eb,
            },
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::dark_default()
    }
}

/// Font configuration for catalog pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// UI font stack (default: system sans)
    #[serde(default = "default_sans_stack")]
    pub sans: String,
    /// Monospace font stack for code samples (default: JetBrains Mono)
    #[serde(default = "default_mono_stack")]
    pub mono: String,
}

fn default_sans_stack() -> String {
    "system-ui, -apple-system, 'Segoe UI', sans-serif".to_string()
}

fn default_mono_stack() -> String {
    "'JetBrains Mono', 'SF Mono', ui-monospace, monospace".to_string()
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            sans: default_sans_stack(),
            mono: default_mono_stack(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ColorScheme,
    /// Font configuration for catalog pages
    #[serde(default)]
    pub fonts: Option<FontConfig>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: ColorScheme::default(),
            fonts: Some(FontConfig::default()),
        }
    }
}

impl Theme {
    /// Create a light mode theme
    pub fn light() -> Self {
        Theme {
            colors: ColorScheme::light_default(),
            fonts: Some(FontConfig::default()),
        }
    }

    /// Get font configuration
    /// Returns the configured fonts or sensible defaults
    pub fn get_fonts(&self) -> FontConfig {
        self.fonts.clone().unwrap_or_default()
    }

    /// Load a theme from a JSON file.
    ///
    /// Colors are CSS hex strings. Example theme.json structure:
    /// ```json
    /// {
    ///   "colors": {
    ///     "surface": {
    ///       "background": "#0a0a0a",
    ///       "card": "#141414",
    ///       "popover": "#1c1c1c"
    ///     },
    ///     "text": {
    ///       "foreground": "#fafafa",
    ///       "muted": "#a3a3a3",
    ///       "faint": "#737373"
    ///     },
    ///     "accent": { "blue": "#3b82f6", "red": "#ef4444", "green": "#22c55e" },
    ///     "ui": { "border": "#262626" }
    ///   }
    /// }
    /// ```
    ///
    /// Unlike a missing optional config, an explicitly named theme file that
    /// cannot be read or parsed is a hard error.
    pub fn load(path: &Path) -> Result<Theme> {
        let contents = std::fs::read_to_string(path).map_err(|source| VitrineError::ThemeLoad {
            path: path.display().to_string(),
            source,
        })?;
        let theme: Theme =
            serde_json::from_str(&contents).map_err(|source| VitrineError::ThemeParse {
                path: path.display().to_string(),
                source,
            })?;
        debug!(path = %path.display(), "Loaded theme");
        Ok(theme)
    }
}
