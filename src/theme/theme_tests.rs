use super::*;

use std::io::Write;

#[test]
fn test_default_theme() {
    let theme = Theme::default();
    assert_eq!(theme.colors.surface.background, 0x0a0a0a);
    assert_eq!(theme.colors.text.foreground, 0xfafafa);
    assert_eq!(theme.colors.accent.blue, 0x3b82f6);
    assert_eq!(theme.colors.ui.border, 0x262626);
}

#[test]
fn test_dark_default() {
    let scheme = ColorScheme::dark_default();
    assert_eq!(scheme.surface.card, 0x141414);
    assert_eq!(scheme.text.muted, 0xa3a3a3);
    assert_eq!(scheme.ui.warning, 0xf59e0b);
}

#[test]
fn test_light_default() {
    let scheme = ColorScheme::light_default();
    assert_eq!(scheme.surface.background, 0xffffff);
    assert_eq!(scheme.text.foreground, 0x0a0a0a);
    assert_eq!(scheme.ui.border, 0xd4d4d4);
}

#[test]
fn test_hex_color_parse() {
    assert_eq!(hex_color::parse("#1e1e1e"), Some(0x1e1e1e));
    assert_eq!(hex_color::parse("1e1e1e"), Some(0x1e1e1e));
    assert_eq!(hex_color::parse("#FAFAFA"), Some(0xfafafa));
    assert_eq!(hex_color::parse("#fff"), None);
    assert_eq!(hex_color::parse("#1e1e1e1e"), None);
    assert_eq!(hex_color::parse("#+1e1e1"), None);
    assert_eq!(hex_color::parse("not a color"), None);
}

#[test]
fn test_hex_color_css() {
    assert_eq!(hex_color::css(0x1e1e1e), "#1e1e1e");
    assert_eq!(hex_color::css(0x000000), "#000000");
    assert_eq!(hex_color::css(0xfbbf24), "#fbbf24");
}

#[test]
fn test_theme_serializes_as_hex_strings() {
    let theme = Theme::default();
    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(json["colors"]["surface"]["background"], "#0a0a0a");
    assert_eq!(json["colors"]["accent"]["red"], "#ef4444");
}

#[test]
fn test_theme_serialization_roundtrip() {
    let theme = Theme {
        colors: ColorScheme::light_default(),
        fonts: Some(FontConfig::default()),
    };
    let json = serde_json::to_string(&theme).unwrap();
    let deserialized: Theme = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.colors.surface.background, 0xffffff);
    assert_eq!(deserialized.colors.text.foreground, 0x0a0a0a);
}

#[test]
fn test_partial_theme_uses_field_defaults() {
    // sidebar, inverted, and all status colors are optional in theme files
    let json = r##"{
        "colors": {
            "surface": { "background": "#111111", "card": "#222222", "popover": "#333333" },
            "text": { "foreground": "#eeeeee", "muted": "#aaaaaa", "faint": "#888888" },
            "accent": { "blue": "#0000ff", "red": "#ff0000", "green": "#00ff00" },
            "ui": { "border": "#444444" }
        }
    }"##;
    let theme: Theme = serde_json::from_str(json).unwrap();
    assert_eq!(theme.colors.surface.background, 0x111111);
    assert_eq!(theme.colors.surface.sidebar, 0x101010);
    assert_eq!(theme.colors.ui.success, 0x22c55e);
    assert_eq!(theme.colors.ui.error, 0xef4444);
    assert!(theme.fonts.is_none());
    assert_eq!(theme.get_fonts().mono, FontConfig::default().mono);
}

#[test]
fn test_invalid_hex_string_rejected() {
    let json = r##"{
        "colors": {
            "surface": { "background": "#nothex", "card": "#222222", "popover": "#333333" },
            "text": { "foreground": "#eeeeee", "muted": "#aaaaaa", "faint": "#888888" },
            "accent": { "blue": "#0000ff", "red": "#ff0000", "green": "#00ff00" },
            "ui": { "border": "#444444" }
        }
    }"##;
    let result: std::result::Result<Theme, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_load_theme_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "{}",
        serde_json::to_string(&Theme {
            colors: ColorScheme::light_default(),
            fonts: None,
        })
        .unwrap()
    )
    .unwrap();

    let theme = Theme::load(&path).unwrap();
    assert_eq!(theme.colors.surface.background, 0xffffff);
}

#[test]
fn test_load_theme_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Theme::load(&dir.path().join("nope.json"));
    assert!(matches!(
        result,
        Err(crate::error::VitrineError::ThemeLoad { .. })
    ));
}

#[test]
fn test_load_theme_malformed_json_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let result = Theme::load(&path);
    assert!(matches!(
        result,
        Err(crate::error::VitrineError::ThemeParse { .. })
    ));
}

#[test]
fn test_tailwind_theme_emits_tokens() {
    let block = tailwind_theme(&Theme::default());
    assert!(block.starts_with("@theme {"));
    assert!(block.contains("--color-background: #0a0a0a;"));
    assert!(block.contains("--color-foreground: #fafafa;"));
    assert!(block.contains("--color-blue: #3b82f6;"));
    assert!(block.contains("--color-border: #262626;"));
    assert!(block.contains("--font-mono:"));
    assert!(block.trim_end().ends_with('}'));
}

#[test]
fn test_tailwind_theme_tracks_palette() {
    let light = tailwind_theme(&Theme::light());
    assert!(light.contains("--color-background: #ffffff;"));
    assert!(light.contains("--color-foreground: #0a0a0a;"));
}
