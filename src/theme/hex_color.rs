//! Hex color type and serde support
//!
//! Colors are stored as packed `0xRRGGBB` integers and serialized as CSS
//! hex strings (`"#1e1e1e"`) so theme files read like stylesheets.

/// Packed RGB color, `0xRRGGBB`
pub type HexColor = u32;

/// Format a color as a CSS hex string (`#1e1e1e`)
pub fn css(color: HexColor) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}

/// Parse a CSS hex string (`#1e1e1e` or `1e1e1e`) into a packed color.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse(input: &str) -> Option<HexColor> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Serde adapter: serialize `HexColor` as `"#rrggbb"`, deserialize from the same.
///
/// Use with `#[serde(with = "hex_color_serde")]` on color fields.
pub mod hex_color_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::HexColor;

    pub fn serialize<S>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::css(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HexColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).ok_or_else(|| {
            de::Error::custom(format!("invalid hex color '{}', expected #rrggbb", raw))
        })
    }
}
