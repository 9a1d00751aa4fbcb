//! Theme system for catalog pages
//!
//! A theme is a JSON-configurable color palette plus font stacks. At render
//! time it is emitted as a Tailwind v4 `@theme` block, so components style
//! themselves with semantic utilities (`bg-background`, `text-muted`,
//! `border-border`) and recolor with the theme.

mod css;
pub mod hex_color;
mod types;

pub use css::{tailwind_theme, TAILWIND_BROWSER_SRC};
pub use hex_color::{hex_color_serde, HexColor};
pub use types::{
    AccentColors, ColorScheme, FontConfig, SurfaceColors, TextColors, Theme, UIColors,
};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
