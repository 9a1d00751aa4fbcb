//! Design token stories showing the theme palette

use maud::{html, Markup};

use crate::error::Result;
use crate::storybook::{story_about, story_item, story_row, story_section, StoryRegistry};
use crate::theme::{hex_color, HexColor, Theme};

fn swatch(label: &str, value: HexColor) -> Markup {
    html! {
        div class="flex flex-col items-center gap-1" {
            div class="w-16 h-16 rounded-md border border-border"
                style={ "background-color: " (hex_color::css(value)) } {}
            span class="text-xs text-muted" { (label) }
            code class="font-mono text-xs text-faint" { (hex_color::css(value)) }
        }
    }
}

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Foundation",
        story_about(
            "Design Tokens",
            || {
                let theme = Theme::default();
                let c = &theme.colors;
                html! {
                    (story_section("Surfaces", story_row(html! {
                        (swatch("background", c.surface.background))
                        (swatch("card", c.surface.card))
                        (swatch("popover", c.surface.popover))
                        (swatch("sidebar", c.surface.sidebar))
                    })))
                    (story_section("Text", story_row(html! {
                        (swatch("foreground", c.text.foreground))
                        (swatch("muted", c.text.muted))
                        (swatch("faint", c.text.faint))
                        (swatch("inverted", c.text.inverted))
                    })))
                    (story_section("Accents", story_row(html! {
                        (swatch("blue", c.accent.blue))
                        (swatch("red", c.accent.red))
                        (swatch("green", c.accent.green))
                    })))
                    (story_section("UI", story_row(html! {
                        (swatch("border", c.ui.border))
                        (swatch("success", c.ui.success))
                        (swatch("warning", c.ui.warning))
                        (swatch("error", c.ui.error))
                        (swatch("info", c.ui.info))
                    })))
                    (story_section("Typography", html! {
                        (story_item("Sans", html! {
                            p class="font-sans" { "The quick brown fox jumps over the lazy dog" }
                        }))
                        (story_item("Mono", html! {
                            p class="font-mono" { "let total = plays + likes;" }
                        }))
                    }))
                }
            },
            "Every color and font token the theme exposes, shown with its default dark value. \
             Components never hardcode colors; they reference these tokens by name.",
        )?,
    );
    Ok(())
}
