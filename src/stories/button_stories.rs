//! Button component stories for the storybook

use maud::html;

use crate::components::{Button, ButtonColor, ButtonKind, ButtonSize, IconButton};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_row, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Buttons",
        story_about(
            "Rectangle",
            || {
                html! {
                    (story_section("Colors", story_row(html! {
                        (Button::new("Blue").color(ButtonColor::Blue).render())
                        (Button::new("Red").color(ButtonColor::Red).render())
                        (Button::new("Green").color(ButtonColor::Green).render())
                    })))
                    (story_section("Kinds", story_row(html! {
                        (Button::new("Filled").kind(ButtonKind::Filled).render())
                        (Button::new("Outline").kind(ButtonKind::Outline).render())
                        (Button::new("Text").kind(ButtonKind::Text).render())
                    })))
                    (story_section("Sizes", story_row(html! {
                        (Button::new("Small").size(ButtonSize::Small).render())
                        (Button::new("Medium").size(ButtonSize::Medium).render())
                        (Button::new("Large").size(ButtonSize::Large).render())
                    })))
                    (story_section("States", html! {
                        (story_item("Normal", Button::new("Submit").render()))
                        (story_item("Disabled", Button::new("Submit").disabled(true).render()))
                        (story_item("Link", Button::new("Docs").href("https://example.com").kind(ButtonKind::Outline).render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Button::new("Save")
    .color(ButtonColor::Green)
    .kind(ButtonKind::Filled)
    .size(ButtonSize::Medium)
    .render()"#,
                    )))
                }
            },
            "Rectangle buttons come in three colors (blue, red, green) crossed with three \
             kinds (filled, outline, text). Filled carries the strongest emphasis.",
        )?,
    );

    registry.register(
        "Buttons",
        story_about(
            "Icon",
            || {
                html! {
                    (story_section("Glyphs", story_row(html! {
                        (IconButton::new("✕", "Close").render())
                        (IconButton::new("＋", "Add").color(ButtonColor::Green).render())
                        (IconButton::new("🗑", "Delete").color(ButtonColor::Red).render())
                    })))
                    (story_section("Sizes", story_row(html! {
                        (IconButton::new("✕", "Close").size(ButtonSize::Small).render())
                        (IconButton::new("✕", "Close").size(ButtonSize::Medium).render())
                        (IconButton::new("✕", "Close").size(ButtonSize::Large).render())
                    })))
                    (story_section("States", html! {
                        (story_item("Normal", IconButton::new("✕", "Close").render()))
                        (story_item("Disabled", IconButton::new("✕", "Close").disabled(true).render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"IconButton::new("✕", "Close")
    .color(ButtonColor::Red)
    .render()"#,
                    )))
                }
            },
            "Compact square buttons holding a single glyph. The label is exposed to \
             assistive tech through aria-label.",
        )?,
    );

    Ok(())
}
