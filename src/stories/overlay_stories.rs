//! Overlay stories: confirmation dialogs and tooltips

use maud::{html, Markup};

use crate::components::{Anchor, ConfirmDialog, Tooltip, TooltipKind};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_grid, story_item, story_section, StoryRegistry,
};

// A transformed ancestor becomes the containing block for the dialog's
// fixed-position overlay, keeping it inside the demo box.
fn overlay_demo(content: Markup) -> Markup {
    html! {
        div class="relative h-72 overflow-hidden rounded-lg border border-border transform-gpu" {
            (content)
        }
    }
}

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Overlays",
        story_about(
            "Confirm Dialog",
            || {
                html! {
                    (story_section("Default", overlay_demo(
                        ConfirmDialog::new("Publish activity?", "Students will see it immediately.")
                            .confirm_label("Publish")
                            .render(),
                    )))
                    (story_section("Dangerous", overlay_demo(
                        ConfirmDialog::new("Delete activity?", "This cannot be undone.")
                            .confirm_label("Delete")
                            .cancel_label("Keep it")
                            .dangerous(true)
                            .render(),
                    )))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"ConfirmDialog::new("Delete activity?", "This cannot be undone.")
    .confirm_label("Delete")
    .dangerous(true)
    .render()"#,
                    )))
                }
            },
            "Modal confirmation with cancel and confirm actions. The dangerous variant \
             swaps emphasis: cancel becomes the filled button and confirm turns into \
             red text.",
        )?,
    );

    registry.register(
        "Overlays",
        story_about(
            "Tooltip",
            || {
                html! {
                    (story_section("Nine anchors", story_grid(3, html! {
                        @for anchor in Anchor::all() {
                            (Tooltip::new(anchor.as_str()).anchor(anchor).render(html! {
                                span class="inline-block rounded-md border border-border bg-card px-4 py-2 text-sm" {
                                    "target"
                                }
                            }))
                        }
                    })))
                    (story_section("Kinds", html! {
                        (story_item("Plain", Tooltip::new("Saved to library")
                            .anchor(Anchor::MiddleRight)
                            .render(html! { span class="text-sm" { "hover me" } })))
                        (story_item("Error", Tooltip::new("Name is already taken")
                            .anchor(Anchor::MiddleRight)
                            .kind(TooltipKind::Error)
                            .render(html! { span class="text-sm" { "hover me" } })))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Tooltip::new("Saved to library")
    .anchor(Anchor::BottomMiddle)
    .render(html! { button { "Save" } })"#,
                    )))
                }
            },
            "Tooltip bubble anchored to one of nine points around its target: the four \
             corners, the four edge midpoints, or dead center.",
        )?,
    );

    Ok(())
}
