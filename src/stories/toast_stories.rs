//! Toast component stories for the storybook

use maud::html;

use crate::components::{Toast, ToastVariant};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Feedback",
        story_about(
            "Toast",
            || {
                html! {
                    (story_section("Variants", html! {
                        (story_item("Success", Toast::success("Activity published").render()))
                        (story_item("Warning", Toast::warning("Unsaved changes").render()))
                        (story_item("Error", Toast::error("Upload failed").render()))
                        (story_item("Info", Toast::info("New version available").render()))
                    }))
                    (story_section("With action", html! {
                        (story_item("Undo", Toast::info("Activity archived").action("Undo").render()))
                        (story_item("Retry", Toast::error("Upload failed").action("Retry").render()))
                    }))
                    (story_section("Dismissible", html! {
                        (story_item("Closable", Toast::new("Welcome back!", ToastVariant::Success)
                            .dismissible(true)
                            .render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Toast::error("Upload failed")
    .action("Retry")
    .dismissible(true)
    .render()"#,
                    )))
                }
            },
            "Transient status message with a variant glyph, an optional action button, \
             and an optional dismiss control.",
        )?,
    );
    Ok(())
}
