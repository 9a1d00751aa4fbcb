//! Layout primitive stories for the storybook

use maud::html;

use crate::components::layout;
use crate::error::Result;
use crate::storybook::{code_block, story_about, story_divider, story_section, StoryRegistry};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Layout",
        story_about(
            "Primitives",
            || {
                let block = |label: &str| {
                    html! {
                        div class="rounded-md border border-border bg-card px-6 py-3 text-sm text-muted" {
                            (label)
                        }
                    }
                };
                html! {
                    (story_section("Container", layout::container(block("centered, padded content"))))
                    (story_section("Row", layout::row(html! {
                        (block("one")) (block("two")) (block("three"))
                    })))
                    (story_section("Column", layout::column(html! {
                        (block("one")) (block("two")) (block("three"))
                    })))
                    (story_section("Section and divider", html! {
                        (layout::section("A titled section", block("content")))
                        (layout::divider())
                        (layout::section("Another one", block("more content")))
                    }))
                    (story_section("Spacer", layout::row(html! {
                        (block("left")) (layout::spacer()) (block("pushed right"))
                    })))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"layout::container(layout::column(html! {
    (layout::section("Details", details_markup))
    (layout::divider())
    (layout::row(html! { (left) (layout::spacer()) (right) }))
}))"#,
                    )))
                }
            },
            "The flexbox building blocks pages are assembled from: container, row, \
             column, section, divider, and spacer.",
        )?,
    );
    Ok(())
}
