//! Asset card stories for the storybook

use maud::html;

use crate::components::{AssetCard, AssetKind};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_row, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Cards",
        story_about(
            "Asset Card",
            || {
                html! {
                    (story_section("Kinds", story_row(html! {
                        (AssetCard::new("Counting to Ten")
                            .kind(AssetKind::Activity)
                            .plays(1280)
                            .likes(64)
                            .footer("Ages 4-6")
                            .render())
                        (AssetCard::new("Printable Flashcards")
                            .kind(AssetKind::Resource)
                            .likes(12)
                            .footer("PDF, 2 pages")
                            .render())
                        (AssetCard::new("Hebrew Basics")
                            .kind(AssetKind::Course)
                            .plays(430)
                            .likes(88)
                            .footer("8 units")
                            .render())
                    })))
                    (story_section("With cover image", story_row(html! {
                        (AssetCard::new("Shapes and Colors")
                            .image_url("https://picsum.photos/seed/shapes/320/180")
                            .plays(77)
                            .render())
                    })))
                    (story_section("Dense", story_row(html! {
                        (AssetCard::new("Counting to Ten").dense(true).plays(1280).render())
                        (AssetCard::new("Shapes and Colors").dense(true).render())
                        (AssetCard::new("Hebrew Basics").kind(AssetKind::Course).dense(true).render())
                    })))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"AssetCard::new("Counting to Ten")
    .kind(AssetKind::Activity)
    .plays(1280)
    .likes(64)
    .footer("Ages 4-6")
    .render()"#,
                    )))
                }
            },
            "Preview card for a piece of content: cover area, title, play and like \
             counters, and a footer line. The dense form fits browse grids.",
        )?,
    );
    Ok(())
}
