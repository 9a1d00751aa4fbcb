//! Custom element embedding stories

use maud::html;

use crate::components::Element;
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Embedding",
        story_about(
            "Custom Element",
            || {
                let player = Element::new("video-player")
                    .attr("src", "intro.mp4")
                    .attr("poster", "intro.jpg")
                    .attr("start-at", 30)
                    .attr("autoplay", true)
                    .attr("controls", true)
                    .attr("muted", false)
                    .attr("track", Option::<&str>::None);
                let player_source = player.source();

                let rating = Element::new("star-rating")
                    .attr("value", 4.5)
                    .attr("max", 5)
                    .attr("readonly", true)
                    .text("4.5 out of 5");
                let rating_source = rating.source();

                html! {
                    (story_section("Attribute map", html! {
                        (story_item("Markup", code_block(&player_source)))
                        p class="text-sm text-muted mb-4" {
                            "String and numeric values are quoted and escaped. A true flag "
                            "renders bare, while false and absent values are omitted entirely, "
                            "so " code class="font-mono" { "muted" } " and "
                            code class="font-mono" { "track" } " never reach the page."
                        }
                        (player.render())
                    }))
                    (story_section("With children", html! {
                        (story_item("Markup", code_block(&rating_source)))
                        (rating.render())
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Element::new("video-player")
    .attr("src", "intro.mp4")
    .attr("autoplay", true)
    .attr("muted", false)   // omitted from output
    .render()"#,
                    )))
                }
            },
            "Escape hatch for embedding web components the catalog does not model. \
             Attributes come from a typed map with HTML boolean semantics.",
        )?,
    );
    Ok(())
}
