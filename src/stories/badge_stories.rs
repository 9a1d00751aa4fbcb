//! Badge and counter stories for the storybook

use maud::html;

use crate::components::{badge, count_badge, BadgeTone};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_row, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Indicators",
        story_about(
            "Badges",
            || {
                html! {
                    (story_section("Tones", story_row(html! {
                        (badge("Draft", BadgeTone::Neutral))
                        (badge("Published", BadgeTone::Success))
                        (badge("Beta", BadgeTone::Info))
                        (badge("Deprecated", BadgeTone::Warning))
                        (badge("Removed", BadgeTone::Danger))
                    })))
                    (story_section("Counters", html! {
                        (story_item("Few", count_badge(3)))
                        (story_item("Dozens", count_badge(42)))
                        (story_item("Capped", count_badge(250)))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"badge("Published", BadgeTone::Success)
count_badge(42)"#,
                    )))
                }
            },
            "Small labels for status and counts. Counters cap their display at 99+.",
        )?,
    );
    Ok(())
}
