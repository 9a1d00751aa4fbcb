//! Menu component stories for the storybook

use maud::html;

use crate::components::{Menu, MenuLine};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Menus",
        story_about(
            "Menu",
            || {
                html! {
                    (story_section("Plain", story_item("Actions", Menu::new()
                        .line(MenuLine::new("Open"))
                        .line(MenuLine::new("Duplicate"))
                        .line(MenuLine::new("Rename"))
                        .render())))
                    (story_section("Icons and shortcuts", story_item("Editor", Menu::new()
                        .line(MenuLine::new("Open").icon("📂").shortcut("⌘O"))
                        .line(MenuLine::new("Save").icon("💾").shortcut("⌘S"))
                        .divider()
                        .line(MenuLine::new("Print").icon("🖨").shortcut("⌘P"))
                        .render())))
                    (story_section("Dangerous line", story_item("With delete", Menu::new()
                        .line(MenuLine::new("Move to folder"))
                        .divider()
                        .line(MenuLine::new("Delete").icon("🗑").danger(true))
                        .render())))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Menu::new()
    .line(MenuLine::new("Open").shortcut("⌘O"))
    .divider()
    .line(MenuLine::new("Delete").danger(true))
    .render()"#,
                    )))
                }
            },
            "Dropdown menu built from lines and dividers. Lines carry an optional icon \
             and keyboard shortcut; dangerous lines render in the error color.",
        )?,
    );
    Ok(())
}
