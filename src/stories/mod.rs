//! Story definitions for the component catalog
//!
//! Each submodule registers the stories for one group of components.
//! Registration order here is display order in the sidebar.

mod badge_stories;
mod button_stories;
mod card_stories;
mod design_token_stories;
mod element_stories;
mod form_field_stories;
mod layout_stories;
mod menu_stories;
mod overlay_stories;
mod page_stories;
mod toast_stories;

use crate::error::Result;
use crate::storybook::StoryRegistry;

/// Builds the registry holding every story in the catalog.
pub fn catalog() -> Result<StoryRegistry> {
    let mut registry = StoryRegistry::new();

    design_token_stories::register(&mut registry)?;
    button_stories::register(&mut registry)?;
    badge_stories::register(&mut registry)?;
    card_stories::register(&mut registry)?;
    form_field_stories::register(&mut registry)?;
    menu_stories::register(&mut registry)?;
    overlay_stories::register(&mut registry)?;
    toast_stories::register(&mut registry)?;
    layout_stories::register(&mut registry)?;
    page_stories::register(&mut registry)?;
    element_stories::register(&mut registry)?;

    Ok(registry)
}

#[cfg(test)]
#[path = "stories_tests.rs"]
mod tests;
