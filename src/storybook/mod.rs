//! Storybook - component preview system for the vitrine catalog
//!
//! Everything needed to define, register, and publish stories: the [`Story`]
//! type and its constructors, the [`StoryRegistry`], attribute-map helpers
//! for custom-element embeds, the live preview server, and the static site
//! export.
//!
//! # Usage
//!
//! ```ignore
//! use maud::html;
//! use vitrine::storybook::{story, story_about, StoryRegistry};
//!
//! let mut registry = StoryRegistry::new();
//! registry.register("Buttons", story("Rectangle", || html! {
//!     button { "Go" }
//! }));
//! registry.register("Buttons", story_about(
//!     "Icon",
//!     || html! { button { "✕" } },
//!     "Compact icon-only buttons.",
//! )?);
//! ```

mod attrs;
mod layout;
mod registry;
mod server;
mod site;
mod story;

pub use attrs::{args_to_attrs, escape_attr, AttrValue, Attrs};
pub use layout::{
    code_block, story_divider, story_grid, story_item, story_page, story_row, story_section,
    story_url,
};
#[allow(unused_imports)]
pub use layout::{not_found_page, shell, sidebar, welcome_page};
pub use registry::{StoryGroup, StoryRegistry};
pub use server::{serve, AppContext};
pub use site::build_site;
pub use story::{slugify, story, story_about, RenderFn, Story};
