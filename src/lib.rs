//! Vitrine - a themed web component catalog with a story previewer
//!
//! Components render [`maud::Markup`] styled with semantic Tailwind tokens
//! drawn from a JSON-configurable theme. Stories describe each component's
//! variants and register into a [`storybook::StoryRegistry`], which backs
//! both the live preview server and the static site export.

pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod storybook;
pub mod theme;

pub use error::{Result, VitrineError};
