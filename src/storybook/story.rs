//! Story type and constructors
//!
//! A story is a named, stateless preview of a component: a render function
//! that produces markup on demand, plus an optional description shown in the
//! catalog. Stories carry no app state, so rendering the same story twice
//! yields the same markup.

use std::fmt;

use maud::Markup;

use crate::error::{Result, VitrineError};

/// Render function for a story. Must be callable from server worker threads.
pub type RenderFn = Box<dyn Fn() -> Markup + Send + Sync>;

/// A registered component preview.
pub struct Story {
    name: String,
    description: Option<String>,
    render: RenderFn,
}

impl Story {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// URL-safe identifier derived from the display name.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Render the story preview.
    pub fn render(&self) -> Markup {
        (self.render)()
    }
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Create a story from a name and a render function.
pub fn story<F>(name: impl Into<String>, render: F) -> Story
where
    F: Fn() -> Markup + Send + Sync + 'static,
{
    Story {
        name: name.into(),
        description: None,
        render: Box::new(render),
    }
}

/// Create a story with a description shown alongside the preview.
///
/// The description is required: an empty or whitespace-only description is
/// rejected with [`VitrineError::MissingDescription`]. Use [`story`] for
/// previews that need no prose.
pub fn story_about<F>(
    name: impl Into<String>,
    render: F,
    description: impl Into<String>,
) -> Result<Story>
where
    F: Fn() -> Markup + Send + Sync + 'static,
{
    let name = name.into();
    let description = description.into();
    if description.trim().is_empty() {
        return Err(VitrineError::MissingDescription { story: name });
    }
    Ok(Story {
        name,
        description: Some(description),
        render: Box::new(render),
    })
}

/// Lowercase a display name into a URL segment.
///
/// ASCII letters and digits are kept, every other run of characters
/// collapses to a single `-`, and leading/trailing dashes are trimmed:
/// `"Primary Button"` becomes `"primary-button"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
#[path = "story_tests.rs"]
mod tests;
