//! Story registry - explicit registration and slug-based lookup
//!
//! Stories are collected into a registry by explicit `register` calls, so
//! the full catalog is a plain value that can be inspected, served, or
//! exported. There is no global registry: builders like
//! [`crate::stories::catalog`] construct one and hand it over.

use super::story::{slugify, Story};

/// A named group of stories, in registration order.
pub struct StoryGroup {
    name: String,
    stories: Vec<Story>,
}

impl StoryGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL-safe identifier derived from the group name.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }
}

/// Ordered collection of story groups.
///
/// Groups appear in first-registration order and stories within a group in
/// registration order, so the sidebar and the exported site share one
/// stable ordering. Duplicate names are allowed; lookups return the first
/// match.
#[derive(Default)]
pub struct StoryRegistry {
    groups: Vec<StoryGroup>,
}

impl StoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a story to a group, creating the group on first use.
    pub fn register(&mut self, group: impl Into<String>, story: Story) {
        let group = group.into();
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.stories.push(story),
            None => self.groups.push(StoryGroup {
                name: group,
                stories: vec![story],
            }),
        }
    }

    pub fn groups(&self) -> &[StoryGroup] {
        &self.groups
    }

    /// The stories of one group, by display name.
    pub fn stories(&self, group: &str) -> Option<&[Story]> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.stories.as_slice())
    }

    /// Look up a story by group and story display name. First match wins.
    pub fn get(&self, group: &str, name: &str) -> Option<&Story> {
        self.stories(group)?.iter().find(|s| s.name() == name)
    }

    /// Look up a story by group and story slug. First match wins.
    pub fn find(&self, group_slug: &str, story_slug: &str) -> Option<&Story> {
        self.groups
            .iter()
            .find(|g| g.slug() == group_slug)?
            .stories
            .iter()
            .find(|s| s.slug() == story_slug)
    }

    /// The first registered story, used as the landing page.
    pub fn first(&self) -> Option<(&StoryGroup, &Story)> {
        let group = self.groups.first()?;
        let story = group.stories.first()?;
        Some((group, story))
    }

    /// Iterate over every story with its group.
    pub fn iter(&self) -> impl Iterator<Item = (&StoryGroup, &Story)> {
        self.groups
            .iter()
            .flat_map(|g| g.stories.iter().map(move |s| (g, s)))
    }

    /// Total number of stories across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.stories.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
