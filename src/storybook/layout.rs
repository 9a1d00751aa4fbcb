//! Shared chrome for the story browser: page scaffolding, the sidebar,
//! and the small layout helpers stories compose their content from.

use maud::{html, Markup};

use crate::components::layout::base_document;
use crate::theme::Theme;

use super::registry::StoryRegistry;
use super::story::Story;

/// Canonical URL for a story page, shared by the live server and the
/// static export.
pub fn story_url(group_slug: &str, story_slug: &str) -> String {
    format!("/stories/{}/{}/", group_slug, story_slug)
}

/// A story rendered with its title and optional description above the body.
pub fn story_page(story: &Story) -> Markup {
    html! {
        h1 class="text-2xl font-bold mb-2 pb-2 border-b border-border" { (story.name()) }
        @if let Some(description) = story.description() {
            p class="text-sm text-muted mb-6" { (description) }
        }
        (story.render())
    }
}

/// Section with title
pub fn story_section(title: &str, content: Markup) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-sm font-semibold uppercase tracking-wider text-faint mb-3" { (title) }
            (content)
        }
    }
}

/// Horizontal row of variants
pub fn story_row(content: Markup) -> Markup {
    html! {
        div class="flex flex-wrap items-center gap-4 mb-4" { (content) }
    }
}

/// Showcase grid, `columns` cells wide
pub fn story_grid(columns: u32, content: Markup) -> Markup {
    html! {
        div class={ "grid w-fit items-center gap-10 p-6 grid-cols-" (columns) } { (content) }
    }
}

/// Item row with label and element
pub fn story_item(label: &str, content: Markup) -> Markup {
    html! {
        div class="flex items-center gap-4 mb-3" {
            span class="w-32 shrink-0 text-sm text-faint" { (label) }
            (content)
        }
    }
}

/// Code block for usage examples
pub fn code_block(code: &str) -> Markup {
    html! {
        pre class="bg-card border border-border rounded-md p-3 overflow-x-auto mb-4" {
            code class="font-mono text-sm text-muted" { (code) }
        }
    }
}

/// Horizontal divider
pub fn story_divider() -> Markup {
    html! {
        hr class="border-border my-6";
    }
}

/// Navigation sidebar listing every registered group and story.
///
/// `active` carries the `(group_slug, story_slug)` of the page being
/// viewed so its link can be highlighted.
pub fn sidebar(site_title: &str, registry: &StoryRegistry, active: Option<(&str, &str)>) -> Markup {
    html! {
        aside class="w-64 shrink-0 bg-sidebar border-r border-border min-h-screen p-4" {
            a href="/" class="block text-lg font-bold mb-2" { (site_title) }
            @for group in registry.groups() {
                p class="mt-4 mb-1 px-2 text-xs font-semibold uppercase tracking-wider text-faint" {
                    (group.name())
                }
                ul {
                    @for story in group.stories() {
                        @let is_active = active
                            == Some((group.slug().as_str(), story.slug().as_str()));
                        li {
                            a href=(story_url(&group.slug(), &story.slug()))
                                class={
                                    "block px-2 py-1 rounded text-sm "
                                    @if is_active { "bg-blue/10 text-blue font-medium" }
                                    @else { "text-muted hover:text-foreground hover:bg-card" }
                                } {
                                (story.name())
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Full catalog page: themed document with the sidebar on the left and
/// `content` in the main column.
pub fn shell(
    head_title: &str,
    site_title: &str,
    theme: &Theme,
    registry: &StoryRegistry,
    active: Option<(&str, &str)>,
    content: Markup,
) -> Markup {
    base_document(
        head_title,
        theme,
        html! {
            div class="flex" {
                (sidebar(site_title, registry, active))
                main class="flex-1 min-w-0 p-8" { (content) }
            }
        },
    )
}

/// Landing page shown when no story is selected.
pub fn welcome_page(registry: &StoryRegistry) -> Markup {
    html! {
        h1 class="text-2xl font-bold mb-2 pb-2 border-b border-border" { "Welcome" }
        p class="text-sm text-muted mb-6" {
            (registry.len()) " stories in " (registry.groups().len())
            " groups. Pick one from the sidebar to preview it."
        }
        ul class="space-y-1" {
            @for group in registry.groups() {
                li class="text-sm" {
                    span class="font-medium" { (group.name()) }
                    span class="text-faint" { " - " (group.stories().len()) " stories" }
                }
            }
        }
    }
}

/// Themed 404 body.
pub fn not_found_page(path: &str) -> Markup {
    html! {
        h1 class="text-2xl font-bold mb-2 pb-2 border-b border-border" { "Story not found" }
        p class="text-sm text-muted mb-6" {
            "Nothing is registered at " code class="font-mono text-foreground" { (path) } "."
        }
        p class="text-sm text-muted" {
            a href="/" class="text-blue hover:underline" { "Back to the catalog" }
        }
    }
}
