//! Layout primitives and the base HTML document
//!
//! Every page the crate produces, served or exported, goes through
//! [`base_document`]: it wires up the Tailwind browser build and the theme's
//! `@theme` token block so semantic utilities resolve everywhere else.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::theme::{tailwind_theme, Theme, TAILWIND_BROWSER_SRC};

/// Render a complete HTML document around a body.
///
/// # Examples
///
/// ```ignore
/// use vitrine::components::layout::base_document;
/// use vitrine::theme::Theme;
/// use maud::html;
///
/// let page = base_document("Catalog", &Theme::default(), html! {
///     h1 class="text-2xl font-bold" { "Welcome" }
/// });
/// ```
pub fn base_document(title: &str, theme: &Theme, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_BROWSER_SRC) {}
                style type="text/tailwindcss" { (PreEscaped(tailwind_theme(theme))) }
            }
            body class="bg-background text-foreground font-sans antialiased" {
                (body)
            }
        }
    }
}

/// Centered content column with page padding
pub fn container(content: Markup) -> Markup {
    html! {
        div class="max-w-5xl mx-auto px-6 py-8" { (content) }
    }
}

/// Horizontal flex row, wrapping, items centered
pub fn row(content: Markup) -> Markup {
    html! {
        div class="flex flex-row flex-wrap items-center gap-4" { (content) }
    }
}

/// Vertical flex column
pub fn column(content: Markup) -> Markup {
    html! {
        div class="flex flex-col gap-4" { (content) }
    }
}

/// Titled page section
pub fn section(title: &str, content: Markup) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-lg font-semibold mb-3" { (title) }
            (content)
        }
    }
}

/// Horizontal divider
pub fn divider() -> Markup {
    html! {
        hr class="border-0 h-px w-full bg-border my-4";
    }
}

/// Flexible gap that pushes siblings apart in a flex row
pub fn spacer() -> Markup {
    html! {
        div class="flex-1" {}
    }
}
