//! Static site export.
//!
//! Writes the whole catalog to disk as plain HTML so it can be hosted
//! anywhere. Every story lands at `stories/<group>/<story>/index.html`,
//! matching the live server's URL scheme, with a welcome page at the root.

use std::fs;
use std::path::Path;

use maud::Markup;
use tracing::{debug, info};

use crate::error::Result;
use crate::theme::Theme;

use super::layout::{shell, story_page, welcome_page};
use super::registry::StoryRegistry;

/// Renders every registered story into `out_dir` and returns the number of
/// pages written. An existing `out_dir` is replaced.
pub fn build_site(
    registry: &StoryRegistry,
    theme: &Theme,
    site_title: &str,
    out_dir: &Path,
) -> Result<usize> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)?;
    }
    fs::create_dir_all(out_dir)?;

    let stamp = chrono::Utc::now().to_rfc3339();
    let mut pages = 0;

    write_page(
        &out_dir.join("index.html"),
        shell(
            site_title,
            site_title,
            theme,
            registry,
            None,
            welcome_page(registry),
        ),
        &stamp,
    )?;
    pages += 1;

    for group in registry.groups() {
        for story in group.stories() {
            let path = out_dir
                .join("stories")
                .join(group.slug())
                .join(story.slug())
                .join("index.html");
            let markup = shell(
                &format!("{} - {}", story.name(), site_title),
                site_title,
                theme,
                registry,
                Some((&group.slug(), &story.slug())),
                story_page(story),
            );
            write_page(&path, markup, &stamp)?;
            debug!(group = %group.name(), story = %story.name(), "wrote story page");
            pages += 1;
        }
    }

    info!(
        event_type = "site_export",
        pages,
        out_dir = %out_dir.display(),
        "site exported"
    );
    Ok(pages)
}

fn write_page(path: &Path, markup: Markup, stamp: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut html = markup.into_string();
    html.push_str(&format!("\n<!-- generated {} -->\n", stamp));
    fs::write(path, html)?;
    Ok(())
}

#[cfg(test)]
#[path = "site_tests.rs"]
mod tests;
