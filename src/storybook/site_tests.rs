use std::fs;

use maud::html;
use tempfile::TempDir;

use crate::storybook::{story, story_about};
use crate::theme::Theme;

use super::*;

fn sample_registry() -> StoryRegistry {
    let mut registry = StoryRegistry::new();
    registry.register("Buttons", story("Rectangle", || html! { button { "Go" } }));
    registry.register(
        "Buttons",
        story_about("Icon", || html! { span { "i" } }, "Compact icon-only buttons.").unwrap(),
    );
    registry.register("Forms", story("Text Field", || html! { input; }));
    registry
}

#[test]
fn test_build_site_writes_one_page_per_story_plus_index() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");

    let pages = build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    assert_eq!(pages, 4);
    assert!(out.join("index.html").is_file());
    assert!(out.join("stories/buttons/rectangle/index.html").is_file());
    assert!(out.join("stories/buttons/icon/index.html").is_file());
    assert!(out.join("stories/forms/text-field/index.html").is_file());
}

#[test]
fn test_story_page_contains_title_and_description() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    let html = fs::read_to_string(out.join("stories/buttons/icon/index.html")).unwrap();
    assert!(html.contains("Icon"));
    assert!(html.contains("Compact icon-only buttons."));
    assert!(html.contains("<span>i</span>"));
    // Only the addressed story is rendered on its page.
    assert!(!html.contains("<button>Go</button>"));
}

#[test]
fn test_pages_share_the_full_sidebar() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    let html = fs::read_to_string(out.join("stories/forms/text-field/index.html")).unwrap();
    assert!(html.contains("/stories/buttons/rectangle/"));
    assert!(html.contains("/stories/buttons/icon/"));
    assert!(html.contains("/stories/forms/text-field/"));
}

#[test]
fn test_active_story_link_is_highlighted() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    let html = fs::read_to_string(out.join("stories/buttons/rectangle/index.html")).unwrap();
    assert!(html.contains("bg-blue/10 text-blue font-medium"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("bg-blue/10 text-blue font-medium"));
}

#[test]
fn test_index_is_welcome_page() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("Welcome"));
    assert!(html.contains("Buttons"));
    assert!(html.contains("Forms"));
}

#[test]
fn test_pages_carry_generated_stamp() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("<!-- generated "));
}

#[test]
fn test_rebuild_replaces_stale_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("stale.html"), "old").unwrap();

    build_site(&sample_registry(), &Theme::default(), "Vitrine", &out).unwrap();

    assert!(!out.join("stale.html").exists());
    assert!(out.join("index.html").is_file());
}

#[test]
fn test_empty_registry_exports_only_the_index() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");

    let pages = build_site(&StoryRegistry::new(), &Theme::default(), "Vitrine", &out).unwrap();

    assert_eq!(pages, 1);
    assert!(out.join("index.html").is_file());
    assert!(!out.join("stories").exists());
}
