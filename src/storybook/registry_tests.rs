use super::*;
use crate::storybook::{story, story_about};

use maud::html;

fn sample(name: &str) -> Story {
    let label = name.to_string();
    story(name, move || html! { span { (label) } })
}

#[test]
fn test_empty_registry() {
    let reg = StoryRegistry::new();
    assert!(reg.is_empty());
    assert_eq!(reg.len(), 0);
    assert!(reg.groups().is_empty());
    assert!(reg.first().is_none());
    assert!(reg.find("buttons", "rectangle").is_none());
}

#[test]
fn test_register_creates_group_on_first_use() {
    let mut reg = StoryRegistry::new();
    reg.register("Buttons", sample("Rectangle"));
    assert_eq!(reg.groups().len(), 1);
    assert_eq!(reg.groups()[0].name(), "Buttons");
    assert_eq!(reg.groups()[0].slug(), "buttons");
    assert_eq!(reg.len(), 1);
}

#[test]
fn test_groups_keep_first_registration_order() {
    let mut reg = StoryRegistry::new();
    reg.register("Overlays", sample("Tooltip"));
    reg.register("Buttons", sample("Rectangle"));
    reg.register("Overlays", sample("Dialog"));

    let names: Vec<&str> = reg.groups().iter().map(|g| g.name()).collect();
    assert_eq!(names, vec!["Overlays", "Buttons"]);
}

#[test]
fn test_stories_keep_registration_order_within_group() {
    let mut reg = StoryRegistry::new();
    reg.register("Buttons", sample("Rectangle"));
    reg.register("Buttons", sample("Icon"));
    reg.register("Buttons", sample("Link"));

    let names: Vec<&str> = reg.groups()[0].stories().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Rectangle", "Icon", "Link"]);
}

#[test]
fn test_find_by_slug() {
    let mut reg = StoryRegistry::new();
    reg.register("Form Fields", sample("Text Field"));

    let found = reg.find("form-fields", "text-field").unwrap();
    assert_eq!(found.name(), "Text Field");

    assert!(reg.find("form-fields", "other").is_none());
    assert!(reg.find("forms", "text-field").is_none());
}

#[test]
fn test_get_and_stories_use_display_names() {
    let mut reg = StoryRegistry::new();
    reg.register("Form Fields", sample("Text Field"));
    reg.register("Form Fields", sample("Checkbox"));

    let stories = reg.stories("Form Fields").unwrap();
    assert_eq!(stories.len(), 2);
    assert!(reg.stories("form-fields").is_none());

    let found = reg.get("Form Fields", "Checkbox").unwrap();
    assert_eq!(found.name(), "Checkbox");
    assert!(reg.get("Form Fields", "checkbox").is_none());
    assert!(reg.get("Forms", "Checkbox").is_none());
}

#[test]
fn test_duplicate_names_allowed_first_match_wins() {
    let mut reg = StoryRegistry::new();
    reg.register(
        "Buttons",
        story_about("Rectangle", || html! { b { "first" } }, "First variant.").unwrap(),
    );
    reg.register("Buttons", story("Rectangle", || html! { b { "second" } }));

    assert_eq!(reg.len(), 2);
    let found = reg.find("buttons", "rectangle").unwrap();
    assert_eq!(found.description(), Some("First variant."));
    assert!(found.render().into_string().contains("first"));
}

#[test]
fn test_first_returns_first_registered_story() {
    let mut reg = StoryRegistry::new();
    reg.register("Foundation", sample("Design Tokens"));
    reg.register("Buttons", sample("Rectangle"));

    let (group, story) = reg.first().unwrap();
    assert_eq!(group.name(), "Foundation");
    assert_eq!(story.name(), "Design Tokens");
}

#[test]
fn test_iter_walks_groups_in_order() {
    let mut reg = StoryRegistry::new();
    reg.register("A", sample("One"));
    reg.register("B", sample("Three"));
    reg.register("A", sample("Two"));

    let flat: Vec<(String, String)> = reg
        .iter()
        .map(|(g, s)| (g.name().to_string(), s.name().to_string()))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("A".to_string(), "One".to_string()),
            ("A".to_string(), "Two".to_string()),
            ("B".to_string(), "Three".to_string()),
        ]
    );
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoryRegistry>();
}
