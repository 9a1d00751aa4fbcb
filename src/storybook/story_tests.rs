use super::*;

use maud::html;

#[test]
fn test_story_has_name_and_no_description() {
    let s = story("Primary Button", || html! { button { "Save" } });
    assert_eq!(s.name(), "Primary Button");
    assert_eq!(s.description(), None);
}

#[test]
fn test_story_about_preserves_name_and_description() {
    let s = story_about(
        "Primary Button",
        || html! { button { "Save" } },
        "The default call-to-action button.",
    )
    .unwrap();
    assert_eq!(s.name(), "Primary Button");
    assert_eq!(s.description(), Some("The default call-to-action button."));
}

#[test]
fn test_story_about_empty_description_is_error() {
    let result = story_about("Primary Button", || html! {}, "");
    match result {
        Err(VitrineError::MissingDescription { story }) => {
            assert_eq!(story, "Primary Button");
        }
        other => panic!("expected MissingDescription, got {:?}", other),
    }
}

#[test]
fn test_story_about_whitespace_description_is_error() {
    let result = story_about("Badge", || html! {}, "   \n\t ");
    assert!(matches!(
        result,
        Err(VitrineError::MissingDescription { .. })
    ));
}

#[test]
fn test_render_is_repeatable() {
    let s = story("Badge", || html! { span class="badge" { "New" } });
    assert_eq!(s.render().into_string(), s.render().into_string());
}

#[test]
fn test_render_produces_component_markup() {
    let s = story("Badge", || html! { span class="badge" { "New" } });
    assert_eq!(s.render().into_string(), r#"<span class="badge">New</span>"#);
}

#[test]
fn test_slug_derived_from_name() {
    let s = story("Primary Button", || html! {});
    assert_eq!(s.slug(), "primary-button");
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Primary Button"), "primary-button");
    assert_eq!(slugify("Asset Card (dense)"), "asset-card-dense");
    assert_eq!(slugify("  spaced  out  "), "spaced-out");
    assert_eq!(slugify("Already-Slugged"), "already-slugged");
    assert_eq!(slugify("UPPER"), "upper");
    assert_eq!(slugify("v2.0"), "v2-0");
    assert_eq!(slugify("---"), "");
}

#[test]
fn test_debug_omits_render_fn() {
    let s = story_about("Badge", || html! {}, "A badge.").unwrap();
    let debug = format!("{:?}", s);
    assert!(debug.contains("Badge"));
    assert!(debug.contains("A badge."));
}

#[test]
fn test_story_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Story>();
}
