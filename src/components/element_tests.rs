//! Unit tests for the custom-element embed.

use super::element::Element;
use maud::html;

#[test]
fn test_bare_element() {
    let html = Element::new("video-player").render().into_string();
    assert_eq!(html, "<video-player></video-player>");
}

#[test]
fn test_attributes_in_insertion_order() {
    let html = Element::new("video-player")
        .attr("src", "intro.mp4")
        .attr("width", 640)
        .render()
        .into_string();
    assert_eq!(
        html,
        r#"<video-player src="intro.mp4" width="640"></video-player>"#
    );
}

#[test]
fn test_boolean_attribute_semantics() {
    let html = Element::new("video-player")
        .attr("src", "intro.mp4")
        .attr("autoplay", true)
        .attr("muted", false)
        .attr("poster", None::<&str>)
        .render()
        .into_string();
    assert_eq!(
        html,
        r#"<video-player src="intro.mp4" autoplay></video-player>"#
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    let html = Element::new("tool-tip")
        .attr("body", r#"a "quote" & more"#)
        .render()
        .into_string();
    assert_eq!(
        html,
        r#"<tool-tip body="a &quot;quote&quot; &amp; more"></tool-tip>"#
    );
}

#[test]
fn test_children_render_inside() {
    let html = Element::new("menu-container")
        .child(html! { span { "One" } })
        .child(html! { span { "Two" } })
        .render()
        .into_string();
    assert_eq!(
        html,
        "<menu-container><span>One</span><span>Two</span></menu-container>"
    );
}

#[test]
fn test_text_child_is_escaped() {
    let html = Element::new("button-rect")
        .text("Save & close")
        .render()
        .into_string();
    assert_eq!(html, "<button-rect>Save &amp; close</button-rect>");
}

#[test]
fn test_source_matches_render() {
    let element = Element::new("asset-card").attr("dense", true);
    let source = element.source();
    assert_eq!(source, r#"<asset-card dense></asset-card>"#);
    assert_eq!(element.render().into_string(), source);
}

#[test]
#[should_panic(expected = "invalid element tag name")]
fn test_invalid_tag_name_panics_in_debug() {
    let _ = Element::new("no spaces allowed").render();
}
