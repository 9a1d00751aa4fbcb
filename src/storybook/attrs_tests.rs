use super::*;

#[test]
fn test_string_and_number_args_serialize_as_pairs() {
    let attrs = Attrs::new()
        .set("kind", "primary")
        .set("count", 3)
        .set("ratio", 0.5);
    assert_eq!(
        args_to_attrs(&attrs),
        r#"kind="primary" count="3" ratio="0.5""#
    );
}

#[test]
fn test_true_renders_bare_attribute() {
    let attrs = Attrs::new().set("disabled", true);
    assert_eq!(args_to_attrs(&attrs), "disabled");
}

#[test]
fn test_false_is_omitted_entirely() {
    // flag="false" would still activate a boolean attribute in HTML
    let attrs = Attrs::new().set("label", "Save").set("disabled", false);
    let out = args_to_attrs(&attrs);
    assert_eq!(out, r#"label="Save""#);
    assert!(!out.contains("disabled"));
}

#[test]
fn test_null_is_omitted() {
    let attrs = Attrs::new()
        .set("src", "video.mp4")
        .set("poster", AttrValue::Null);
    assert_eq!(args_to_attrs(&attrs), r#"src="video.mp4""#);
}

#[test]
fn test_none_option_is_omitted() {
    let poster: Option<&str> = None;
    let attrs = Attrs::new()
        .set("src", "video.mp4")
        .set("poster", poster)
        .set("width", Some(640));
    assert_eq!(args_to_attrs(&attrs), r#"src="video.mp4" width="640""#);
}

#[test]
fn test_set_opt_skips_absent_values() {
    let attrs = Attrs::new()
        .set("src", "video.mp4")
        .set_opt("poster", None::<&str>)
        .set_opt("width", Some(640));
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("poster"), None);
    assert_eq!(args_to_attrs(&attrs), r#"src="video.mp4" width="640""#);
}

#[test]
fn test_empty_map_serializes_to_empty_string() {
    assert_eq!(args_to_attrs(&Attrs::new()), "");
}

#[test]
fn test_only_omitted_values_serialize_to_empty_string() {
    let attrs = Attrs::new()
        .set("hidden", false)
        .set("poster", AttrValue::Null);
    assert_eq!(args_to_attrs(&attrs), "");
}

#[test]
fn test_insertion_order_is_preserved() {
    let attrs = Attrs::new()
        .set("zeta", "1")
        .set("alpha", "2")
        .set("mid", "3");
    assert_eq!(args_to_attrs(&attrs), r#"zeta="1" alpha="2" mid="3""#);
}

#[test]
fn test_duplicate_set_replaces_value_in_place() {
    let attrs = Attrs::new()
        .set("kind", "primary")
        .set("size", "large")
        .set("kind", "secondary");
    assert_eq!(attrs.len(), 2);
    assert_eq!(args_to_attrs(&attrs), r#"kind="secondary" size="large""#);
}

#[test]
fn test_values_are_escaped() {
    let attrs = Attrs::new().set("title", r#"Say "hi" & <leave>"#);
    assert_eq!(
        args_to_attrs(&attrs),
        r#"title="Say &quot;hi&quot; &amp; &lt;leave&gt;""#
    );
}

#[test]
fn test_escape_attr_passes_plain_text_through() {
    assert_eq!(escape_attr("plain text 123"), "plain text 123");
    assert_eq!(escape_attr(""), "");
}

#[test]
fn test_escape_attr_handles_each_character() {
    assert_eq!(escape_attr("&"), "&amp;");
    assert_eq!(escape_attr("\""), "&quot;");
    assert_eq!(escape_attr("<"), "&lt;");
    assert_eq!(escape_attr(">"), "&gt;");
    assert_eq!(escape_attr("a&b&c"), "a&amp;b&amp;c");
}

#[test]
fn test_truthy_roundtrip_preserves_every_pair() {
    let pairs = [("src", "clip.mp4"), ("title", "Intro"), ("lang", "en")];
    let attrs: Attrs = pairs.iter().copied().collect();
    let out = args_to_attrs(&attrs);
    for (name, value) in pairs {
        assert!(out.contains(&format!(r#"{}="{}""#, name, value)));
    }
    assert_eq!(out.matches('=').count(), pairs.len());
}

#[test]
fn test_from_iterator_collects_in_order() {
    let attrs: Attrs = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(args_to_attrs(&attrs), r#"a="1" b="2""#);
}

#[test]
fn test_get_returns_current_value() {
    let attrs = Attrs::new().set("count", 1).set("count", 2);
    assert_eq!(attrs.get("count"), Some(&AttrValue::Int(2)));
    assert_eq!(attrs.get("missing"), None);
}

#[test]
fn test_valid_attr_names() {
    assert!(is_valid_attr_name("src"));
    assert!(is_valid_attr_name("data-kind"));
    assert!(is_valid_attr_name("aria_label"));
    assert!(is_valid_attr_name("x2"));
    assert!(!is_valid_attr_name(""));
    assert!(!is_valid_attr_name("2x"));
    assert!(!is_valid_attr_name("-dash"));
    assert!(!is_valid_attr_name("on click"));
    assert!(!is_valid_attr_name("a=b"));
}

#[test]
#[should_panic(expected = "invalid attribute name")]
fn test_invalid_attr_name_panics_in_debug() {
    let attrs = Attrs::new().set("bad name", "x");
    let _ = args_to_attrs(&attrs);
}
