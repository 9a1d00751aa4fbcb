//! Custom-element embed
//!
//! Builds markup for a web component by tag name, serializing its attribute
//! map through [`args_to_attrs`]. Useful both for embedding real custom
//! elements in pages and for generating the usage snippets shown in the
//! catalog.

use maud::{Markup, PreEscaped};

use crate::debug_panic;
use crate::storybook::{args_to_attrs, AttrValue, Attrs};

/// A custom element under construction
///
/// # Example
/// ```ignore
/// Element::new("video-player")
///     .attr("src", "intro.mp4")
///     .attr("autoplay", true)
///     .attr("poster", None::<&str>)
///     .render()
/// // <video-player src="intro.mp4" autoplay></video-player>
/// ```
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Follows [`args_to_attrs`] semantics: `true` renders
    /// bare, `false` and `None` are omitted.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs = self.attrs.set(name, value);
        self
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Append child markup
    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    /// Append an escaped text child
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(maud::html! { (text) });
        self
    }

    fn build(&self) -> String {
        if !is_valid_tag_name(&self.tag) {
            // Panics in debug builds; release builds log and render nothing
            debug_panic!("invalid element tag name: {:?}", self.tag);
            return String::new();
        }

        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag);
        let attrs = args_to_attrs(&self.attrs);
        if !attrs.is_empty() {
            out.push(' ');
            out.push_str(&attrs);
        }
        out.push('>');
        for child in &self.children {
            out.push_str(&child.0);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }

    /// The element as source text, for usage snippets
    pub fn source(&self) -> String {
        self.build()
    }

    pub fn render(self) -> Markup {
        PreEscaped(self.build())
    }
}

/// Tag names start with an ASCII letter and continue with ASCII letters,
/// digits, or `-`.
fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
