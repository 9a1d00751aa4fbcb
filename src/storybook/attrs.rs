//! Attribute serialization for custom-element markup
//!
//! Story pages often embed web components by tag name. [`args_to_attrs`]
//! turns a typed attribute map into the attribute text of such a tag, with
//! HTML-style presence semantics: `true` becomes a bare attribute, while
//! `false` and null are omitted entirely.
//!
//! # Usage
//!
//! ```ignore
//! use vitrine::storybook::{args_to_attrs, Attrs};
//!
//! let attrs = Attrs::new()
//!     .set("kind", "primary")
//!     .set("count", 3)
//!     .set("disabled", true)
//!     .set("hidden", false);
//! assert_eq!(args_to_attrs(&attrs), r#"kind="primary" count="3" disabled"#);
//! ```

use crate::debug_panic;

/// A single attribute value.
///
/// Mirrors the value kinds that appear in component arg tables: strings,
/// numbers, booleans, and an explicit null for "attribute absent".
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl AttrValue {
    /// True when the value produces no output at all (`false` and null).
    pub fn is_omitted(&self) -> bool {
        matches!(self, AttrValue::Bool(false) | AttrValue::Null)
    }

    /// True when the value renders as a bare attribute name (`true`).
    pub fn is_bare(&self) -> bool {
        matches!(self, AttrValue::Bool(true))
    }

    /// Text form of the value for `name="value"` output.
    fn text(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::Int(i) => i.to_string(),
            AttrValue::Float(f) => f.to_string(),
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Null => String::new(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// `None` maps to [`AttrValue::Null`], so optional args serialize to nothing.
impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => AttrValue::Null,
        }
    }
}

/// An ordered attribute map.
///
/// Attributes serialize in insertion order. Setting a name twice replaces
/// the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Set an attribute only when the value is present. Unlike
    /// `set(name, None)` this leaves no null entry behind.
    pub fn set_opt(self, name: impl Into<String>, value: Option<impl Into<AttrValue>>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Attrs::new(), |attrs, (k, v)| attrs.set(k, v))
    }
}

/// Serialize an attribute map to the attribute text of an HTML tag.
///
/// Output rules:
/// - `Str`, `Int`, `Float` render as `name="value"` with the value escaped
/// - `Bool(true)` renders as the bare attribute name
/// - `Bool(false)` and `Null` are omitted entirely
/// - entries are space-joined in insertion order
///
/// Attribute names must start with an ASCII letter and contain only ASCII
/// letters, digits, `-`, or `_`. An invalid name panics in debug builds and
/// is skipped with a warning in release builds.
pub fn args_to_attrs(attrs: &Attrs) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(attrs.len());
    for (name, value) in attrs.iter() {
        if !is_valid_attr_name(name) {
            // Panics in debug builds; release builds log and drop the attribute
            debug_panic!("invalid attribute name: {:?}", name);
            continue;
        }
        if value.is_omitted() {
            continue;
        }
        if value.is_bare() {
            parts.push(name.to_string());
        } else {
            parts.push(format!("{}=\"{}\"", name, escape_attr(&value.text())));
        }
    }
    parts.join(" ")
}

/// Escape a string for use inside a double-quoted attribute value.
///
/// Escapes `&`, `"`, `<`, and `>`. Everything else passes through.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Valid names start with an ASCII letter and continue with ASCII letters,
/// digits, `-`, or `_`.
pub(crate) fn is_valid_attr_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
#[path = "attrs_tests.rs"]
mod tests;
