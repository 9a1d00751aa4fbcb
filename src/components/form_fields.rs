//! Form field components
//!
//! This module provides the labelled form controls:
//!
//! - [`TextField`] - Text input for text/password/email/number types
//! - [`TextArea`] - Multi-line text input
//! - [`Checkbox`] - Checkbox with label
//!
//! Fields render their label above the control and an optional error line
//! below it. An error also recolors the control border.

use maud::{html, Markup};

/// Input type for [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFieldKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl TextFieldKind {
    /// Value of the `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            TextFieldKind::Text => "text",
            TextFieldKind::Password => "password",
            TextFieldKind::Email => "email",
            TextFieldKind::Number => "number",
        }
    }
}

fn control_classes(has_error: bool) -> String {
    let border = if has_error {
        "border-error"
    } else {
        "border-border focus:border-blue"
    };
    format!(
        "w-64 rounded-md border bg-card px-3 py-2 text-sm text-foreground \
         placeholder:text-faint focus:outline-none {}",
        border
    )
}

/// A single-line text input with label and error support
///
/// # Example
/// ```ignore
/// TextField::new("Email", "email")
///     .kind(TextFieldKind::Email)
///     .placeholder("you@example.org")
///     .render()
/// ```
pub struct TextField {
    label: String,
    name: String,
    kind: TextFieldKind,
    value: Option<String>,
    placeholder: Option<String>,
    error: Option<String>,
    disabled: bool,
}

impl TextField {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            kind: TextFieldKind::default(),
            value: None,
            placeholder: None,
            error: None,
            disabled: false,
        }
    }

    pub fn kind(mut self, kind: TextFieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set a validation error shown under the control
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(self) -> Markup {
        html! {
            label class="flex flex-col gap-1.5" {
                span class="text-sm font-medium text-muted" { (self.label) }
                input
                    type=(self.kind.input_type())
                    name=(self.name)
                    class=(control_classes(self.error.is_some()))
                    value=[self.value.as_deref()]
                    placeholder=[self.placeholder.as_deref()]
                    disabled[self.disabled];
                @if let Some(error) = &self.error {
                    span class="text-xs text-error" { (error) }
                }
            }
        }
    }
}

/// A multi-line text input with label
pub struct TextArea {
    label: String,
    name: String,
    value: Option<String>,
    placeholder: Option<String>,
    rows: u32,
    error: Option<String>,
}

impl TextArea {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            value: None,
            placeholder: None,
            rows: 4,
            error: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Set a validation error shown under the control
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn render(self) -> Markup {
        html! {
            label class="flex flex-col gap-1.5" {
                span class="text-sm font-medium text-muted" { (self.label) }
                textarea
                    name=(self.name)
                    rows=(self.rows)
                    class=(control_classes(self.error.is_some()))
                    placeholder=[self.placeholder.as_deref()]
                {
                    @if let Some(value) = &self.value {
                        (value)
                    }
                }
                @if let Some(error) = &self.error {
                    span class="text-xs text-error" { (error) }
                }
            }
        }
    }
}

/// A checkbox with trailing label
pub struct Checkbox {
    label: String,
    name: String,
    checked: bool,
    disabled: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            checked: false,
            disabled: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(self) -> Markup {
        html! {
            label class="inline-flex items-center gap-2 text-sm cursor-pointer" {
                input
                    type="checkbox"
                    name=(self.name)
                    class="w-4 h-4 rounded border-border accent-blue"
                    checked[self.checked]
                    disabled[self.disabled];
                span { (self.label) }
            }
        }
    }
}
