//! Reusable Button components
//!
//! This module provides the rectangle button and the icon button, themed
//! through semantic color utilities so they recolor with the active theme.

use maud::{html, Markup};

/// Button color determines which accent the control uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    /// Primary actions (blue accent)
    #[default]
    Blue,
    /// Destructive actions (red accent)
    Red,
    /// Affirmative actions (green accent)
    Green,
}

impl ButtonColor {
    /// Semantic color token, matches the theme's `--color-*` names
    fn token(&self) -> &'static str {
        match self {
            ButtonColor::Blue => "blue",
            ButtonColor::Red => "red",
            ButtonColor::Green => "green",
        }
    }
}

/// Button kind determines the visual weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    /// Filled background (strongest emphasis)
    #[default]
    Filled,
    /// Border only, transparent background
    Outline,
    /// Text only, no background or border
    Text,
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "text-xs px-3 py-1.5",
            ButtonSize::Medium => "text-sm px-4 py-2",
            ButtonSize::Large => "text-base px-6 py-3",
        }
    }

    fn square_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "w-7 h-7 text-sm",
            ButtonSize::Medium => "w-8 h-8 text-base",
            ButtonSize::Large => "w-10 h-10 text-lg",
        }
    }
}

/// A rectangle button for primary, destructive, and affirmative actions
///
/// # Example
/// ```ignore
/// Button::new("Save")
///     .color(ButtonColor::Green)
///     .kind(ButtonKind::Filled)
///     .render()
/// ```
pub struct Button {
    label: String,
    color: ButtonColor,
    kind: ButtonKind,
    size: ButtonSize,
    disabled: bool,
    href: Option<String>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: ButtonColor::default(),
            kind: ButtonKind::default(),
            size: ButtonSize::default(),
            disabled: false,
            href: None,
        }
    }

    /// Set the accent color (Blue, Red, Green)
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Set the visual weight (Filled, Outline, Text)
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Make the button a link. Disabled link buttons render as plain buttons.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    fn classes(&self) -> String {
        let token = self.color.token();
        let weight = match self.kind {
            ButtonKind::Filled => format!("bg-{t} text-inverted hover:opacity-90", t = token),
            ButtonKind::Outline => format!(
                "border border-{t} text-{t} hover:bg-{t}/10",
                t = token
            ),
            ButtonKind::Text => format!("text-{t} hover:bg-{t}/10", t = token),
        };
        let state = if self.disabled {
            " opacity-50 cursor-not-allowed pointer-events-none"
        } else {
            ""
        };
        format!(
            "inline-flex items-center justify-center gap-2 font-medium rounded-md \
             transition-colors cursor-pointer {} {}{}",
            self.size.class(),
            weight,
            state
        )
    }

    pub fn render(self) -> Markup {
        let classes = self.classes();
        match (&self.href, self.disabled) {
            (Some(href), false) => html! {
                a class=(classes) href=(href) { (self.label) }
            },
            _ => html! {
                button type="button" class=(classes) disabled[self.disabled] { (self.label) }
            },
        }
    }
}

/// A compact square button holding a single glyph
///
/// The label is not shown; it becomes the accessible name.
///
/// # Example
/// ```ignore
/// IconButton::new("✕", "Close").render()
/// ```
pub struct IconButton {
    glyph: String,
    label: String,
    color: ButtonColor,
    size: ButtonSize,
    disabled: bool,
}

impl IconButton {
    pub fn new(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
            color: ButtonColor::default(),
            size: ButtonSize::default(),
            disabled: false,
        }
    }

    /// Set the accent color
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(self) -> Markup {
        let state = if self.disabled {
            " opacity-50 cursor-not-allowed pointer-events-none"
        } else {
            ""
        };
        let classes = format!(
            "inline-flex items-center justify-center {} rounded-md text-{} hover:bg-{}/10 \
             cursor-pointer{}",
            self.size.square_class(),
            self.color.token(),
            self.color.token(),
            state
        );
        html! {
            button type="button" class=(classes) aria-label=(self.label)
                disabled[self.disabled]
            {
                span class="leading-none" { (self.glyph) }
            }
        }
    }
}
