//! Tooltip component with nine-point anchoring

use maud::{html, Markup};

/// Where the tooltip sits relative to its target.
///
/// The nine anchors cover each corner, each edge midpoint, and dead center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    TopLeft,
    #[default]
    TopMiddle,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Anchor {
    /// All anchors in reading order
    pub fn all() -> [Anchor; 9] {
        [
            Anchor::TopLeft,
            Anchor::TopMiddle,
            Anchor::TopRight,
            Anchor::MiddleLeft,
            Anchor::Center,
            Anchor::MiddleRight,
            Anchor::BottomLeft,
            Anchor::BottomMiddle,
            Anchor::BottomRight,
        ]
    }

    /// Short code used in attribute values ("tl", "mm", "br", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "tl",
            Anchor::TopMiddle => "tm",
            Anchor::TopRight => "tr",
            Anchor::MiddleLeft => "ml",
            Anchor::Center => "mm",
            Anchor::MiddleRight => "mr",
            Anchor::BottomLeft => "bl",
            Anchor::BottomMiddle => "bm",
            Anchor::BottomRight => "br",
        }
    }

    fn placement_class(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "bottom-full left-0 mb-2",
            Anchor::TopMiddle => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Anchor::TopRight => "bottom-full right-0 mb-2",
            Anchor::MiddleLeft => "right-full top-1/2 -translate-y-1/2 mr-2",
            Anchor::Center => "left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2",
            Anchor::MiddleRight => "left-full top-1/2 -translate-y-1/2 ml-2",
            Anchor::BottomLeft => "top-full left-0 mt-2",
            Anchor::BottomMiddle => "top-full left-1/2 -translate-x-1/2 mt-2",
            Anchor::BottomRight => "top-full right-0 mt-2",
        }
    }
}

/// Tooltip kind: informational or error callout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipKind {
    #[default]
    Plain,
    Error,
}

impl TooltipKind {
    fn class(&self) -> &'static str {
        match self {
            TooltipKind::Plain => "bg-popover text-foreground border-border",
            TooltipKind::Error => "bg-popover text-error border-error/60",
        }
    }
}

/// A positioned tooltip bubble attached to a target element
///
/// # Example
/// ```ignore
/// Tooltip::new("Saved to library")
///     .anchor(Anchor::BottomMiddle)
///     .render(html! { button { "Save" } })
/// ```
pub struct Tooltip {
    body: String,
    anchor: Anchor,
    kind: TooltipKind,
}

impl Tooltip {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            anchor: Anchor::default(),
            kind: TooltipKind::default(),
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn kind(mut self, kind: TooltipKind) -> Self {
        self.kind = kind;
        self
    }

    /// Render the target with the tooltip bubble anchored to it
    pub fn render(self, target: Markup) -> Markup {
        html! {
            span class="relative inline-flex" {
                (target)
                span
                    class={
                        "absolute z-10 whitespace-nowrap rounded-md border px-2.5 py-1.5 \
                         text-xs shadow-lg "
                        (self.kind.class()) " " (self.anchor.placement_class())
                    }
                    data-anchor=(self.anchor.as_str())
                    role="tooltip"
                {
                    (self.body)
                }
            }
        }
    }
}
