//! Toast notification component
//!
//! Status toasts with four variants (Success, Warning, Error, Info), an
//! optional action label, and an optional dismiss control. Variants pick
//! their icon glyph and status color.

use maud::{html, Markup};

/// Toast variant determines the visual style and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Success toast (green) - checkmark icon
    Success,
    /// Warning toast (amber) - warning icon
    Warning,
    /// Error toast (red) - X icon
    Error,
    /// Info toast (blue) - info icon
    #[default]
    Info,
}

impl ToastVariant {
    /// Get the icon character for this variant
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✕",
            ToastVariant::Info => "ℹ",
        }
    }

    fn accent_class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "text-success",
            ToastVariant::Warning => "text-warning",
            ToastVariant::Error => "text-error",
            ToastVariant::Info => "text-info",
        }
    }

    fn border_class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "border-success/40",
            ToastVariant::Warning => "border-warning/40",
            ToastVariant::Error => "border-error/40",
            ToastVariant::Info => "border-info/40",
        }
    }
}

/// A status toast
///
/// # Example
/// ```ignore
/// Toast::success("Saved!").action("Undo").render()
/// ```
pub struct Toast {
    message: String,
    variant: ToastVariant,
    action: Option<String>,
    dismissible: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            action: None,
            dismissible: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    /// Add an action label rendered after the message
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Show a dismiss control
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn render(self) -> Markup {
        html! {
            div
                class={
                    "inline-flex items-center gap-3 rounded-lg border bg-popover px-4 py-3 \
                     shadow-lg text-sm " (self.variant.border_class())
                }
                role="status"
            {
                span class={ "font-semibold " (self.variant.accent_class()) } {
                    (self.variant.icon())
                }
                span class="text-foreground" { (self.message) }
                @if let Some(action) = &self.action {
                    button type="button"
                        class={ "font-medium cursor-pointer " (self.variant.accent_class()) }
                    {
                        (action)
                    }
                }
                @if self.dismissible {
                    button type="button" aria-label="Dismiss"
                        class="text-faint hover:text-foreground cursor-pointer"
                    {
                        "✕"
                    }
                }
            }
        }
    }
}
