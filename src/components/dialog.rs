//! Confirmation dialog component

use maud::{html, Markup};

use super::button::{Button, ButtonColor, ButtonKind};

/// A modal confirmation dialog with cancel and confirm actions.
///
/// In the dangerous variant the emphasis swaps: cancel becomes the filled
/// button and confirm renders as red text, so the destructive action is
/// never the visually primary one.
///
/// # Example
/// ```ignore
/// ConfirmDialog::new("Delete activity?", "This cannot be undone.")
///     .confirm_label("Delete")
///     .dangerous(true)
///     .render()
/// ```
pub struct ConfirmDialog {
    title: String,
    content: String,
    cancel_label: String,
    confirm_label: String,
    dangerous: bool,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Confirm".to_string(),
            dangerous: false,
        }
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Mark the confirm action as destructive
    pub fn dangerous(mut self, dangerous: bool) -> Self {
        self.dangerous = dangerous;
        self
    }

    pub fn render(self) -> Markup {
        let (cancel, confirm) = if self.dangerous {
            (
                Button::new(self.cancel_label).kind(ButtonKind::Filled),
                Button::new(self.confirm_label)
                    .color(ButtonColor::Red)
                    .kind(ButtonKind::Text),
            )
        } else {
            (
                Button::new(self.cancel_label).kind(ButtonKind::Text),
                Button::new(self.confirm_label).kind(ButtonKind::Filled),
            )
        };

        html! {
            div class="fixed inset-0 flex items-center justify-center bg-black/60" role="dialog"
                aria-modal="true"
            {
                div class="w-96 max-w-full rounded-lg border border-border bg-popover p-6 shadow-xl" {
                    h2 class="text-lg font-semibold" { (self.title) }
                    p class="mt-2 text-sm text-muted" { (self.content) }
                    div class="mt-6 flex justify-end gap-2" {
                        (cancel.render())
                        (confirm.render())
                    }
                }
            }
        }
    }
}
