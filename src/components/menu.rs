//! Dropdown menu components

use maud::{html, Markup};

/// A single menu row
///
/// # Example
/// ```ignore
/// MenuLine::new("Delete").icon("🗑").danger(true)
/// ```
pub struct MenuLine {
    label: String,
    icon: Option<String>,
    shortcut: Option<String>,
    danger: bool,
}

impl MenuLine {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            shortcut: None,
            danger: false,
        }
    }

    /// Leading glyph
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Trailing keyboard shortcut hint
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Render the row in the destructive style
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    fn render(&self) -> Markup {
        let text = if self.danger {
            "text-error"
        } else {
            "text-foreground"
        };
        html! {
            button type="button"
                class={
                    "flex w-full items-center gap-2 px-3 py-1.5 text-sm text-left rounded "
                    (text) " hover:bg-card cursor-pointer"
                }
            {
                @if let Some(icon) = &self.icon {
                    span class="w-4 text-center" { (icon) }
                }
                span class="flex-1" { (self.label) }
                @if let Some(shortcut) = &self.shortcut {
                    span class="text-xs text-faint" { (shortcut) }
                }
            }
        }
    }
}

enum MenuEntry {
    Line(MenuLine),
    Divider,
}

/// A vertical menu of lines and dividers
///
/// # Example
/// ```ignore
/// Menu::new()
///     .line(MenuLine::new("Rename").icon("✎"))
///     .divider()
///     .line(MenuLine::new("Delete").icon("🗑").danger(true))
///     .render()
/// ```
#[derive(Default)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: MenuLine) -> Self {
        self.entries.push(MenuEntry::Line(line));
        self
    }

    pub fn divider(mut self) -> Self {
        self.entries.push(MenuEntry::Divider);
        self
    }

    pub fn render(self) -> Markup {
        html! {
            div class="w-56 rounded-lg border border-border bg-popover p-1 shadow-xl" role="menu" {
                @for entry in &self.entries {
                    @match entry {
                        MenuEntry::Line(line) => { (line.render()) }
                        MenuEntry::Divider => { div class="my-1 h-px bg-border" {} }
                    }
                }
            }
        }
    }
}
