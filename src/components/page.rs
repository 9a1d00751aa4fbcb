//! Page chrome components: header and footer

use maud::{html, Markup};

/// A navigation link in the page header
#[derive(Debug, Clone)]
pub struct NavLink {
    label: String,
    href: String,
    active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// Highlight this link as the current page
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Site-wide page header with brand, navigation, and an optional user name
///
/// # Example
/// ```ignore
/// PageHeader::new("Atelier")
///     .link(NavLink::new("Create", "/create").active(true))
///     .link(NavLink::new("Library", "/library"))
///     .user("Maya")
///     .render()
/// ```
pub struct PageHeader {
    brand: String,
    links: Vec<NavLink>,
    user: Option<String>,
}

impl PageHeader {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            links: Vec::new(),
            user: None,
        }
    }

    pub fn link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    /// Show the signed-in user's display name
    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.user = Some(name.into());
        self
    }

    pub fn render(self) -> Markup {
        html! {
            header class="flex items-center gap-8 border-b border-border bg-card px-6 py-3" {
                span class="text-base font-bold" { (self.brand) }
                nav class="flex items-center gap-1 flex-1" {
                    @for link in &self.links {
                        a
                            href=(link.href)
                            class={
                                "px-3 py-1.5 rounded-md text-sm "
                                (if link.active {
                                    "bg-blue/10 text-blue font-medium"
                                } else {
                                    "text-muted hover:text-foreground"
                                })
                            }
                        {
                            (link.label)
                        }
                    }
                }
                @if let Some(user) = &self.user {
                    span class="text-sm text-muted" { (user) }
                }
            }
        }
    }
}

/// A titled column of footer links
#[derive(Debug, Clone)]
pub struct FooterColumn {
    title: String,
    links: Vec<(String, String)>,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: Vec::new(),
        }
    }

    pub fn link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.push((label.into(), href.into()));
        self
    }
}

/// Site-wide page footer with link columns and a fine-print line
pub struct PageFooter {
    columns: Vec<FooterColumn>,
    fine_print: Option<String>,
}

impl PageFooter {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            fine_print: None,
        }
    }

    pub fn column(mut self, column: FooterColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Copyright or legal line under the columns
    pub fn fine_print(mut self, text: impl Into<String>) -> Self {
        self.fine_print = Some(text.into());
        self
    }

    pub fn render(self) -> Markup {
        html! {
            footer class="border-t border-border bg-card px-6 py-8" {
                div class="flex flex-wrap gap-12" {
                    @for column in &self.columns {
                        div {
                            h4 class="text-sm font-semibold mb-3" { (column.title) }
                            ul class="flex flex-col gap-2" {
                                @for (label, href) in &column.links {
                                    li {
                                        a href=(href)
                                            class="text-sm text-muted hover:text-foreground"
                                        {
                                            (label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                @if let Some(fine_print) = &self.fine_print {
                    p class="mt-8 text-xs text-faint" { (fine_print) }
                }
            }
        }
    }
}

impl Default for PageFooter {
    fn default() -> Self {
        Self::new()
    }
}
