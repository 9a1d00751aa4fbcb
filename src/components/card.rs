//! Asset card component
//!
//! Preview card for catalog assets: cover image, title, play/like counters,
//! and an optional footer line (publication state, author, etc). The dense
//! variant drops padding for grid-heavy pages.

use maud::{html, Markup};

/// What the card previews, shown when no cover image is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetKind {
    #[default]
    Activity,
    Resource,
    Course,
}

impl AssetKind {
    fn glyph(&self) -> &'static str {
        match self {
            AssetKind::Activity => "▶",
            AssetKind::Resource => "📄",
            AssetKind::Course => "🎓",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AssetKind::Activity => "Activity",
            AssetKind::Resource => "Resource",
            AssetKind::Course => "Course",
        }
    }
}

/// A preview card for a single asset
///
/// # Example
/// ```ignore
/// AssetCard::new("Counting to Ten")
///     .kind(AssetKind::Activity)
///     .plays(1204)
///     .likes(87)
///     .render()
/// ```
pub struct AssetCard {
    title: String,
    kind: AssetKind,
    image_url: Option<String>,
    plays: Option<u32>,
    likes: Option<u32>,
    footer: Option<String>,
    dense: bool,
}

impl AssetCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: AssetKind::default(),
            image_url: None,
            plays: None,
            likes: None,
            footer: None,
            dense: false,
        }
    }

    pub fn kind(mut self, kind: AssetKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the cover image. Without one, a kind glyph placeholder is shown.
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn plays(mut self, plays: u32) -> Self {
        self.plays = Some(plays);
        self
    }

    pub fn likes(mut self, likes: u32) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Set the footer line under the counters
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Compact spacing for dense grids
    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn render(self) -> Markup {
        let (width, padding, title_class) = if self.dense {
            ("w-48", "p-2", "text-sm font-medium")
        } else {
            ("w-64", "p-4", "text-base font-semibold")
        };
        let has_counters = self.plays.is_some() || self.likes.is_some();

        html! {
            article class={ (width) " rounded-lg border border-border bg-card overflow-hidden" } {
                div class="aspect-video bg-popover flex items-center justify-center" {
                    @if let Some(url) = &self.image_url {
                        img class="w-full h-full object-cover" src=(url) alt=(self.title);
                    } @else {
                        span class="text-3xl text-faint" title=(self.kind.label()) {
                            (self.kind.glyph())
                        }
                    }
                }
                div class=(padding) {
                    h3 class=(title_class) { (self.title) }
                    @if has_counters {
                        div class="flex items-center gap-3 mt-2 text-xs text-muted" {
                            @if let Some(plays) = self.plays {
                                span { "▶ " (plays) }
                            }
                            @if let Some(likes) = self.likes {
                                span { "♥ " (likes) }
                            }
                        }
                    }
                    @if let Some(footer) = &self.footer {
                        div class="mt-2 pt-2 border-t border-border text-xs text-faint" {
                            (footer)
                        }
                    }
                }
            }
        }
    }
}
