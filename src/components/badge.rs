//! Badge components: labels and counters

use maud::{html, Markup};

/// Badge tone selects the status color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "bg-card text-muted border-border",
            BadgeTone::Info => "bg-info/10 text-info border-info/40",
            BadgeTone::Success => "bg-success/10 text-success border-success/40",
            BadgeTone::Warning => "bg-warning/10 text-warning border-warning/40",
            BadgeTone::Danger => "bg-error/10 text-error border-error/40",
        }
    }
}

/// Small labelled pill
pub fn badge(label: &str, tone: BadgeTone) -> Markup {
    html! {
        span class={
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium "
            (tone.class())
        } {
            (label)
        }
    }
}

/// Circular counter badge. Values above 99 display as "99+".
pub fn count_badge(count: u32) -> Markup {
    let text = if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    };
    html! {
        span class="inline-flex items-center justify-center min-w-5 h-5 px-1 rounded-full \
                    bg-red text-inverted text-xs font-semibold tabular-nums"
        {
            (text)
        }
    }
}
