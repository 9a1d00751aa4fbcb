//! Tailwind theme emission
//!
//! Turns a [`Theme`] into the `@theme` block consumed by the Tailwind v4
//! browser build. Each token becomes a utility family: `--color-background`
//! yields `bg-background`, `--color-border` yields `border-border`, and so on.

use super::hex_color::css;
use super::types::Theme;

/// URL of the Tailwind v4 browser build loaded by catalog pages.
pub const TAILWIND_BROWSER_SRC: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Emit the `@theme` block for a theme.
///
/// The returned string is placed in a `<style type="text/tailwindcss">` tag
/// so the browser build compiles utilities against these tokens.
pub fn tailwind_theme(theme: &Theme) -> String {
    let c = &theme.colors;
    let fonts = theme.get_fonts();

    let mut out = String::with_capacity(1024);
    out.push_str("@theme {\n");

    // Surfaces
    push_color(&mut out, "background", c.surface.background);
    push_color(&mut out, "card", c.surface.card);
    push_color(&mut out, "popover", c.surface.popover);
    push_color(&mut out, "sidebar", c.surface.sidebar);

    // Text
    push_color(&mut out, "foreground", c.text.foreground);
    push_color(&mut out, "muted", c.text.muted);
    push_color(&mut out, "faint", c.text.faint);
    push_color(&mut out, "inverted", c.text.inverted);

    // Accents
    push_color(&mut out, "blue", c.accent.blue);
    push_color(&mut out, "red", c.accent.red);
    push_color(&mut out, "green", c.accent.green);

    // Borders and status
    push_color(&mut out, "border", c.ui.border);
    push_color(&mut out, "success", c.ui.success);
    push_color(&mut out, "warning", c.ui.warning);
    push_color(&mut out, "error", c.ui.error);
    push_color(&mut out, "info", c.ui.info);

    out.push_str(&format!("  --font-sans: {};\n", fonts.sans));
    out.push_str(&format!("  --font-mono: {};\n", fonts.mono));

    out.push_str("}\n");
    out
}

fn push_color(out: &mut String, token: &str, color: u32) {
    out.push_str(&format!("  --color-{}: {};\n", token, css(color)));
}
