//! Form field component stories for the storybook

use maud::html;

use crate::components::{Checkbox, TextArea, TextField, TextFieldKind};
use crate::error::Result;
use crate::storybook::{
    code_block, story_about, story_divider, story_item, story_section, StoryRegistry,
};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Forms",
        story_about(
            "Text Field",
            || {
                html! {
                    (story_section("Kinds", html! {
                        (story_item("Text", TextField::new("Display name", "display_name").render()))
                        (story_item("Email", TextField::new("Email", "email")
                            .kind(TextFieldKind::Email)
                            .placeholder("you@example.com")
                            .render()))
                        (story_item("Password", TextField::new("Password", "password")
                            .kind(TextFieldKind::Password)
                            .render()))
                        (story_item("Number", TextField::new("Max players", "max_players")
                            .kind(TextFieldKind::Number)
                            .value("4")
                            .render()))
                    }))
                    (story_section("States", html! {
                        (story_item("Prefilled", TextField::new("City", "city").value("Jerusalem").render()))
                        (story_item("Error", TextField::new("Email", "email")
                            .kind(TextFieldKind::Email)
                            .value("not-an-email")
                            .error("Enter a valid email address")
                            .render()))
                        (story_item("Disabled", TextField::new("Plan", "plan").value("Free").disabled(true).render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"TextField::new("Email", "email")
    .kind(TextFieldKind::Email)
    .placeholder("you@example.com")
    .render()"#,
                    )))
                }
            },
            "Single-line input with a label above it. Error state swaps the border to \
             the error color and prints the message under the control.",
        )?,
    );

    registry.register(
        "Forms",
        story_about(
            "Text Area",
            || {
                html! {
                    (story_section("Variants", html! {
                        (story_item("Default", TextArea::new("Description", "description")
                            .placeholder("What is this activity about?")
                            .render()))
                        (story_item("Tall", TextArea::new("Notes", "notes").rows(8).render()))
                        (story_item("Error", TextArea::new("Description", "description")
                            .error("A description is required")
                            .render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"TextArea::new("Description", "description")
    .rows(8)
    .render()"#,
                    )))
                }
            },
            "Multi-line counterpart to the text field. Rows default to four.",
        )?,
    );

    registry.register(
        "Forms",
        story_about(
            "Checkbox",
            || {
                html! {
                    (story_section("States", html! {
                        (story_item("Unchecked", Checkbox::new("Email me updates", "updates").render()))
                        (story_item("Checked", Checkbox::new("Email me updates", "updates").checked(true).render()))
                        (story_item("Disabled", Checkbox::new("Legacy option", "legacy").disabled(true).render()))
                    }))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"Checkbox::new("Email me updates", "updates")
    .checked(true)
    .render()"#,
                    )))
                }
            },
            "Label-wrapped checkbox tinted with the accent color.",
        )?,
    );

    Ok(())
}
