//! Page chrome stories: header and footer

use maud::html;

use crate::components::{FooterColumn, NavLink, PageFooter, PageHeader};
use crate::error::Result;
use crate::storybook::{code_block, story_about, story_divider, story_section, StoryRegistry};

pub fn register(registry: &mut StoryRegistry) -> Result<()> {
    registry.register(
        "Page",
        story_about(
            "Header",
            || {
                html! {
                    (story_section("Signed in", PageHeader::new("Vitrine")
                        .link(NavLink::new("Create", "/create").active(true))
                        .link(NavLink::new("Library", "/library"))
                        .link(NavLink::new("Community", "/community"))
                        .user("Dina")
                        .render()))
                    (story_section("Signed out", PageHeader::new("Vitrine")
                        .link(NavLink::new("Create", "/create"))
                        .link(NavLink::new("Library", "/library"))
                        .render()))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"PageHeader::new("Vitrine")
    .link(NavLink::new("Create", "/create").active(true))
    .user("Dina")
    .render()"#,
                    )))
                }
            },
            "Top navigation bar with the brand, a link row, and an optional signed-in \
             user chip. The active link is highlighted.",
        )?,
    );

    registry.register(
        "Page",
        story_about(
            "Footer",
            || {
                html! {
                    (story_section("Full", PageFooter::new()
                        .column(FooterColumn::new("Product")
                            .link("Create", "/create")
                            .link("Library", "/library")
                            .link("Pricing", "/pricing"))
                        .column(FooterColumn::new("Support")
                            .link("Help center", "/help")
                            .link("Contact us", "/contact"))
                        .column(FooterColumn::new("Legal")
                            .link("Terms", "/terms")
                            .link("Privacy", "/privacy"))
                        .fine_print("© 2026 Vitrine. All rights reserved.")
                        .render()))
                    (story_divider())
                    (story_section("Usage", code_block(
                        r#"PageFooter::new()
    .column(FooterColumn::new("Support")
        .link("Help center", "/help"))
    .fine_print("© 2026 Vitrine.")
    .render()"#,
                    )))
                }
            },
            "Link columns over a fine-print line.",
        )?,
    );

    Ok(())
}
