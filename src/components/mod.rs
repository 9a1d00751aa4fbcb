//! Reusable UI Components
//!
//! This module provides the web component catalog: theme-aware, stateless
//! pieces that render [`maud::Markup`] and style themselves with semantic
//! Tailwind utilities.
//!
//! # Components
//!
//! - [`Button`] / [`IconButton`] - Buttons with color (Blue, Red, Green) and kind (Filled, Outline, Text)
//! - [`badge`] / [`count_badge`] - Labels and counters
//! - [`AssetCard`] - Preview card with cover, counters, and footer line
//! - [`ConfirmDialog`] - Modal confirmation with a dangerous variant
//! - [`Tooltip`] - Nine-point anchored tooltip
//! - [`Menu`] / [`MenuLine`] - Dropdown menus
//! - [`TextField`] / [`TextArea`] / [`Checkbox`] - Form fields
//! - [`Toast`] - Status toasts (Success, Warning, Error, Info)
//! - [`PageHeader`] / [`PageFooter`] - Page chrome
//! - [`Element`] - Custom-element embed driven by an attribute map
//!
//! # Design Patterns
//!
//! All components follow these patterns:
//! - **Builder pattern**: Fluent API with `.method()` chaining, `.render()` last
//! - **Semantic classes**: Colors come from theme tokens, never hardcoded hex
//! - **Stateless**: `render()` is a pure function of the builder's fields

pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod element;
#[cfg(test)]
mod element_tests;
pub mod form_fields;
pub mod layout;
pub mod menu;
pub mod page;
pub mod toast;
pub mod tooltip;

// Re-export commonly used types
pub use button::{Button, ButtonColor, ButtonKind, ButtonSize, IconButton};
#[allow(unused_imports)]
pub use badge::{badge, count_badge, BadgeTone};
#[allow(unused_imports)]
pub use card::{AssetCard, AssetKind};
#[allow(unused_imports)]
pub use dialog::ConfirmDialog;
#[allow(unused_imports)]
pub use element::Element;
#[allow(unused_imports)]
pub use form_fields::{Checkbox, TextArea, TextField, TextFieldKind};
#[allow(unused_imports)]
pub use layout::base_document;
#[allow(unused_imports)]
pub use menu::{Menu, MenuLine};
#[allow(unused_imports)]
pub use page::{FooterColumn, NavLink, PageFooter, PageHeader};
#[allow(unused_imports)]
pub use toast::{Toast, ToastVariant};
#[allow(unused_imports)]
pub use tooltip::{Anchor, Tooltip, TooltipKind};
