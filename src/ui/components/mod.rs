//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different parts
//! of the interface, following a component-based architecture. Each component
//! prints a block of styled lines to stdout; the renderer sequences them per
//! screen.
//!
//! # Components
//!
//! - [`header`]: Screen title bar with back affordance
//! - [`card`]: Pet identification card (public and management)
//! - [`list`]: Pet list table
//! - [`form`]: Registration and profile form fields
//! - [`footer`]: Command hints

mod card;
mod footer;
mod form;
mod header;
mod list;

pub use card::render_card;
pub use footer::render_footer;
pub use form::{render_profile_form, render_register_form};
pub use header::render_header;
pub use list::render_pet_list;

use crate::ui::theme::Theme;

/// Prints a horizontal separator line.
pub fn render_border(theme: &Theme, cols: usize) {
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "\u{2500}".repeat(cols),
        Theme::reset()
    );
}

/// Prints the error banner, if a message is pending.
pub fn render_error(error: Option<&str>, theme: &Theme) {
    if let Some(message) = error {
        println!(
            "{}{}! {message}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.error_fg),
            Theme::reset()
        );
    }
}
