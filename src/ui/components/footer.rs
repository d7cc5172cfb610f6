//! Footer component renderer.
//!
//! Renders the command hints for the current screen in dimmed text.

use crate::ui::theme::Theme;

/// Renders the footer command hints.
pub fn render_footer(hints: &str, theme: &Theme) {
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        hints,
        Theme::reset()
    );
}
