//! Header component renderer.
//!
//! Renders the screen title bar with centered text, theme-aware colors, and
//! the back affordance when the chrome calls for one.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChromeView;

/// Renders the header title bar.
///
/// Displays the title centered with bold styling. When the chrome carries a
/// back affordance, a `<` marker is shown at the left edge; the orphaned
/// scanned-card variant is visually identical, only the command it maps to
/// differs.
pub fn render_header(chrome: &ChromeView, theme: &Theme, cols: usize) {
    let back = if chrome.show_back { "< back" } else { "" };
    let title_len = chrome.title.len();
    let padding = (cols.saturating_sub(title_len)) / 2;

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{back:<width$}", width = padding);
    print!("{}", chrome.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    println!("{}", Theme::reset());
}
