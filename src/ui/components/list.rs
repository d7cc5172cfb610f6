//! Pet list component renderer.
//!
//! Renders the signed-in user's pets as a three-column table with ID, NAME,
//! and BREED columns plus a recency column.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PetListItem;

/// Renders the pet list table.
///
/// Shows an empty-state message when the user has no pets yet; otherwise a
/// header row followed by one row per pet, ids rendered in the accent color
/// so they read as the handle for the open command.
pub fn render_pet_list(items: &[PetListItem], theme: &Theme) {
    if items.is_empty() {
        println!(
            "{}No pets yet. Use `register` to add your first pet.{}",
            Theme::fg(&theme.colors.empty_state_fg),
            Theme::reset()
        );
        return;
    }

    println!(
        "{}{}{:<18} {:<20} {:<20} {}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        "ID",
        "NAME",
        "BREED",
        "UPDATED",
        Theme::reset()
    );

    for item in items {
        print!(
            "{}{:<18}{} ",
            Theme::fg(&theme.colors.accent_fg),
            item.pet_id,
            Theme::reset()
        );
        print!(
            "{}{:<20} {:<20}{} ",
            Theme::fg(&theme.colors.text_normal),
            item.name,
            item.breed,
            Theme::reset()
        );
        println!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            item.updated_ago,
            Theme::reset()
        );
    }
}
