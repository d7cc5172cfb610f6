//! Pet identification card component renderer.
//!
//! Renders the card body in either rendering mode. The two modes print the
//! same record fields and owner contact section; the management variant
//! additionally lists the edit, delete, and share affordances.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PetCardState, PetCardView, RenderMode};

/// Renders the pet card for the current route.
pub fn render_card(mode: RenderMode, card: &PetCardState, theme: &Theme) {
    match card {
        PetCardState::Loading => {
            println!(
                "{}Loading...{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
        PetCardState::Missing => {
            println!(
                "{}Pet not found.{}",
                Theme::fg(&theme.colors.empty_state_fg),
                Theme::reset()
            );
            println!(
                "{}The link may be wrong, or the record was deleted.{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
        PetCardState::Loaded(view) => render_loaded(mode, view, theme),
    }
}

fn render_loaded(mode: RenderMode, view: &PetCardView, theme: &Theme) {
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        view.name,
        Theme::reset()
    );

    if let Some(photo) = &view.photo {
        println!(
            "{}[photo: {photo}]{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }

    render_field("Breed", &view.breed, &theme.colors.text_normal, theme);
    render_field("Sex", &view.sex, &theme.colors.text_normal, theme);

    let vaccinated_color = if view.vaccinated == "Yes" {
        &theme.colors.ok_fg
    } else {
        &theme.colors.warn_fg
    };
    render_field("Vaccinated", &view.vaccinated, vaccinated_color, theme);

    let diseases_color = if view.diseases == "None" {
        &theme.colors.text_dim
    } else {
        &theme.colors.warn_fg
    };
    render_field("Diseases", &view.diseases, diseases_color, theme);

    match &view.owner {
        Some(owner) => {
            println!(
                "{}{}Owner contact{}",
                Theme::bold(),
                Theme::fg(&theme.colors.header_fg),
                Theme::reset()
            );
            render_field("Name", &owner.name, &theme.colors.text_normal, theme);
            render_field("Contact", &owner.contact, &theme.colors.text_normal, theme);
        }
        None => {
            println!(
                "{}Owner contact not provided.{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
    }

    println!(
        "{}Updated {}{}",
        Theme::fg(&theme.colors.text_dim),
        view.updated_ago,
        Theme::reset()
    );

    if matches!(mode, RenderMode::Management) {
        if let Some(actions) = &view.actions {
            println!(
                "{}edit {id}  delete {id}  share {id}{}",
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset(),
                id = actions.pet_id,
            );
        }
    }
}

fn render_field(label: &str, value: &str, value_color: &str, theme: &Theme) {
    println!(
        "{}{label:<12}{} {}{value}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset(),
        Theme::fg(value_color),
        Theme::reset()
    );
}
