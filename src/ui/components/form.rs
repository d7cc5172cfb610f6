//! Form component renderers.
//!
//! The shell collects form input through commands, so the form screens render
//! as field summaries: current (or prefilled) values plus the command that
//! submits them.

use crate::domain::pet::PetForm;
use crate::domain::profile::OwnerProfile;
use crate::ui::theme::Theme;

/// Renders the pet registration form.
///
/// When editing, the prefill carries the existing record's values; a fresh
/// registration shows the expected fields.
pub fn render_register_form(pet_id: Option<&str>, prefill: Option<&PetForm>, theme: &Theme) {
    match pet_id {
        Some(pet_id) => println!(
            "{}Editing pet {pet_id}{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
        None => println!(
            "{}Registering a new pet{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
    }

    match prefill {
        Some(form) => {
            render_field("Name", &form.name, theme);
            render_field("Breed", &form.breed, theme);
            render_field("Sex", &form.sex, theme);
            render_field("Vaccinated", if form.vaccinated { "yes" } else { "no" }, theme);
            render_field("Diseases", form.diseases.as_deref().unwrap_or("-"), theme);
        }
        None => {
            println!(
                "{}Fields: name, breed, sex, vaccinated, diseases{}",
                Theme::fg(&theme.colors.text_normal),
                Theme::reset()
            );
        }
    }

    println!(
        "{}save <name> <breed> <sex> [--vaccinated] [--diseases <text>]{}",
        Theme::fg(&theme.colors.accent_fg),
        Theme::reset()
    );
}

/// Renders the owner contact profile form.
pub fn render_profile_form(prefill: Option<&OwnerProfile>, theme: &Theme) {
    match prefill {
        Some(profile) => {
            render_field("Name", &profile.name, theme);
            render_field("Contact", &profile.contact, theme);
        }
        None => {
            println!(
                "{}No profile saved yet. Your pets' cards show no contact details.{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
    }

    println!(
        "{}save <name> <contact>{}",
        Theme::fg(&theme.colors.accent_fg),
        Theme::reset()
    );
}

fn render_field(label: &str, value: &str, theme: &Theme) {
    println!(
        "{}{label:<12}{} {}{value}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset(),
        Theme::fg(&theme.colors.text_normal),
        Theme::reset()
    );
}
