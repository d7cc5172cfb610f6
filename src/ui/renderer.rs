//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into [`ViewModel`]
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The renderer trusts the view model completely; it has no access to auth
//! or route state, so a public card cannot grow management affordances here.
//!
//! [`ViewModel`]: crate::ui::viewmodel::ViewModel

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Screen, ViewModel};

/// Default terminal width for separators.
const DEFAULT_COLS: usize = 72;

/// Renders the current screen to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate component sequence for the resolved screen.
pub fn render(state: &AppState) {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &ViewModel, theme: &Theme) {
    components::render_header(&vm.chrome, theme, DEFAULT_COLS);
    components::render_border(theme, DEFAULT_COLS);
    components::render_error(vm.error.as_deref(), theme);

    match &vm.screen {
        Screen::Landing => {
            println!(
                "{}Every pet deserves a way home.{}",
                Theme::fg(&theme.colors.text_normal),
                Theme::reset()
            );
            println!(
                "{}Scan a pet's tag to see its ID card, or sign in to manage your pets.{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
        Screen::Login => {
            println!(
                "{}login <email> <password>{}",
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset()
            );
        }
        Screen::Signup => {
            println!(
                "{}signup <email> <password>{}",
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset()
            );
        }
        Screen::PetList { items } => {
            components::render_pet_list(items, theme);
        }
        Screen::PetRegister { pet_id, prefill } => {
            components::render_register_form(pet_id.as_deref(), prefill.as_ref(), theme);
        }
        Screen::PetCard { mode, card } => {
            components::render_card(*mode, card, theme);
        }
        Screen::Profile { prefill } => {
            components::render_profile_form(prefill.as_ref(), theme);
        }
        Screen::NotFound { path } => {
            println!(
                "{}Nothing here: {path}{}",
                Theme::fg(&theme.colors.empty_state_fg),
                Theme::reset()
            );
        }
    }

    components::render_border(theme, DEFAULT_COLS);
    components::render_footer(footer_hints(vm), theme);
}

/// Picks the footer command hints for the screen.
fn footer_hints(vm: &ViewModel) -> &'static str {
    match &vm.screen {
        Screen::Landing => "login  signup  quit",
        Screen::Login | Screen::Signup => "save credentials above  back  quit",
        Screen::PetList { .. } => "open <id>  register  profile  logout  quit",
        Screen::PetRegister { .. } => "save ...  back  quit",
        Screen::PetCard { .. } => {
            if vm.chrome.show_back {
                "back  quit"
            } else {
                "quit"
            }
        }
        Screen::Profile { .. } => "save <name> <contact>  back  quit",
        Screen::NotFound { .. } => "back  quit",
    }
}
