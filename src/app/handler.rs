//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes host input,
//! auth notifications, route changes, and worker responses, translating them
//! into state changes and action sequences. It serves as the primary control
//! flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host shell or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Auth**: `AuthChanged`, `AuthFailed`, form submissions, logout
//! - **Navigation**: `LinkOpened`, `RouteChanged`, screen openers, `BackPressed`
//! - **Mutations**: pet save/delete, profile save, share
//! - **Worker**: `StoreResponse` with typed result variants

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::pet::PetForm;
use crate::nav::Route;
use crate::worker::{StoreRequest, StoreResponse};

/// Events triggered by host input, system changes, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reports an auth provider notification.
    ///
    /// Fired once when the initial auth state resolves, and again on every
    /// sign-in and sign-out. Re-arms the redirect episode and re-evaluates
    /// the redirect rules.
    AuthChanged {
        /// The signed-in user's id, or `None` when signed out.
        user: Option<String>,
    },

    /// Reports a failed sign-in or sign-up attempt.
    ///
    /// Carries the user-facing message mapped from the provider's error
    /// code. No state beyond the message changes; the form stays put.
    AuthFailed {
        /// User-facing error message.
        message: String,
    },

    /// Reports an inbound deep link observed by the host.
    LinkOpened {
        /// The activating URL, verbatim.
        url: String,
    },

    /// Reports that the navigator's current location changed.
    ///
    /// Fired after every replace, push, and pop, including the ones this
    /// handler itself requested.
    RouteChanged {
        /// The new current location.
        location: String,
        /// Whether a previous history entry exists.
        can_go_back: bool,
    },

    /// Submits the sign-in form.
    SubmitLogin { email: String, password: String },

    /// Submits the account creation form.
    SubmitSignup { email: String, password: String },

    /// Requests sign-out of the current user.
    LogoutRequested,

    /// Opens the sign-in form from the landing screen.
    OpenLogin,

    /// Opens the account creation form from the landing screen.
    OpenSignup,

    /// Opens one pet's management view from the pet list.
    OpenPet { pet_id: String },

    /// Opens the registration form, optionally editing an existing pet.
    OpenRegister { pet_id: Option<String> },

    /// Opens the owner contact profile form.
    OpenProfile,

    /// Reports that the user pressed the back control.
    BackPressed,

    /// Submits the registration form.
    SavePetRequested {
        /// Existing pet id when editing, `None` when registering.
        pet_id: Option<String>,
        /// Submitted form fields.
        form: PetForm,
    },

    /// Requests deletion of a pet from its management view.
    DeletePetRequested { pet_id: String },

    /// Submits the profile form.
    SaveProfileRequested { name: String, contact: String },

    /// Requests the share affordance for a pet's public card.
    SharePetRequested { pet_id: String },

    /// Wraps a response from the background worker.
    StoreResponse(StoreResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the host shell.
///
/// # Returns
///
/// A `(render, actions)` pair: whether the screen should be redrawn, and the
/// side effects to run in sequence.
///
/// # Errors
///
/// Returns errors from state mutation methods. Worker and auth failures do
/// not error here; they arrive as their own events and become screen state.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::AuthChanged { user } => {
            let was_loading = state.auth.is_loading();
            let changed = state.auth.apply(user.clone());
            state.error_message = None;

            if changed && user.is_none() {
                state.clear_user_data();
            }

            // The initial resolution after a consumed deep link must not
            // open a fresh episode: the viewer stays on the shared card
            // rather than being pulled to an auth default.
            let arrival_via_link = was_loading && state.redirector.episode().deep_link_consumed();
            if arrival_via_link {
                tracing::debug!("auth resolved during link arrival, episode kept");
            } else {
                state.redirector.rearm();
            }

            let mut actions = vec![];
            if let Some(target) = state.redirector.evaluate(&state.auth, &state.deep_link) {
                actions.push(Action::Replace { location: target });
            }
            Ok((true, actions))
        }

        Event::AuthFailed { message } => {
            tracing::debug!(message = %message, "auth attempt failed");
            state.error_message = Some(message.clone());
            Ok((true, vec![]))
        }

        Event::LinkOpened { url } => {
            state.deep_link.observe(url.clone());

            let mut actions = vec![];
            if let Some(target) = state.redirector.evaluate(&state.auth, &state.deep_link) {
                actions.push(Action::Replace { location: target });
            }
            Ok((false, actions))
        }

        Event::RouteChanged {
            location,
            can_go_back,
        } => {
            state.route = Route::parse(location);
            state.can_go_back = *can_go_back;
            state.error_message = None;

            tracing::debug!(
                route = ?state.route,
                can_go_back = can_go_back,
                "route changed"
            );

            let mut actions = vec![];
            match &state.route {
                Route::Pets => {
                    if let Some(user) = state.auth.current_user() {
                        actions.push(Action::PostToWorker(StoreRequest::load_pets(
                            user.to_string(),
                        )));
                    }
                }
                Route::PetDetails { pet_id } | Route::PetScanned { pet_id } => {
                    let pet_id = pet_id.clone();
                    state.reset_card();
                    actions.push(Action::PostToWorker(StoreRequest::load_pet_card(pet_id)));
                }
                Route::PetRegister {
                    pet_id: Some(pet_id),
                } => {
                    // Prefill for editing rides the card slot.
                    let pet_id = pet_id.clone();
                    state.reset_card();
                    actions.push(Action::PostToWorker(StoreRequest::load_pet_card(pet_id)));
                }
                Route::Profile => {
                    if let Some(user) = state.auth.current_user() {
                        actions.push(Action::PostToWorker(StoreRequest::load_profile(
                            user.to_string(),
                        )));
                    }
                }
                _ => {}
            }

            // Route changes re-enter the redirect rules; after a performed
            // redirect this stops at the guard.
            if let Some(target) = state.redirector.evaluate(&state.auth, &state.deep_link) {
                actions.push(Action::Replace { location: target });
            }

            Ok((true, actions))
        }

        Event::SubmitLogin { email, password } => {
            state.error_message = None;
            Ok((
                true,
                vec![Action::SignIn {
                    email: email.clone(),
                    password: password.clone(),
                }],
            ))
        }

        Event::SubmitSignup { email, password } => {
            state.error_message = None;
            Ok((
                true,
                vec![Action::SignUp {
                    email: email.clone(),
                    password: password.clone(),
                }],
            ))
        }

        Event::LogoutRequested => Ok((false, vec![Action::SignOut])),

        Event::OpenLogin => Ok((
            false,
            vec![Action::Push {
                location: Route::Login.path(),
            }],
        )),

        Event::OpenSignup => Ok((
            false,
            vec![Action::Push {
                location: Route::Signup.path(),
            }],
        )),

        Event::OpenPet { pet_id } => Ok((
            false,
            vec![Action::Push {
                location: Route::PetDetails {
                    pet_id: pet_id.clone(),
                }
                .path(),
            }],
        )),

        Event::OpenRegister { pet_id } => Ok((
            false,
            vec![Action::Push {
                location: Route::PetRegister {
                    pet_id: pet_id.clone(),
                }
                .path(),
            }],
        )),

        Event::OpenProfile => Ok((
            false,
            vec![Action::Push {
                location: Route::Profile.path(),
            }],
        )),

        Event::BackPressed => {
            if state.can_go_back {
                return Ok((false, vec![Action::Back]));
            }

            // A signed-out viewer who arrived on the scanned card through a
            // link has no history to pop; back takes them to the landing
            // screen by replacement.
            if state.route.is_scanned() && state.auth.current_user().is_none() {
                return Ok((
                    false,
                    vec![Action::Replace {
                        location: Route::Landing.path(),
                    }],
                ));
            }

            tracing::debug!("back pressed with nowhere to go");
            Ok((false, vec![]))
        }

        Event::SavePetRequested { pet_id, form } => {
            let Some(user) = state.auth.current_user() else {
                tracing::debug!("pet save without a signed-in user");
                return Ok((false, vec![]));
            };

            Ok((
                false,
                vec![Action::PostToWorker(StoreRequest::save_pet(
                    user.to_string(),
                    pet_id.clone(),
                    form.clone(),
                ))],
            ))
        }

        Event::DeletePetRequested { pet_id } => {
            let Some(user) = state.auth.current_user() else {
                tracing::debug!("pet delete without a signed-in user");
                return Ok((false, vec![]));
            };

            Ok((
                false,
                vec![Action::PostToWorker(StoreRequest::delete_pet(
                    user.to_string(),
                    pet_id.clone(),
                ))],
            ))
        }

        Event::SaveProfileRequested { name, contact } => {
            let Some(user) = state.auth.current_user() else {
                tracing::debug!("profile save without a signed-in user");
                return Ok((false, vec![]));
            };

            Ok((
                false,
                vec![Action::PostToWorker(StoreRequest::save_profile(
                    user.to_string(),
                    name.clone(),
                    contact.clone(),
                ))],
            ))
        }

        Event::SharePetRequested { pet_id } => Ok((
            false,
            vec![Action::Share {
                url: state.link_builder.scanned_url(pet_id),
            }],
        )),

        Event::StoreResponse(response) => match response {
            StoreResponse::PetsLoaded { pets } => {
                if &state.pets == pets {
                    tracing::debug!("pets unchanged, skipping render");
                    Ok((false, vec![]))
                } else {
                    state.pets.clone_from(pets);
                    Ok((true, vec![]))
                }
            }

            StoreResponse::PetCardLoaded { pet, owner } => {
                state.card_pet.clone_from(pet);
                state.card_owner.clone_from(owner);
                state.card_loaded = true;
                Ok((true, vec![]))
            }

            StoreResponse::ProfileLoaded { profile } => {
                state.profile.clone_from(profile);
                Ok((true, vec![]))
            }

            StoreResponse::PetSaved { pet } => {
                tracing::debug!(pet_id = %pet.id, "pet saved, leaving the form");
                Ok((false, vec![after_mutation_nav(state)]))
            }

            StoreResponse::PetDeleted { pet_id } => {
                tracing::debug!(pet_id = %pet_id, "pet deleted");
                Ok((
                    false,
                    vec![Action::Replace {
                        location: Route::Pets.path(),
                    }],
                ))
            }

            StoreResponse::ProfileSaved { profile } => {
                state.profile = Some(profile.clone());
                Ok((false, vec![after_mutation_nav(state)]))
            }

            StoreResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                state.error_message = Some(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

/// Picks the navigation that leaves a completed form.
///
/// Pops back to the originating screen when history allows; a form reached
/// without history (unlikely, but possible through a stale link) falls back
/// to replacing with the pet list.
fn after_mutation_nav(state: &AppState) -> Action {
    if state.can_go_back {
        Action::Back
    } else {
        Action::Replace {
            location: Route::Pets.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::LinkBuilder;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            Theme::default(),
            LinkBuilder::new("petid", "share.petid.app"),
        )
    }

    fn replaces(actions: &[Action]) -> Vec<&str> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Replace { location } => Some(location.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cold_start_signed_out_replaces_to_landing_exactly_once() {
        let mut state = state();

        // Route settles before auth resolves; nothing fires yet.
        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/".to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        assert!(replaces(&actions).is_empty());

        let (_, actions) = handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();
        assert_eq!(replaces(&actions), vec!["/"]);

        // The echo of that replace does not fire again.
        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/".to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        assert!(replaces(&actions).is_empty());
    }

    #[test]
    fn link_arrival_wins_and_survives_auth_resolution() {
        let mut state = state();

        let url = "petid://share.petid.app/pets/abc123/scanned";
        let (_, actions) = handle_event(
            &mut state,
            &Event::LinkOpened {
                url: url.to_string(),
            },
        )
        .unwrap();
        assert_eq!(replaces(&actions), vec![url]);

        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: url.to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        assert!(replaces(&actions).is_empty());

        // Auth resolving to a signed-in user must not pull the viewer to
        // the pet list.
        let (_, actions) = handle_event(
            &mut state,
            &Event::AuthChanged {
                user: Some("owner-1".to_string()),
            },
        )
        .unwrap();
        assert!(replaces(&actions).is_empty());
    }

    #[test]
    fn back_on_orphaned_scanned_card_replaces_to_landing() {
        let mut state = state();

        handle_event(
            &mut state,
            &Event::LinkOpened {
                url: "/pets/abc123/scanned".to_string(),
            },
        )
        .unwrap();
        handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/pets/abc123/scanned".to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::BackPressed).unwrap();
        assert_eq!(
            actions,
            vec![Action::Replace {
                location: "/".to_string()
            }]
        );
    }

    #[test]
    fn back_pops_history_when_available() {
        let mut state = state();
        state.can_go_back = true;

        let (_, actions) = handle_event(&mut state, &Event::BackPressed).unwrap();
        assert_eq!(actions, vec![Action::Back]);
    }

    #[test]
    fn sign_out_replaces_to_landing_exactly_once() {
        let mut state = state();

        handle_event(
            &mut state,
            &Event::AuthChanged {
                user: Some("owner-1".to_string()),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();
        assert_eq!(replaces(&actions), vec!["/"]);
        assert!(state.pets.is_empty());

        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/".to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        assert!(replaces(&actions).is_empty());
    }

    #[test]
    fn sign_in_redirects_to_pet_list() {
        let mut state = state();

        handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();
        let (_, actions) = handle_event(
            &mut state,
            &Event::AuthChanged {
                user: Some("owner-1".to_string()),
            },
        )
        .unwrap();
        assert_eq!(replaces(&actions), vec!["/pets"]);
    }

    #[test]
    fn entering_pet_routes_requests_card_loads() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::AuthChanged {
                user: Some("owner-1".to_string()),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/pets/x1/details".to_string(),
                can_go_back: true,
            },
        )
        .unwrap();
        assert!(actions.iter().any(|action| matches!(
            action,
            Action::PostToWorker(StoreRequest::LoadPetCard { pet_id, .. }) if pet_id == "x1"
        )));
        assert!(!state.card_loaded);
    }

    #[test]
    fn pet_list_route_loads_only_for_a_signed_in_user() {
        let mut state = state();
        handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::RouteChanged {
                location: "/pets".to_string(),
                can_go_back: false,
            },
        )
        .unwrap();
        assert!(!actions
            .iter()
            .any(|action| matches!(action, Action::PostToWorker(_))));
    }

    #[test]
    fn mutations_require_a_signed_in_user() {
        let mut state = state();
        handle_event(&mut state, &Event::AuthChanged { user: None }).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::SavePetRequested {
                pet_id: None,
                form: PetForm::new("Rex", "Labrador", "Male"),
            },
        )
        .unwrap();
        assert!(actions.is_empty());

        let (_, actions) = handle_event(
            &mut state,
            &Event::DeletePetRequested {
                pet_id: "x1".to_string(),
            },
        )
        .unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn share_builds_the_public_card_url() {
        let mut state = state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::SharePetRequested {
                pet_id: "abc123".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![Action::Share {
                url: "petid://share.petid.app/pets/abc123/scanned".to_string()
            }]
        );
    }

    #[test]
    fn auth_failure_surfaces_as_screen_error() {
        let mut state = state();
        let (render, _) = handle_event(
            &mut state,
            &Event::AuthFailed {
                message: "Incorrect password. Please try again.".to_string(),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Incorrect password. Please try again.")
        );
    }

    #[test]
    fn save_response_leaves_the_form() {
        let mut state = state();
        state.can_go_back = true;

        let pet = crate::domain::Pet {
            id: "x1".to_string(),
            owner_id: "owner-1".to_string(),
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            sex: "Male".to_string(),
            vaccinated: false,
            diseases: None,
            photo: None,
            created_at: 0,
            updated_at: 0,
        };
        let (_, actions) = handle_event(
            &mut state,
            &Event::StoreResponse(StoreResponse::PetSaved { pet }),
        )
        .unwrap();
        assert_eq!(actions, vec![Action::Back]);
    }
}
