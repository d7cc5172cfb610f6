//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like badge labels and affordance
//! availability.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.
//! In particular, the public/management split of the pet card is already
//! resolved here: the renderer never consults auth or route state.

use crate::domain::pet::PetForm;
use crate::domain::profile::OwnerProfile;

/// Complete view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Chrome around the screen (title, back affordance).
    pub chrome: ChromeView,

    /// The screen resolved from the current route.
    pub screen: Screen,

    /// Pending error banner, if any.
    pub error: Option<String>,
}

/// Chrome display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeView {
    /// Screen title.
    pub title: String,

    /// Whether the back affordance is shown.
    pub show_back: bool,

    /// Whether pressing back replaces to the landing screen instead of
    /// popping history (the orphaned scanned-card case).
    pub back_replaces_to_landing: bool,
}

/// Rendering mode for a pet's identification card.
///
/// Resolved from the route kind alone, never from auth state: a `/scanned`
/// route is public even when its owner is the one viewing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Read-only card reachable by anyone holding the shared link.
    Public,
    /// Owner's view with edit, delete, and share affordances.
    Management,
}

/// One screenful of display-ready data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Unauthenticated landing screen with sign-in/sign-up entries.
    Landing,

    /// Sign-in form.
    Login,

    /// Account creation form.
    Signup,

    /// The signed-in user's pet list.
    PetList {
        /// List rows, most recently updated first.
        items: Vec<PetListItem>,
    },

    /// Pet registration form.
    PetRegister {
        /// Existing pet id when editing.
        pet_id: Option<String>,
        /// Field values to prefill when editing.
        prefill: Option<PetForm>,
    },

    /// A pet's identification card in either rendering mode.
    PetCard {
        /// Public or management rendering.
        mode: RenderMode,
        /// Loading, missing, or loaded card body.
        card: PetCardState,
    },

    /// Owner contact profile form.
    Profile {
        /// Stored profile to prefill, if the user ever saved one.
        prefill: Option<OwnerProfile>,
    },

    /// Unknown location.
    NotFound {
        /// The unmatched location, for display.
        path: String,
    },
}

/// Loading lifecycle of the pet card under view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetCardState {
    /// The worker has not answered yet.
    Loading,

    /// The id resolved to no record. A screen state, not an error.
    Missing,

    /// The card body, ready to render.
    Loaded(PetCardView),
}

/// Display information for one row of the pet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetListItem {
    /// Opaque pet id, used by the open command.
    pub pet_id: String,

    /// Pet name.
    pub name: String,

    /// Breed description.
    pub breed: String,

    /// Human-readable time since last update.
    pub updated_ago: String,
}

/// Display-ready pet identification card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCardView {
    /// Pet name.
    pub name: String,

    /// Breed description.
    pub breed: String,

    /// Sex of the pet.
    pub sex: String,

    /// Vaccination badge label ("Yes" / "No").
    pub vaccinated: String,

    /// Medical notes label ("None" when absent).
    pub diseases: String,

    /// Photo reference, if one was attached.
    pub photo: Option<String>,

    /// Human-readable time since last update.
    pub updated_ago: String,

    /// Owner contact section, when the owner saved a profile.
    pub owner: Option<OwnerContactView>,

    /// Management affordances. `None` on the public card, always.
    pub actions: Option<DetailActions>,
}

/// Owner contact section of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContactView {
    /// Owner display name.
    pub name: String,

    /// Contact information.
    pub contact: String,
}

/// Management affordances attached to an owned card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailActions {
    /// Pet id the edit/delete/share commands target.
    pub pet_id: String,
}
