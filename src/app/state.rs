//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with the view model computation that turns state into a
//! renderable screen. It serves as the single source of truth for all
//! transient UI state.
//!
//! # State Components
//!
//! - **Auth**: tracked provider state (`AuthTracker`), three-valued
//! - **Navigation**: current route, back availability, redirect episode
//! - **Deep link**: most recent inbound URL
//! - **Screen data**: pets list, the pet card under view, the user's profile
//!
//! # View Model Computation
//!
//! `compute_viewmodel` resolves the current route into a [`Screen`] plus
//! chrome. Rendering mode for a pet card is resolved from the route kind
//! alone: a `/details` route renders the management view, a `/scanned` route
//! the public view, regardless of who is signed in.
//!
//! [`Screen`]: crate::ui::viewmodel::Screen

use crate::auth::AuthTracker;
use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;
use crate::nav::{DeepLinkCapture, LinkBuilder, Redirector, Route};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChromeView, DetailActions, OwnerContactView, PetCardState, PetCardView, PetListItem,
    RenderMode, Screen, ViewModel,
};

/// Central application state container.
///
/// Mutated by the event handler in response to host input, auth
/// notifications, route changes, and worker responses. View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Tracked auth provider state.
    pub auth: AuthTracker,

    /// Most recent inbound deep link, if any.
    pub deep_link: DeepLinkCapture,

    /// Redirect decision state machine with its episode flags.
    pub redirector: Redirector,

    /// Route parsed from the most recent route-change event.
    pub route: Route,

    /// Whether the navigator reported a previous history entry.
    pub can_go_back: bool,

    /// The signed-in user's pets, most recently updated first.
    ///
    /// Loaded by the worker when the pet list route is entered; cleared on
    /// sign-out.
    pub pets: Vec<Pet>,

    /// The pet record backing the card currently under view.
    ///
    /// `None` before the worker answers, and also when the id resolved to
    /// nothing; `card_loaded` disambiguates the two.
    pub card_pet: Option<Pet>,

    /// Contact profile of the card pet's owner, joined by the worker.
    pub card_owner: Option<OwnerProfile>,

    /// Whether the pet card lookup has completed for the current route.
    pub card_loaded: bool,

    /// The signed-in user's own contact profile, for the profile form.
    pub profile: Option<OwnerProfile>,

    /// Most recent auth or store error, shown until the next event clears it.
    pub error_message: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Builder for shareable scanned-card URLs.
    pub link_builder: LinkBuilder,
}

impl AppState {
    /// Creates the initial application state.
    ///
    /// Auth starts loading, no link observed, no redirect performed, route at
    /// the landing screen.
    #[must_use]
    pub fn new(theme: Theme, link_builder: LinkBuilder) -> Self {
        Self {
            auth: AuthTracker::new(),
            deep_link: DeepLinkCapture::new(),
            redirector: Redirector::new(),
            route: Route::Landing,
            can_go_back: false,
            pets: Vec::new(),
            card_pet: None,
            card_owner: None,
            card_loaded: false,
            profile: None,
            error_message: None,
            theme,
            link_builder,
        }
    }

    /// Drops all data scoped to the signed-in user.
    ///
    /// Called on sign-out. The card data stays: the public scanned view does
    /// not belong to any user.
    pub fn clear_user_data(&mut self) {
        self.pets.clear();
        self.profile = None;
    }

    /// Resets the pet card slot ahead of a fresh lookup.
    pub fn reset_card(&mut self) {
        self.card_pet = None;
        self.card_owner = None;
        self.card_loaded = false;
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Resolves the route into a screen, attaches chrome (title, back
    /// affordance), and carries any pending error message.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ViewModel {
        ViewModel {
            chrome: self.compute_chrome(),
            screen: self.compute_screen(),
            error: self.error_message.clone(),
        }
    }

    /// Computes the chrome around the current screen.
    ///
    /// The back affordance shows when history can pop, and additionally on
    /// the scanned card for a signed-out viewer: a link arrival starts
    /// history at depth one, yet the viewer still needs a way to the landing
    /// screen. In that case back replaces instead of popping.
    fn compute_chrome(&self) -> ChromeView {
        let orphaned_scan = self.route.is_scanned() && self.auth.current_user().is_none();

        ChromeView {
            title: self.route_title().to_string(),
            show_back: self.can_go_back || orphaned_scan,
            back_replaces_to_landing: !self.can_go_back && orphaned_scan,
        }
    }

    /// Returns the chrome title for the current route.
    const fn route_title(&self) -> &'static str {
        match self.route {
            Route::Landing => "PetID",
            Route::Login => "Sign In",
            Route::Signup => "Create Account",
            Route::Pets => "My Pets",
            Route::PetRegister { .. } => "Register Pet",
            Route::PetDetails { .. } => "Pet Details",
            Route::PetScanned { .. } => "Pet ID Card",
            Route::Profile => "My Profile",
            Route::NotFound { .. } => "Not Found",
        }
    }

    /// Resolves the current route into a screen.
    fn compute_screen(&self) -> Screen {
        match &self.route {
            Route::Landing => Screen::Landing,
            Route::Login => Screen::Login,
            Route::Signup => Screen::Signup,
            Route::Pets => Screen::PetList {
                items: self.pets.iter().map(Self::pet_list_item).collect(),
            },
            Route::PetRegister { pet_id } => Screen::PetRegister {
                pet_id: pet_id.clone(),
                prefill: self.register_prefill(pet_id.as_deref()),
            },
            Route::PetDetails { .. } => Screen::PetCard {
                mode: RenderMode::Management,
                card: self.compute_card(RenderMode::Management),
            },
            Route::PetScanned { .. } => Screen::PetCard {
                mode: RenderMode::Public,
                card: self.compute_card(RenderMode::Public),
            },
            Route::Profile => Screen::Profile {
                prefill: self.profile.clone(),
            },
            Route::NotFound { path } => Screen::NotFound { path: path.clone() },
        }
    }

    /// Computes the card body for either rendering mode.
    ///
    /// The record and the owner join are identical in both modes; the modes
    /// differ only in whether management affordances are attached. The public
    /// view never carries them, whoever is signed in.
    fn compute_card(&self, mode: RenderMode) -> PetCardState {
        if !self.card_loaded {
            return PetCardState::Loading;
        }

        let Some(pet) = &self.card_pet else {
            return PetCardState::Missing;
        };

        let actions = match mode {
            RenderMode::Management => Some(DetailActions {
                pet_id: pet.id.clone(),
            }),
            RenderMode::Public => None,
        };

        PetCardState::Loaded(PetCardView {
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            sex: pet.sex.clone(),
            vaccinated: pet.vaccinated_label().to_string(),
            diseases: pet.diseases_label().to_string(),
            photo: pet.photo.clone(),
            updated_ago: pet.updated_ago(),
            owner: self.card_owner.as_ref().map(|profile| OwnerContactView {
                name: profile.name.clone(),
                contact: profile.contact.clone(),
            }),
            actions,
        })
    }

    /// Builds a list row for one pet.
    fn pet_list_item(pet: &Pet) -> PetListItem {
        PetListItem {
            pet_id: pet.id.clone(),
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            updated_ago: pet.updated_ago(),
        }
    }

    /// Builds the register-form prefill when editing an existing pet.
    ///
    /// The card slot holds the record (loaded when the edit route was
    /// entered); registration of a new pet starts from an empty form.
    fn register_prefill(&self, pet_id: Option<&str>) -> Option<PetForm> {
        let pet_id = pet_id?;
        let pet = self.card_pet.as_ref().filter(|pet| pet.id == pet_id)?;
        Some(PetForm {
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            sex: pet.sex.clone(),
            vaccinated: pet.vaccinated,
            diseases: pet.diseases.clone(),
            photo: pet.photo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            Theme::default(),
            LinkBuilder::new("petid", "share.petid.app"),
        )
    }

    fn sample_pet(id: &str, owner: &str) -> Pet {
        Pet {
            id: id.to_string(),
            owner_id: owner.to_string(),
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            sex: "Male".to_string(),
            vaccinated: true,
            diseases: None,
            photo: None,
            created_at: 0,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn scanned_route_renders_public_card_without_management_actions() {
        let mut state = state();
        // Owner signed in and viewing through the shared link.
        state.auth.apply(Some("owner-1".to_string()));
        state.route = Route::PetScanned {
            pet_id: "x1".to_string(),
        };
        state.card_pet = Some(sample_pet("x1", "owner-1"));
        state.card_loaded = true;

        let vm = state.compute_viewmodel();
        match vm.screen {
            Screen::PetCard {
                mode: RenderMode::Public,
                card: PetCardState::Loaded(card),
            } => assert!(card.actions.is_none()),
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[test]
    fn details_route_renders_management_actions() {
        let mut state = state();
        state.auth.apply(Some("owner-1".to_string()));
        state.route = Route::PetDetails {
            pet_id: "x1".to_string(),
        };
        state.card_pet = Some(sample_pet("x1", "owner-1"));
        state.card_loaded = true;

        let vm = state.compute_viewmodel();
        match vm.screen {
            Screen::PetCard {
                mode: RenderMode::Management,
                card: PetCardState::Loaded(card),
            } => assert_eq!(card.actions.unwrap().pet_id, "x1"),
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[test]
    fn unknown_pet_id_is_a_missing_card_state() {
        let mut state = state();
        state.route = Route::PetScanned {
            pet_id: "nope".to_string(),
        };
        state.card_loaded = true;

        let vm = state.compute_viewmodel();
        match vm.screen {
            Screen::PetCard { card, .. } => assert_eq!(card, PetCardState::Missing),
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[test]
    fn back_affordance_on_orphaned_scanned_card() {
        let mut state = state();
        state.auth.apply(None);
        state.route = Route::PetScanned {
            pet_id: "x1".to_string(),
        };
        state.can_go_back = false;

        let chrome = state.compute_viewmodel().chrome;
        assert!(chrome.show_back);
        assert!(chrome.back_replaces_to_landing);

        // A signed-in viewer with no history gets no affordance.
        state.auth.apply(Some("user-1".to_string()));
        let chrome = state.compute_viewmodel().chrome;
        assert!(!chrome.show_back);
    }

    #[test]
    fn register_prefill_requires_matching_card() {
        let mut state = state();
        state.card_pet = Some(sample_pet("x1", "owner-1"));
        state.card_loaded = true;

        assert!(state.register_prefill(Some("x1")).is_some());
        assert!(state.register_prefill(Some("other")).is_none());
        assert!(state.register_prefill(None).is_none());
    }
}
