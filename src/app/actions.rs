//! Actions representing side effects to be executed by the host shell.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing input or system
//! events. Actions bridge pure state transformations and effectful operations
//! like navigating, calling the auth provider, or communicating with the
//! background worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host shell
//! executes these actions in sequence.

use crate::worker::StoreRequest;

/// Commands representing side effects to be executed by the host shell.
///
/// Actions are produced by the event handler and executed by the host. They
/// represent the boundary between pure state transformations and effectful
/// operations like navigation and worker communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the current history entry.
    ///
    /// Used for corrective redirects and post-mutation navigation where the
    /// replaced screen must not remain back-navigable.
    Replace {
        /// Target location.
        location: String,
    },

    /// Pushes a new history entry.
    ///
    /// Used for user-initiated navigation (opening a pet, the register form,
    /// the profile form).
    Push {
        /// Target location.
        location: String,
    },

    /// Pops the current history entry.
    Back,

    /// Asks the auth provider to sign an existing user in.
    ///
    /// The provider answers through its notification stream (fed back as
    /// [`Event::AuthChanged`]) or a failure surfaced as
    /// [`Event::AuthFailed`].
    ///
    /// [`Event::AuthChanged`]: crate::app::Event::AuthChanged
    /// [`Event::AuthFailed`]: crate::app::Event::AuthFailed
    SignIn {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Asks the auth provider to create and sign in a new user.
    SignUp {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Asks the auth provider to sign the current user out.
    SignOut,

    /// Posts a request to the background worker.
    ///
    /// Enables asynchronous document-store operations without blocking the
    /// event loop.
    PostToWorker(StoreRequest),

    /// Hands a shareable pet-card URL to the platform share affordance.
    Share {
        /// The public scanned-card URL.
        url: String,
    },
}
