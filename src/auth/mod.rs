//! Authentication layer: provider abstraction and process-wide auth state.
//!
//! This module owns the boundary to the authentication collaborator and the
//! single-writer state container that the rest of the core observes. The
//! provider delivers change notifications (sign-in, sign-out, initial state)
//! which the host shell feeds into the event loop; the tracker folds them into
//! `{current_user, is_loading}`.
//!
//! # Modules
//!
//! - [`provider`]: `AuthProvider` trait, error-code mapping, and the local
//!   reference implementation
//! - [`tracker`]: the `{current_user, is_loading}` observable container

pub mod provider;
pub mod tracker;

pub use provider::{AuthCode, AuthError, AuthProvider, LocalAuthProvider};
pub use tracker::AuthTracker;
