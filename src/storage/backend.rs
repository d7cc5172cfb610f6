//! Storage backend abstraction.
//!
//! This module defines the [`DocumentStore`] trait that abstracts over
//! different persistence backends. This allows seamless switching between
//! storage implementations without changing business logic.
//!
//! # Design Philosophy
//!
//! The trait is designed to be minimal and focused on the actual operations
//! needed by the application, not a generic ORM. Each method maps directly to
//! a use case in the worker thread. Ownership enforcement lives here at the
//! data boundary: write operations take the acting user and reject writes
//! against records the user does not own, so no caller path can bypass the
//! check.
//!
//! Reads of a single pet by id are deliberately unauthenticated. The public
//! scanned card must open for anyone holding the shared link; knowing the
//! opaque id is the capability.

use crate::domain::error::Result;
use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;

/// Abstraction over persistent pet and profile storage.
///
/// # Implementations
///
/// - [`JsonStore`]: JSON file with atomic writes (default)
/// - [`MemoryStore`]: in-memory, for tests and ephemeral runs
///
/// # Examples
///
/// ```no_run
/// use petid::storage::{DocumentStore, JsonStore};
/// use petid::domain::PetForm;
/// use std::path::PathBuf;
///
/// let mut store = JsonStore::new(PathBuf::from("/tmp/petid.json"))?;
/// let form = PetForm::new("Rex", "Labrador", "male");
/// let pet = store.upsert_pet("user-1", None, &form)?;
/// let card = store.pet_by_id(&pet.id)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`JsonStore`]: crate::storage::JsonStore
/// [`MemoryStore`]: crate::storage::MemoryStore
pub trait DocumentStore: Send {
    /// Retrieves all pets owned by `owner_id`.
    ///
    /// Returns an empty list for an unknown owner. Ordering is most recently
    /// updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn pets_by_owner(&self, owner_id: &str) -> Result<Vec<Pet>>;

    /// Retrieves a single pet by its opaque id.
    ///
    /// Returns `Ok(None)` if no pet has this id. No ownership check: the
    /// public scanned card reads through this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn pet_by_id(&self, pet_id: &str) -> Result<Option<Pet>>;

    /// Creates or updates a pet record on behalf of `acting_user`.
    ///
    /// With `pet_id: None`, creates a new record: assigns an opaque id,
    /// stamps `owner_id` from the acting user, and sets both timestamps.
    /// With `pet_id: Some(_)`, updates the existing record's form fields and
    /// refreshes `updated_at`; the owner stamp never changes.
    ///
    /// # Errors
    ///
    /// Returns [`PetIdError::NotFound`] when updating an id that does not
    /// exist, and [`PetIdError::Forbidden`] when `acting_user` does not own
    /// the targeted record.
    ///
    /// [`PetIdError::NotFound`]: crate::domain::PetIdError::NotFound
    /// [`PetIdError::Forbidden`]: crate::domain::PetIdError::Forbidden
    fn upsert_pet(&mut self, acting_user: &str, pet_id: Option<&str>, form: &PetForm)
        -> Result<Pet>;

    /// Deletes a pet record on behalf of `acting_user`.
    ///
    /// # Errors
    ///
    /// Returns [`PetIdError::NotFound`] for an unknown id and
    /// [`PetIdError::Forbidden`] when `acting_user` does not own the record.
    ///
    /// [`PetIdError::NotFound`]: crate::domain::PetIdError::NotFound
    /// [`PetIdError::Forbidden`]: crate::domain::PetIdError::Forbidden
    fn delete_pet(&mut self, acting_user: &str, pet_id: &str) -> Result<()>;

    /// Retrieves the contact profile of `user_id`.
    ///
    /// Returns `Ok(None)` if the user has not saved a profile. The scanned
    /// card joins this against the pet's owner stamp, so no ownership check
    /// applies here either.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn profile_by_id(&self, user_id: &str) -> Result<Option<OwnerProfile>>;

    /// Creates or replaces the contact profile of `user_id`.
    ///
    /// Profiles are keyed by the user's own id, so the acting user is the
    /// key; there is no cross-user write path to guard.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn upsert_profile(&mut self, user_id: &str, name: &str, contact: &str)
        -> Result<OwnerProfile>;
}
