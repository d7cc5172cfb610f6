//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire dataset
//! - **Best for**: a single device's pets and profiles, infrequent writes

use crate::domain::error::{PetIdError, Result};
use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;
use crate::storage::backend::DocumentStore;
use crate::storage::models::{mint_pet_id, PetRecord, ProfileRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps pets and
/// profiles in a single object for better JSON structure and future
/// extensibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored pets, indexed by opaque id for O(1) lookups.
    #[serde(default)]
    pets: HashMap<String, PetRecord>,

    /// Owner contact profiles, indexed by user id.
    #[serde(default)]
    profiles: HashMap<String, ProfileRecord>,

    /// Monotonic counter feeding id generation.
    #[serde(default)]
    sequence: u64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            pets: HashMap::new(),
            profiles: HashMap::new(),
            sequence: 0,
        }
    }
}

/// JSON file storage backend.
///
/// Stores pets and profiles in a human-readable JSON file with atomic writes.
/// The entire dataset is kept in memory and persisted on modifications.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be used from a single
/// worker thread.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "pets": {
///     "9f2c41d07a3b58e6": {
///       "owner_id": "user-1",
///       "name": "Rex",
///       "breed": "Labrador",
///       "sex": "Male",
///       "vaccinated": true,
///       "diseases": null,
///       "photo": null,
///       "created_at": 1234567000,
///       "updated_at": 1234567890
///     }
///   },
///   "profiles": {
///     "user-1": {
///       "name": "Jane Doe",
///       "contact": "+1 555 0100",
///       "updated_at": 1234567890
///     }
///   },
///   "sequence": 1
/// }
/// ```
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StoreData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStore {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise creates a new empty
    /// store. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use petid::storage::JsonStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonStore::new(PathBuf::from("/tmp/petid.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            tracing::debug!("loading existing data");
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(
            pet_count = data.pets.len(),
            profile_count = data.profiles.len(),
            "store initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads store data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &PathBuf) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| PetIdError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            pets = data.pets.len(),
            profiles = data.profiles.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Saves store data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path. This ensures the file is never left in a corrupt state,
    /// even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails (should never happen with valid data)
    /// - Temporary file cannot be written
    /// - Rename operation fails (rare on POSIX systems)
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| PetIdError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("store saved successfully");
        Ok(())
    }
}

impl DocumentStore for JsonStore {
    fn pets_by_owner(&self, owner_id: &str) -> Result<Vec<Pet>> {
        let _span = tracing::debug_span!("json_pets_by_owner", owner_id = %owner_id).entered();

        let mut pets: Vec<Pet> = self
            .data
            .pets
            .iter()
            .filter(|(_, record)| record.owner_id == owner_id)
            .map(|(id, record)| record.to_pet(id))
            .collect();
        pets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        tracing::debug!(count = pets.len(), "retrieved pets");
        Ok(pets)
    }

    fn pet_by_id(&self, pet_id: &str) -> Result<Option<Pet>> {
        let _span = tracing::debug_span!("json_pet_by_id", pet_id = %pet_id).entered();

        let pet = self.data.pets.get(pet_id).map(|record| record.to_pet(pet_id));

        tracing::debug!(found = pet.is_some(), "pet lookup complete");
        Ok(pet)
    }

    fn upsert_pet(
        &mut self,
        acting_user: &str,
        pet_id: Option<&str>,
        form: &PetForm,
    ) -> Result<Pet> {
        let _span = tracing::debug_span!("json_upsert_pet",
            acting_user = %acting_user,
            pet_id = ?pet_id
        )
        .entered();

        let now = chrono::Utc::now().timestamp();

        let pet = if let Some(pet_id) = pet_id {
            let record = self
                .data
                .pets
                .get_mut(pet_id)
                .ok_or_else(|| PetIdError::NotFound(format!("pet not found: {pet_id}")))?;

            if record.owner_id != acting_user {
                return Err(PetIdError::Forbidden(format!(
                    "pet {pet_id} is not owned by the acting user"
                )));
            }

            tracing::debug!("updating existing pet");
            record.apply_form(form, now);
            record.to_pet(pet_id)
        } else {
            tracing::debug!("inserting new pet");
            self.data.sequence = self.data.sequence.wrapping_add(1);
            let id = mint_pet_id(acting_user, self.data.sequence);
            let record = PetRecord::from_form(acting_user, form, now);
            let pet = record.to_pet(&id);
            self.data.pets.insert(id, record);
            pet
        };

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(pet_id = %pet.id, "pet saved");
        Ok(pet)
    }

    fn delete_pet(&mut self, acting_user: &str, pet_id: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_pet",
            acting_user = %acting_user,
            pet_id = %pet_id
        )
        .entered();

        let record = self
            .data
            .pets
            .get(pet_id)
            .ok_or_else(|| PetIdError::NotFound(format!("pet not found: {pet_id}")))?;

        if record.owner_id != acting_user {
            return Err(PetIdError::Forbidden(format!(
                "pet {pet_id} is not owned by the acting user"
            )));
        }

        self.data.pets.remove(pet_id);
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("pet deleted");
        Ok(())
    }

    fn profile_by_id(&self, user_id: &str) -> Result<Option<OwnerProfile>> {
        let _span = tracing::debug_span!("json_profile_by_id", user_id = %user_id).entered();

        let profile = self.data.profiles.get(user_id).map(ProfileRecord::to_profile);

        tracing::debug!(found = profile.is_some(), "profile lookup complete");
        Ok(profile)
    }

    fn upsert_profile(&mut self, user_id: &str, name: &str, contact: &str) -> Result<OwnerProfile> {
        let _span = tracing::debug_span!("json_upsert_profile", user_id = %user_id).entered();

        let now = chrono::Utc::now().timestamp();
        let record = ProfileRecord::new(name, contact, now);
        let profile = record.to_profile();
        self.data.profiles.insert(user_id.to_string(), record);

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("profile saved");
        Ok(profile)
    }
}

impl Drop for JsonStore {
    /// Ensures data is saved on drop, even if a write failed earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("petid.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn create_assigns_id_owner_and_timestamps() {
        let (_dir, mut store) = temp_store();

        let form = PetForm::new("Rex", "Labrador", "Male");
        let pet = store.upsert_pet("user-1", None, &form).unwrap();

        assert!(!pet.id.is_empty());
        assert_eq!(pet.owner_id, "user-1");
        assert_eq!(pet.created_at, pet.updated_at);
        assert_eq!(store.pet_by_id(&pet.id).unwrap(), Some(pet));
    }

    #[test]
    fn update_keeps_owner_and_created_at() {
        let (_dir, mut store) = temp_store();

        let pet = store
            .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();

        let mut edited = PetForm::new("Rexy", "Labrador", "Male");
        edited.vaccinated = true;
        let updated = store.upsert_pet("user-1", Some(&pet.id), &edited).unwrap();

        assert_eq!(updated.id, pet.id);
        assert_eq!(updated.owner_id, "user-1");
        assert_eq!(updated.created_at, pet.created_at);
        assert_eq!(updated.name, "Rexy");
        assert!(updated.vaccinated);
    }

    #[test]
    fn non_owner_writes_are_forbidden() {
        let (_dir, mut store) = temp_store();

        let pet = store
            .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();

        let intruder_edit =
            store.upsert_pet("user-2", Some(&pet.id), &PetForm::new("X", "Y", "Z"));
        assert!(matches!(intruder_edit, Err(PetIdError::Forbidden(_))));

        let intruder_delete = store.delete_pet("user-2", &pet.id);
        assert!(matches!(intruder_delete, Err(PetIdError::Forbidden(_))));

        // The record is untouched.
        assert_eq!(store.pet_by_id(&pet.id).unwrap().unwrap().name, "Rex");
    }

    #[test]
    fn missing_pet_updates_and_deletes_are_not_found() {
        let (_dir, mut store) = temp_store();

        let edit = store.upsert_pet("user-1", Some("nope"), &PetForm::new("A", "B", "C"));
        assert!(matches!(edit, Err(PetIdError::NotFound(_))));
        assert!(matches!(
            store.delete_pet("user-1", "nope"),
            Err(PetIdError::NotFound(_))
        ));
    }

    #[test]
    fn pets_by_owner_filters_and_orders_by_recency() {
        let (_dir, mut store) = temp_store();

        let first = store
            .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();
        store
            .upsert_pet("user-1", None, &PetForm::new("Mia", "Siamese", "Female"))
            .unwrap();
        store
            .upsert_pet("user-2", None, &PetForm::new("Bob", "Beagle", "Male"))
            .unwrap();

        // Touch the first pet so it becomes the most recently updated.
        store
            .upsert_pet("user-1", Some(&first.id), &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();

        let pets = store.pets_by_owner("user-1").unwrap();
        assert_eq!(pets.len(), 2);
        assert!(pets.iter().all(|p| p.owner_id == "user-1"));
        assert!(pets[0].updated_at >= pets[1].updated_at);

        assert!(store.pets_by_owner("user-3").unwrap().is_empty());
    }

    #[test]
    fn anyone_can_read_a_pet_by_id() {
        let (_dir, mut store) = temp_store();

        let pet = store
            .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();

        // No acting user on the read path.
        assert!(store.pet_by_id(&pet.id).unwrap().is_some());
        assert_eq!(store.pet_by_id("unknown").unwrap(), None);
    }

    #[test]
    fn profiles_round_trip_per_user() {
        let (_dir, mut store) = temp_store();

        assert_eq!(store.profile_by_id("user-1").unwrap(), None);

        store
            .upsert_profile("user-1", "Jane Doe", "+1 555 0100")
            .unwrap();
        store
            .upsert_profile("user-1", "Jane Doe", "+1 555 0199")
            .unwrap();

        let profile = store.profile_by_id("user-1").unwrap().unwrap();
        assert_eq!(profile.contact, "+1 555 0199");
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("petid.json");

        let pet_id = {
            let mut store = JsonStore::new(path.clone()).unwrap();
            store
                .upsert_profile("user-1", "Jane Doe", "+1 555 0100")
                .unwrap();
            store
                .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
                .unwrap()
                .id
        };

        let store = JsonStore::new(path).unwrap();
        assert!(store.pet_by_id(&pet_id).unwrap().is_some());
        assert!(store.profile_by_id("user-1").unwrap().is_some());
    }
}
