//! In-memory storage backend.
//!
//! Backs the handler and worker tests, and ephemeral runs where nothing
//! should touch the disk. Semantics mirror [`JsonStore`] exactly, ownership
//! enforcement included, minus persistence.
//!
//! [`JsonStore`]: crate::storage::JsonStore

use crate::domain::error::{PetIdError, Result};
use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;
use crate::storage::backend::DocumentStore;
use crate::storage::models::{mint_pet_id, PetRecord, ProfileRecord};
use std::collections::HashMap;

/// Volatile document store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pets: HashMap<String, PetRecord>,
    profiles: HashMap<String, ProfileRecord>,
    sequence: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn pets_by_owner(&self, owner_id: &str) -> Result<Vec<Pet>> {
        let mut pets: Vec<Pet> = self
            .pets
            .iter()
            .filter(|(_, record)| record.owner_id == owner_id)
            .map(|(id, record)| record.to_pet(id))
            .collect();
        pets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(pets)
    }

    fn pet_by_id(&self, pet_id: &str) -> Result<Option<Pet>> {
        Ok(self.pets.get(pet_id).map(|record| record.to_pet(pet_id)))
    }

    fn upsert_pet(
        &mut self,
        acting_user: &str,
        pet_id: Option<&str>,
        form: &PetForm,
    ) -> Result<Pet> {
        let now = chrono::Utc::now().timestamp();

        if let Some(pet_id) = pet_id {
            let record = self
                .pets
                .get_mut(pet_id)
                .ok_or_else(|| PetIdError::NotFound(format!("pet not found: {pet_id}")))?;

            if record.owner_id != acting_user {
                return Err(PetIdError::Forbidden(format!(
                    "pet {pet_id} is not owned by the acting user"
                )));
            }

            record.apply_form(form, now);
            Ok(record.to_pet(pet_id))
        } else {
            self.sequence = self.sequence.wrapping_add(1);
            let id = mint_pet_id(acting_user, self.sequence);
            let record = PetRecord::from_form(acting_user, form, now);
            let pet = record.to_pet(&id);
            self.pets.insert(id, record);
            Ok(pet)
        }
    }

    fn delete_pet(&mut self, acting_user: &str, pet_id: &str) -> Result<()> {
        let record = self
            .pets
            .get(pet_id)
            .ok_or_else(|| PetIdError::NotFound(format!("pet not found: {pet_id}")))?;

        if record.owner_id != acting_user {
            return Err(PetIdError::Forbidden(format!(
                "pet {pet_id} is not owned by the acting user"
            )));
        }

        self.pets.remove(pet_id);
        Ok(())
    }

    fn profile_by_id(&self, user_id: &str) -> Result<Option<OwnerProfile>> {
        Ok(self.profiles.get(user_id).map(ProfileRecord::to_profile))
    }

    fn upsert_profile(&mut self, user_id: &str, name: &str, contact: &str) -> Result<OwnerProfile> {
        let now = chrono::Utc::now().timestamp();
        let record = ProfileRecord::new(name, contact, now);
        let profile = record.to_profile();
        self.profiles.insert(user_id.to_string(), record);
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_json_store_ownership_semantics() {
        let mut store = MemoryStore::new();

        let pet = store
            .upsert_pet("user-1", None, &PetForm::new("Rex", "Labrador", "Male"))
            .unwrap();
        assert_eq!(pet.owner_id, "user-1");

        assert!(matches!(
            store.delete_pet("user-2", &pet.id),
            Err(PetIdError::Forbidden(_))
        ));
        store.delete_pet("user-1", &pet.id).unwrap();
        assert_eq!(store.pet_by_id(&pet.id).unwrap(), None);
    }
}
