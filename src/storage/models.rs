//! Storage record models for persistence layer.
//!
//! This module defines the raw storage record types used for persistence
//! operations. These types are separate from domain models to maintain a
//! clear boundary between storage representation and business logic. Records
//! do not carry their own id; both collections are keyed by id in the
//! container, and the id is re-attached when a record crosses back into the
//! domain.

use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Mints an opaque pet id.
///
/// Hashes the owner, a per-store sequence number, and the current wall clock
/// into a 16-hex-digit string. The id is a capability: it appears in shared
/// links, so it must not be enumerable from other ids.
#[must_use]
pub fn mint_pet_id(owner_id: &str, sequence: u64) -> String {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    owner_id.hash(&mut hasher);
    sequence.hash(&mut hasher);
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Represents a pet record in storage.
///
/// The owner stamp is written once at creation and never touched by updates;
/// it is the fact the ownership checks test against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Id of the user who registered the pet.
    pub owner_id: String,

    /// The pet's name.
    pub name: String,

    /// Breed description.
    pub breed: String,

    /// Sex of the pet.
    pub sex: String,

    /// Whether the pet's vaccinations are current.
    pub vaccinated: bool,

    /// Known diseases or conditions, if any.
    pub diseases: Option<String>,

    /// Photo reference, if one was attached.
    pub photo: Option<String>,

    /// Unix timestamp when the record was created.
    pub created_at: i64,

    /// Unix timestamp of the most recent update.
    pub updated_at: i64,
}

impl PetRecord {
    /// Creates a new record from a submitted form.
    ///
    /// Stamps `owner_id` from the acting user and sets both timestamps to
    /// `now`.
    pub fn from_form(owner_id: impl Into<String>, form: &PetForm, now: i64) -> Self {
        Self {
            owner_id: owner_id.into(),
            name: form.name.clone(),
            breed: form.breed.clone(),
            sex: form.sex.clone(),
            vaccinated: form.vaccinated,
            diseases: form.diseases.clone(),
            photo: form.photo.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the form-editable fields, refreshing `updated_at`.
    ///
    /// `owner_id` and `created_at` are left untouched.
    pub fn apply_form(&mut self, form: &PetForm, now: i64) {
        self.name.clone_from(&form.name);
        self.breed.clone_from(&form.breed);
        self.sex.clone_from(&form.sex);
        self.vaccinated = form.vaccinated;
        self.diseases.clone_from(&form.diseases);
        self.photo.clone_from(&form.photo);
        self.updated_at = now;
    }

    /// Converts the record into a domain pet, attaching its id.
    #[must_use]
    pub fn to_pet(&self, id: impl Into<String>) -> Pet {
        Pet {
            id: id.into(),
            owner_id: self.owner_id.clone(),
            name: self.name.clone(),
            breed: self.breed.clone(),
            sex: self.sex.clone(),
            vaccinated: self.vaccinated,
            diseases: self.diseases.clone(),
            photo: self.photo.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Represents an owner contact profile in storage.
///
/// Keyed by the owner's user id in the container. The scanned card joins this
/// against a pet's owner stamp to show contact details to whoever holds the
/// link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Owner's display name.
    pub name: String,

    /// Free-form contact details (phone, email, address).
    pub contact: String,

    /// Unix timestamp of the most recent update.
    pub updated_at: i64,
}

impl ProfileRecord {
    /// Creates a new profile record.
    pub fn new(name: impl Into<String>, contact: impl Into<String>, now: i64) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            updated_at: now,
        }
    }

    /// Converts the record into a domain profile.
    #[must_use]
    pub fn to_profile(&self) -> OwnerProfile {
        OwnerProfile {
            name: self.name.clone(),
            contact: self.contact.clone(),
            updated_at: self.updated_at,
        }
    }
}
