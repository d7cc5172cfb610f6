//! Owner contact profile model.
//!
//! The profile is the contact card shown in the "owner contact" section of a
//! pet's identification card, both on the public scanned view and on the
//! owner's management view. It is stored under the owner's user id and is
//! optional: a pet whose owner never filled the profile still renders, with
//! contact fields shown as not provided.

use serde::{Deserialize, Serialize};

/// Contact card for a pet owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    /// Owner display name.
    pub name: String,

    /// Contact information (phone number in the product's locale format;
    /// validated by the host before submission).
    pub contact: String,

    /// Unix timestamp of the last profile save, stamped by the store.
    pub updated_at: i64,
}

impl OwnerProfile {
    /// Creates a profile stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
