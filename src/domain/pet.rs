//! Pet domain model and form data.
//!
//! This module defines the core `Pet` type representing a registered pet whose
//! identification card can be shared through a scannable link. It also defines
//! [`PetForm`], the mutable subset of fields submitted when registering or
//! editing a pet.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A registered pet record.
///
/// A pet is owned by exactly one user and carries the medical and contact
/// information revealed on its public identification card. The `id` is an
/// opaque string assigned by the document store at creation and is immutable
/// afterwards; `owner_id` is stamped once from the creating user and never
/// changes.
///
/// # Fields
///
/// - `id`: Store-assigned opaque identifier
/// - `owner_id`: Identity of the owning user, set at creation
/// - `name`, `breed`, `sex`: Display attributes
/// - `vaccinated`: Whether vaccinations are up to date
/// - `diseases`: Free-text medical notes, `None` when there are none
/// - `photo`: Opaque data URI produced by the device image collaborator
/// - `created_at` / `updated_at`: Unix timestamps stamped by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub vaccinated: bool,
    pub diseases: Option<String>,
    pub photo: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Pet {
    /// Returns the user-facing vaccination label ("Yes" / "No").
    #[must_use]
    pub const fn vaccinated_label(&self) -> &'static str {
        if self.vaccinated {
            "Yes"
        } else {
            "No"
        }
    }

    /// Returns the medical notes for display, substituting "None" when the
    /// record carries no diseases or allergies.
    #[must_use]
    pub fn diseases_label(&self) -> &str {
        self.diseases.as_deref().unwrap_or("None")
    }

    /// Returns a human-readable string describing how long ago the record was
    /// last updated.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn updated_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.updated_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Mutable pet fields submitted from the registration form.
///
/// The form never carries `id`, `owner_id`, or timestamps; those are assigned
/// by the document store on save. Form validation happens in the host shell
/// before an event reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub vaccinated: bool,
    pub diseases: Option<String>,
    pub photo: Option<String>,
}

impl PetForm {
    /// Creates a form with the required display attributes and no medical
    /// notes or photo.
    #[must_use]
    pub fn new(name: impl Into<String>, breed: impl Into<String>, sex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            sex: sex.into(),
            vaccinated: false,
            diseases: None,
            photo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pet() -> Pet {
        Pet {
            id: "abc123".to_string(),
            owner_id: "owner-1".to_string(),
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            sex: "Male".to_string(),
            vaccinated: true,
            diseases: None,
            photo: None,
            created_at: chrono::Utc::now().timestamp(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn vaccinated_label_reflects_flag() {
        let mut pet = sample_pet();
        assert_eq!(pet.vaccinated_label(), "Yes");
        pet.vaccinated = false;
        assert_eq!(pet.vaccinated_label(), "No");
    }

    #[test]
    fn diseases_label_substitutes_none() {
        let mut pet = sample_pet();
        assert_eq!(pet.diseases_label(), "None");
        pet.diseases = Some("pollen allergy".to_string());
        assert_eq!(pet.diseases_label(), "pollen allergy");
    }

    #[test]
    fn updated_ago_formats_recent_and_old() {
        let mut pet = sample_pet();
        assert_eq!(pet.updated_ago(), "just now");

        pet.updated_at = chrono::Utc::now().timestamp() - 300;
        assert_eq!(pet.updated_ago(), "5m ago");

        pet.updated_at = chrono::Utc::now().timestamp() - 2 * 86400;
        assert_eq!(pet.updated_ago(), "2d ago");
    }
}
