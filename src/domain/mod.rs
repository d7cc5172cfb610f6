//! Domain layer for the PetId application core.
//!
//! This module contains the core domain types and business logic of the
//! application, independent of host, storage, or navigation concerns. It
//! follows domain-driven design principles by keeping business rules isolated
//! from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`pet`]: Pet domain model and form data
//! - [`profile`]: Owner contact profile shown on the public pet card
//!
//! # Examples
//!
//! ```
//! use petid::domain::{Pet, Result};
//!
//! fn lookup(pets: &[Pet], id: &str) -> Result<()> {
//!     let _found = pets.iter().find(|p| p.id == id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pet;
pub mod profile;

pub use error::{PetIdError, Result};
pub use pet::{Pet, PetForm};
pub use profile::OwnerProfile;
