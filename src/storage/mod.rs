//! Storage layer for persistent pet and profile data.
//!
//! This module provides the storage abstraction for persisting pet records and
//! owner contact profiles. Records are addressed by opaque ids; ownership
//! checks live here, at the data boundary, so every caller path is covered by
//! the same enforcement.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage for tests and ephemeral runs
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::DocumentStore;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use models::{PetRecord, ProfileRecord};
