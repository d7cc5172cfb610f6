//! Error types for the PetId core.
//!
//! This module defines the centralized error type [`PetIdError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for PetId operations.
///
/// This enum consolidates all error conditions that can occur in the application
/// core, from storage operations to I/O failures and configuration issues. Most
/// variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use petid::domain::PetIdError;
///
/// // Explicit error construction
/// fn validate_config() -> Result<(), PetIdError> {
///     Err(PetIdError::Config("Missing required field".to_string()))
/// }
///
/// fn read_storage() -> Result<(), PetIdError> {
///     Err(PetIdError::Storage("Failed to read file".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum PetIdError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested record does not exist.
    ///
    /// Returned when a pet or profile lookup refers to a document that was
    /// deleted or never created. The string names the missing record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The acting user is not allowed to perform the operation.
    ///
    /// Mutations on a pet record are restricted to the pet's owner. The string
    /// describes the rejected operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Submitted form data failed validation.
    ///
    /// The string carries the user-facing message for the first failing field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The navigation primitive rejected an operation.
    ///
    /// Occurs when a history replace, push, or pop cannot be performed.
    /// Not recovered inside the core; propagates to the host's top-level
    /// boundary.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be parsed or references unknown colors.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the core cannot exchange messages with its store worker,
    /// typically during record loads or saves. The string contains details
    /// about the communication failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for PetId operations.
///
/// This is a type alias for `std::result::Result<T, PetIdError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use petid::domain::Result;
///
/// fn load_records() -> Result<()> {
///     // Function that may return PetIdError
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PetIdError>;
