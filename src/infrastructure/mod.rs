//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating the application's data
//! directory and normalizing user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
