//! Navigation primitive abstraction.
//!
//! This module defines the [`Navigator`] trait that abstracts over the host's
//! navigation stack, plus [`MemoryHistory`], an in-process stack used by the
//! terminal shell and by tests. The core never mutates history directly; it
//! emits navigation actions which the host executes against its navigator,
//! then feeds the resulting route change back into the event loop.
//!
//! # Design Philosophy
//!
//! The trait is minimal: replace, push, pop, and two observations. Route
//! matching is not the navigator's concern here; locations are opaque strings
//! parsed by [`crate::nav::Route`] when the change event arrives.

use crate::domain::error::{PetIdError, Result};

/// Abstraction over the host navigation stack.
pub trait Navigator {
    /// Replaces the current history entry with `location`.
    ///
    /// Used for corrective redirects: the replaced entry must not remain
    /// back-navigable.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying primitive rejects the operation.
    /// Such failures are not recovered by the core.
    fn replace(&mut self, location: &str) -> Result<()>;

    /// Pushes `location` as a new history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying primitive rejects the operation.
    fn push(&mut self, location: &str) -> Result<()>;

    /// Pops the current entry, returning to the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no previous entry.
    fn back(&mut self) -> Result<()>;

    /// Returns `true` if a previous entry exists.
    fn can_go_back(&self) -> bool;

    /// Returns the current location.
    fn current(&self) -> &str;
}

/// In-process navigation stack.
///
/// Starts with a single root entry (`/`). The current location is always the
/// top of the stack, so `can_go_back` is simply "more than one entry".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    stack: Vec<String>,
}

impl MemoryHistory {
    /// Creates a history positioned at the root location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec!["/".to_string()],
        }
    }

    /// Returns the number of entries, for inspection in tests.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryHistory {
    fn replace(&mut self, location: &str) -> Result<()> {
        tracing::debug!(location = %location, "history replace");
        let top = self
            .stack
            .last_mut()
            .ok_or_else(|| PetIdError::Navigation("history stack is empty".to_string()))?;
        *top = location.to_string();
        Ok(())
    }

    fn push(&mut self, location: &str) -> Result<()> {
        tracing::debug!(location = %location, "history push");
        self.stack.push(location.to_string());
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(PetIdError::Navigation(
                "no previous history entry".to_string(),
            ));
        }
        self.stack.pop();
        tracing::debug!(location = %self.current(), "history pop");
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    fn current(&self) -> &str {
        self.stack.last().map_or("/", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root_with_no_back() {
        let history = MemoryHistory::new();
        assert_eq!(history.current(), "/");
        assert!(!history.can_go_back());
    }

    #[test]
    fn replace_overwrites_top_without_growing_stack() {
        let mut history = MemoryHistory::new();
        history.replace("/pets").unwrap();
        assert_eq!(history.current(), "/pets");
        assert_eq!(history.depth(), 1);
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_then_back_restores_previous_entry() {
        let mut history = MemoryHistory::new();
        history.replace("/pets").unwrap();
        history.push("/pets/x1/details").unwrap();
        assert!(history.can_go_back());

        history.back().unwrap();
        assert_eq!(history.current(), "/pets");
        assert!(!history.can_go_back());
    }

    #[test]
    fn back_at_root_is_an_error() {
        let mut history = MemoryHistory::new();
        assert!(matches!(
            history.back(),
            Err(PetIdError::Navigation(_))
        ));
    }
}
