//! Process-wide authentication state container.
//!
//! [`AuthTracker`] is the single source of truth for "who is signed in" and
//! "has the provider answered yet". It is an explicit state container passed
//! by reference to the components that read it; nothing in the crate holds
//! ambient global auth state.
//!
//! # Single-Writer Discipline
//!
//! Only the event handler writes to the tracker, and only in response to
//! provider change notifications. Every other component reads it.

/// Observable `{current_user, is_loading}` cell.
///
/// On construction `is_loading` is true and no user is present. The first
/// provider notification clears the loading flag; it never becomes true again
/// for the lifetime of the process, regardless of later sign-ins and
/// sign-outs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTracker {
    current_user: Option<String>,
    is_loading: bool,
}

impl AuthTracker {
    /// Creates a tracker in the pre-notification state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }

    /// Folds a provider change notification into the cell.
    ///
    /// Sets the user to the reported identity (or absent) and clears the
    /// loading flag. Returns `true` if anything observable changed, which
    /// callers use to decide whether a re-render is needed.
    pub fn apply(&mut self, user: Option<String>) -> bool {
        let changed = self.is_loading || self.current_user != user;

        tracing::debug!(
            user = ?user,
            was_loading = self.is_loading,
            changed = changed,
            "auth notification applied"
        );

        self.current_user = user;
        self.is_loading = false;
        changed
    }

    /// Returns the signed-in user id, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Returns `true` until the first provider notification arrives.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }
}

impl Default for AuthTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_with_no_user() {
        let tracker = AuthTracker::new();
        assert!(tracker.is_loading());
        assert_eq!(tracker.current_user(), None);
    }

    #[test]
    fn loading_clears_exactly_once() {
        let mut tracker = AuthTracker::new();

        assert!(tracker.apply(None));
        assert!(!tracker.is_loading());

        // Later notifications flip the user but never re-enter loading.
        assert!(tracker.apply(Some("user-1".to_string())));
        assert!(!tracker.is_loading());
        assert!(tracker.apply(None));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn repeated_identical_notification_reports_unchanged() {
        let mut tracker = AuthTracker::new();
        tracker.apply(Some("user-1".to_string()));
        assert!(!tracker.apply(Some("user-1".to_string())));
    }
}
