//! Authentication provider abstraction and error-code mapping.
//!
//! This module defines the [`AuthProvider`] trait that abstracts over the
//! remote authentication collaborator, the closed set of provider error codes
//! with user-facing messages, and [`LocalAuthProvider`], an in-memory
//! reference implementation used by the terminal shell and by tests.
//!
//! # Design Philosophy
//!
//! The trait is deliberately synchronous from the core's point of view: the
//! host shell performs the provider call, then feeds the resulting change
//! notification (or failure) back into the event loop. The core never awaits
//! the provider directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Closed set of provider error codes.
///
/// Each code maps to a user-facing message. Codes the provider reports that
/// are not in this set collapse to [`AuthCode::Unknown`], which renders as a
/// generic failure message. Network failures are reported, never retried
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthCode {
    /// The email address is malformed.
    InvalidEmail,
    /// The account exists but has been disabled.
    UserDisabled,
    /// No account matches the email address.
    UserNotFound,
    /// The password does not match the account.
    WrongPassword,
    /// The provider is rate-limiting this client.
    TooManyRequests,
    /// The provider could not be reached.
    NetworkRequestFailed,
    /// The email/password pair was rejected without detail.
    InvalidCredential,
    /// Sign-up with an email that already has an account.
    EmailAlreadyInUse,
    /// Sign-up with a password below the provider's minimum strength.
    WeakPassword,
    /// Any code outside the known set.
    Unknown,
}

impl AuthCode {
    /// Maps a raw provider code string to a known code.
    ///
    /// Unrecognized strings map to [`AuthCode::Unknown`] rather than failing,
    /// so a provider rolling out new codes degrades to the generic message.
    #[must_use]
    pub fn from_provider(code: &str) -> Self {
        match code {
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/user-disabled" => Self::UserDisabled,
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/too-many-requests" => Self::TooManyRequests,
            "auth/network-request-failed" => Self::NetworkRequestFailed,
            "auth/invalid-credential" => Self::InvalidCredential,
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/weak-password" => Self::WeakPassword,
            _ => Self::Unknown,
        }
    }

    /// Returns the user-facing message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidEmail => "Invalid email address",
            Self::UserDisabled => "This account has been disabled",
            Self::UserNotFound => "No account found for this email",
            Self::WrongPassword => "Incorrect password",
            Self::TooManyRequests => "Too many attempts. Try again later",
            Self::NetworkRequestFailed => "Connection error. Check your internet",
            Self::InvalidCredential => "Invalid email or password",
            Self::EmailAlreadyInUse => "An account with this email already exists",
            Self::WeakPassword => "Password must be at least 6 characters",
            Self::Unknown => "Something went wrong. Try again",
        }
    }
}

/// Error returned by provider operations.
///
/// Wraps the mapped [`AuthCode`] together with the raw code string reported
/// by the provider, which is kept for logging only; user-facing surfaces show
/// `code.message()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.code.message())]
pub struct AuthError {
    /// Mapped error code.
    pub code: AuthCode,
    /// Raw provider code string, for logs.
    pub raw: String,
}

impl AuthError {
    /// Creates an error from a raw provider code string.
    #[must_use]
    pub fn from_code(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            code: AuthCode::from_provider(&raw),
            raw,
        }
    }
}

/// Abstraction over the authentication collaborator.
///
/// Change notifications are not a callback: implementations queue them and
/// the host shell drains the queue with [`AuthProvider::take_notifications`],
/// feeding each one into the event loop as an auth-changed event. The first
/// notification after process start reports the persisted session (or no
/// user) and is what clears the tracker's loading flag.
pub trait AuthProvider {
    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] mapped from the provider's failure code.
    fn sign_up(&mut self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] mapped from the provider's failure code.
    fn sign_in(&mut self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Signs out the current user.
    ///
    /// Succeeds even when no user is signed in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the provider rejects the operation.
    fn sign_out(&mut self) -> Result<(), AuthError>;

    /// Returns the currently signed-in user id, if any.
    fn current_user(&self) -> Option<String>;

    /// Drains queued change notifications.
    ///
    /// Each entry is the user id reported by the notification, or `None` for
    /// a signed-out state. Order is preserved.
    fn take_notifications(&mut self) -> Vec<Option<String>>;
}

/// In-memory reference provider.
///
/// Accounts live in a process-local map; user ids are derived from a counter.
/// Construction queues the initial signed-out notification, mirroring a real
/// provider delivering its first state after subscription.
pub struct LocalAuthProvider {
    accounts: HashMap<String, Account>,
    current: Option<String>,
    next_id: u64,
    pending: Vec<Option<String>>,
}

struct Account {
    password: String,
    user_id: String,
    disabled: bool,
}

impl LocalAuthProvider {
    /// Creates a provider with no accounts and the initial signed-out
    /// notification queued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            current: None,
            next_id: 1,
            pending: vec![None],
        }
    }

    /// Registers an account without signing it in, for fixtures.
    pub fn seed_account(&mut self, email: &str, password: &str) -> String {
        let user_id = format!("user-{}", self.next_id);
        self.next_id += 1;
        self.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                user_id: user_id.clone(),
                disabled: false,
            },
        );
        user_id
    }

    /// Marks an account disabled, for fixtures exercising the disabled path.
    pub fn disable_account(&mut self, email: &str) {
        if let Some(account) = self.accounts.get_mut(email) {
            account.disabled = true;
        }
    }

    fn notify(&mut self, user: Option<String>) {
        self.current.clone_from(&user);
        self.pending.push(user);
    }
}

impl Default for LocalAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for LocalAuthProvider {
    fn sign_up(&mut self, email: &str, password: &str) -> Result<String, AuthError> {
        if !email.contains('@') {
            return Err(AuthError::from_code("auth/invalid-email"));
        }
        if password.len() < 6 {
            return Err(AuthError::from_code("auth/weak-password"));
        }
        if self.accounts.contains_key(email) {
            return Err(AuthError::from_code("auth/email-already-in-use"));
        }

        let user_id = self.seed_account(email, password);
        tracing::debug!(user_id = %user_id, "account created");
        self.notify(Some(user_id.clone()));
        Ok(user_id)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<String, AuthError> {
        if !email.contains('@') {
            return Err(AuthError::from_code("auth/invalid-email"));
        }

        let account = self
            .accounts
            .get(email)
            .ok_or_else(|| AuthError::from_code("auth/user-not-found"))?;

        if account.disabled {
            return Err(AuthError::from_code("auth/user-disabled"));
        }
        if account.password != password {
            return Err(AuthError::from_code("auth/wrong-password"));
        }

        let user_id = account.user_id.clone();
        tracing::debug!(user_id = %user_id, "signed in");
        self.notify(Some(user_id.clone()));
        Ok(user_id)
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        tracing::debug!(had_user = self.current.is_some(), "signed out");
        self.notify(None);
        Ok(())
    }

    fn current_user(&self) -> Option<String> {
        self.current.clone()
    }

    fn take_notifications(&mut self) -> Vec<Option<String>> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_specific_messages() {
        assert_eq!(
            AuthCode::from_provider("auth/wrong-password"),
            AuthCode::WrongPassword
        );
        assert_eq!(AuthCode::WrongPassword.message(), "Incorrect password");
        assert_eq!(
            AuthCode::from_provider("auth/network-request-failed"),
            AuthCode::NetworkRequestFailed
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_generic_message() {
        let err = AuthError::from_code("auth/some-future-code");
        assert_eq!(err.code, AuthCode::Unknown);
        assert_eq!(err.to_string(), "Something went wrong. Try again");
        assert_eq!(err.raw, "auth/some-future-code");
    }

    #[test]
    fn initial_notification_reports_signed_out() {
        let mut provider = LocalAuthProvider::new();
        assert_eq!(provider.take_notifications(), vec![None]);
        assert!(provider.take_notifications().is_empty());
    }

    #[test]
    fn sign_in_happy_path_queues_notification() {
        let mut provider = LocalAuthProvider::new();
        let user_id = provider.seed_account("a@b.com", "secret1");
        provider.take_notifications();

        let signed_in = provider.sign_in("a@b.com", "secret1").unwrap();
        assert_eq!(signed_in, user_id);
        assert_eq!(provider.current_user(), Some(user_id.clone()));
        assert_eq!(provider.take_notifications(), vec![Some(user_id)]);
    }

    #[test]
    fn sign_in_failures_map_codes() {
        let mut provider = LocalAuthProvider::new();
        provider.seed_account("a@b.com", "secret1");
        provider.disable_account("a@b.com");

        let err = provider.sign_in("nobody@b.com", "secret1").unwrap_err();
        assert_eq!(err.code, AuthCode::UserNotFound);

        let err = provider.sign_in("a@b.com", "wrong").unwrap_err();
        assert_eq!(err.code, AuthCode::UserDisabled);

        let err = provider.sign_in("not-an-email", "secret1").unwrap_err();
        assert_eq!(err.code, AuthCode::InvalidEmail);
    }

    #[test]
    fn sign_up_rejects_duplicates_and_weak_passwords() {
        let mut provider = LocalAuthProvider::new();
        provider.sign_up("a@b.com", "secret1").unwrap();

        let err = provider.sign_up("a@b.com", "secret1").unwrap_err();
        assert_eq!(err.code, AuthCode::EmailAlreadyInUse);

        let err = provider.sign_up("c@d.com", "short").unwrap_err();
        assert_eq!(err.code, AuthCode::WeakPassword);
    }

    #[test]
    fn sign_out_queues_absent_notification() {
        let mut provider = LocalAuthProvider::new();
        provider.seed_account("a@b.com", "secret1");
        provider.sign_in("a@b.com", "secret1").unwrap();
        provider.take_notifications();

        provider.sign_out().unwrap();
        assert_eq!(provider.current_user(), None);
        assert_eq!(provider.take_notifications(), vec![None]);
    }
}
