//! Redirect state machine for arrival episodes.
//!
//! The redirector decides where the user lands after the application is
//! activated: cold start, resume through a shared link, or an auth change.
//! It is re-evaluated on every change to the auth state, the route, or the
//! observed deep link, yet performs at most one history-replacing redirect
//! per arrival episode. The episode flags live in an explicit, inspectable
//! [`ArrivalEpisode`] value rather than in incidental closure state.
//!
//! # Precedence
//!
//! Each evaluation walks the rules in order and stops at the first match:
//!
//! 1. A redirect already fired this episode: do nothing (idempotence guard).
//! 2. An unconsumed deep link is present: replace to it. Deep links beat
//!    auth-based routing even when a user is simultaneously signed in — a
//!    shared pet card must open for a signed-in viewer too.
//! 3. Auth state is still loading: wait for the next notification.
//! 4. No user: replace to the landing route.
//! 5. A user: replace to the pet list.
//!
//! All redirects use replace semantics. These are corrective moves, not
//! user-initiated navigation; a back-navigable entry pointing at a
//! pre-auth-resolved screen must not remain in history.

use crate::auth::AuthTracker;
use crate::nav::deeplink::DeepLinkCapture;
use crate::nav::route::Route;

/// One-shot flags scoped to an arrival episode.
///
/// `redirect_performed` is cleared whenever an auth provider notification
/// arrives (via [`Redirector::rearm`]), making login and logout transitions
/// eligible for exactly one fresh redirect. `deep_link_consumed` is never
/// cleared: an activating link routes the user once per process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalEpisode {
    deep_link_consumed: bool,
    redirect_performed: bool,
}

impl ArrivalEpisode {
    /// Returns `true` once the activating deep link has been navigated to.
    #[must_use]
    pub const fn deep_link_consumed(&self) -> bool {
        self.deep_link_consumed
    }

    /// Returns `true` once a redirect has fired in the current episode.
    #[must_use]
    pub const fn redirect_performed(&self) -> bool {
        self.redirect_performed
    }
}

/// The redirect decision state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirector {
    episode: ArrivalEpisode,
}

impl Redirector {
    /// Creates a redirector at the start of its first episode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            episode: ArrivalEpisode {
                deep_link_consumed: false,
                redirect_performed: false,
            },
        }
    }

    /// Exposes the episode flags for inspection.
    #[must_use]
    pub const fn episode(&self) -> &ArrivalEpisode {
        &self.episode
    }

    /// Opens a fresh episode after an auth provider notification.
    ///
    /// Clears only the redirect flag; a consumed deep link stays consumed
    /// for the rest of the process lifetime.
    pub fn rearm(&mut self) {
        tracing::debug!("redirect episode re-armed");
        self.episode.redirect_performed = false;
    }

    /// Runs one evaluation of the precedence rules.
    ///
    /// Returns the location to replace to, or `None` when no redirect should
    /// happen (guard hit, or auth still loading). Callers turn a `Some` into
    /// a history replace; the resulting route-change notification re-enters
    /// this method and stops at the guard.
    pub fn evaluate(
        &mut self,
        auth: &AuthTracker,
        deep_link: &DeepLinkCapture,
    ) -> Option<String> {
        if self.episode.redirect_performed {
            tracing::debug!("redirect already performed this episode");
            return None;
        }

        if let Some(url) = deep_link.latest() {
            if !self.episode.deep_link_consumed {
                self.episode.deep_link_consumed = true;
                self.episode.redirect_performed = true;
                tracing::debug!(url = %url, "routing to inbound link");
                return Some(url.to_string());
            }
        }

        if auth.is_loading() {
            tracing::debug!("auth state still loading, deferring redirect");
            return None;
        }

        self.episode.redirect_performed = true;

        let target = if auth.current_user().is_some() {
            Route::Pets.path()
        } else {
            Route::Landing.path()
        };

        tracing::debug!(target = %target, "auth-based redirect");
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_auth(user: Option<&str>) -> AuthTracker {
        let mut auth = AuthTracker::new();
        auth.apply(user.map(ToString::to_string));
        auth
    }

    #[test]
    fn cold_start_without_link_redirects_to_landing_once() {
        let mut redirector = Redirector::new();
        let deep_link = DeepLinkCapture::new();

        // Auth still loading: no decision yet.
        let loading = AuthTracker::new();
        assert_eq!(redirector.evaluate(&loading, &deep_link), None);

        // First notification resolves to signed out.
        let auth = loaded_auth(None);
        assert_eq!(
            redirector.evaluate(&auth, &deep_link),
            Some("/".to_string())
        );

        // Re-evaluations triggered by the resulting route change do nothing.
        assert_eq!(redirector.evaluate(&auth, &deep_link), None);
        assert_eq!(redirector.evaluate(&auth, &deep_link), None);
    }

    #[test]
    fn signed_in_user_lands_on_pet_list() {
        let mut redirector = Redirector::new();
        let deep_link = DeepLinkCapture::new();
        let auth = loaded_auth(Some("user-1"));

        assert_eq!(
            redirector.evaluate(&auth, &deep_link),
            Some("/pets".to_string())
        );
    }

    #[test]
    fn deep_link_wins_even_for_a_signed_in_viewer() {
        let mut redirector = Redirector::new();
        let mut deep_link = DeepLinkCapture::new();
        deep_link.observe("petid://app/pets/abc123/scanned");

        let auth = loaded_auth(Some("user-1"));
        assert_eq!(
            redirector.evaluate(&auth, &deep_link),
            Some("petid://app/pets/abc123/scanned".to_string())
        );
        assert!(redirector.episode().deep_link_consumed());

        // The pet-list default never fires afterwards within the episode.
        assert_eq!(redirector.evaluate(&auth, &deep_link), None);
    }

    #[test]
    fn deep_link_routes_before_auth_resolves() {
        let mut redirector = Redirector::new();
        let mut deep_link = DeepLinkCapture::new();
        deep_link.observe("petid://app/pets/abc123/scanned");

        // Still loading, yet the link wins immediately.
        let loading = AuthTracker::new();
        assert_eq!(
            redirector.evaluate(&loading, &deep_link),
            Some("petid://app/pets/abc123/scanned".to_string())
        );
    }

    #[test]
    fn no_redirect_while_loading_regardless_of_user() {
        let mut redirector = Redirector::new();
        let deep_link = DeepLinkCapture::new();
        let loading = AuthTracker::new();

        for _ in 0..3 {
            assert_eq!(redirector.evaluate(&loading, &deep_link), None);
        }
        assert!(!redirector.episode().redirect_performed());
    }

    #[test]
    fn rearm_permits_exactly_one_more_redirect() {
        let mut redirector = Redirector::new();
        let deep_link = DeepLinkCapture::new();

        let signed_in = loaded_auth(Some("user-1"));
        assert_eq!(
            redirector.evaluate(&signed_in, &deep_link),
            Some("/pets".to_string())
        );

        // Sign-out: the provider notification re-arms the episode.
        redirector.rearm();
        let signed_out = loaded_auth(None);
        assert_eq!(
            redirector.evaluate(&signed_out, &deep_link),
            Some("/".to_string())
        );
        assert_eq!(redirector.evaluate(&signed_out, &deep_link), None);
    }

    #[test]
    fn consumed_deep_link_stays_consumed_across_rearm() {
        let mut redirector = Redirector::new();
        let mut deep_link = DeepLinkCapture::new();
        deep_link.observe("petid://app/pets/abc123/scanned");

        let auth = loaded_auth(Some("user-1"));
        redirector.evaluate(&auth, &deep_link);

        // A later auth change falls through to the auth default, not back
        // to the already-consumed link.
        redirector.rearm();
        assert_eq!(
            redirector.evaluate(&auth, &deep_link),
            Some("/pets".to_string())
        );
    }

    #[test]
    fn at_most_one_replace_per_notification_storm() {
        let mut redirector = Redirector::new();
        let deep_link = DeepLinkCapture::new();
        let auth = loaded_auth(None);

        let mut replaces = 0;
        for _ in 0..10 {
            if redirector.evaluate(&auth, &deep_link).is_some() {
                replaces += 1;
            }
        }
        assert_eq!(replaces, 1);
    }
}
