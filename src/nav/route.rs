//! Enumerated route kinds.
//!
//! A location string is parsed into a [`Route`] exactly once per navigation
//! event; every downstream decision (screen selection, public-versus-
//! management rendering, back affordance) matches on the enum rather than
//! inspecting path substrings.

/// The navigable locations of the application.
///
/// `PetScanned` is the public identification card reachable by anyone holding
/// the shared link; `PetDetails` is the owner's management view of the same
/// record. The two are distinct route kinds on purpose: rendering mode is
/// resolved from the route tag, never from auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated landing screen (`/`).
    Landing,
    /// Sign-in form (`/login`).
    Login,
    /// Account creation form (`/signup`).
    Signup,
    /// The signed-in user's pet list (`/pets`).
    Pets,
    /// Pet registration form (`/pets/register`), optionally editing an
    /// existing record (`/pets/register?petId={id}`).
    PetRegister { pet_id: Option<String> },
    /// Owner management view of one pet (`/pets/{id}/details`).
    PetDetails { pet_id: String },
    /// Public scanned view of one pet (`/pets/{id}/scanned`).
    PetScanned { pet_id: String },
    /// Owner contact profile form (`/profile`).
    Profile,
    /// Any path that matches no known route; carries the original location
    /// for display.
    NotFound { path: String },
}

impl Route {
    /// Parses a location into a route.
    ///
    /// Accepts both bare paths (`/pets/abc/scanned`) and full URLs with a
    /// scheme and authority (`petid://share.petid.app/pets/abc/scanned`), as
    /// deep links arrive in the latter form. Unknown locations map to
    /// [`Route::NotFound`] rather than an error; not-found is a screen, not a
    /// failure.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let path = Self::strip_origin(location);
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["pets"] => Self::Pets,
            ["pets", "register"] => Self::PetRegister {
                pet_id: query.and_then(Self::pet_id_param),
            },
            ["pets", pet_id, "details"] => Self::PetDetails {
                pet_id: (*pet_id).to_string(),
            },
            ["pets", pet_id, "scanned"] => Self::PetScanned {
                pet_id: (*pet_id).to_string(),
            },
            ["profile"] => Self::Profile,
            _ => Self::NotFound {
                path: location.to_string(),
            },
        }
    }

    /// Renders the route back to its canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Pets => "/pets".to_string(),
            Self::PetRegister { pet_id: None } => "/pets/register".to_string(),
            Self::PetRegister {
                pet_id: Some(pet_id),
            } => format!("/pets/register?petId={pet_id}"),
            Self::PetDetails { pet_id } => format!("/pets/{pet_id}/details"),
            Self::PetScanned { pet_id } => format!("/pets/{pet_id}/scanned"),
            Self::Profile => "/profile".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Returns the pet id this route addresses, if it addresses one.
    #[must_use]
    pub fn pet_id(&self) -> Option<&str> {
        match self {
            Self::PetDetails { pet_id } | Self::PetScanned { pet_id } => Some(pet_id),
            Self::PetRegister {
                pet_id: Some(pet_id),
            } => Some(pet_id),
            _ => None,
        }
    }

    /// Returns `true` for the public scanned variant.
    #[must_use]
    pub const fn is_scanned(&self) -> bool {
        matches!(self, Self::PetScanned { .. })
    }

    /// Strips a `scheme://authority` prefix, if present.
    fn strip_origin(location: &str) -> &str {
        let Some(scheme_end) = location.find("://") else {
            return location;
        };
        let rest = &location[scheme_end + 3..];
        match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "/",
        }
    }

    /// Extracts the `petId` value from a query string.
    fn pet_id_param(query: &str) -> Option<String> {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("petId="))
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/pets"), Route::Pets);
        assert_eq!(Route::parse("/profile"), Route::Profile);
    }

    #[test]
    fn parses_pet_routes_with_ids() {
        assert_eq!(
            Route::parse("/pets/abc123/scanned"),
            Route::PetScanned {
                pet_id: "abc123".to_string()
            }
        );
        assert_eq!(
            Route::parse("/pets/abc123/details"),
            Route::PetDetails {
                pet_id: "abc123".to_string()
            }
        );
    }

    #[test]
    fn parses_register_with_optional_edit_target() {
        assert_eq!(
            Route::parse("/pets/register"),
            Route::PetRegister { pet_id: None }
        );
        assert_eq!(
            Route::parse("/pets/register?petId=abc123"),
            Route::PetRegister {
                pet_id: Some("abc123".to_string())
            }
        );
    }

    #[test]
    fn strips_scheme_and_authority_from_full_urls() {
        assert_eq!(
            Route::parse("petid://share.petid.app/pets/abc123/scanned"),
            Route::PetScanned {
                pet_id: "abc123".to_string()
            }
        );
        assert_eq!(Route::parse("petid://share.petid.app"), Route::Landing);
    }

    #[test]
    fn unknown_paths_become_not_found() {
        assert_eq!(
            Route::parse("/pets/abc123/unknown"),
            Route::NotFound {
                path: "/pets/abc123/unknown".to_string()
            }
        );
        assert!(matches!(Route::parse("/nowhere"), Route::NotFound { .. }));
    }

    #[test]
    fn path_round_trips() {
        for path in [
            "/",
            "/login",
            "/pets",
            "/pets/register",
            "/pets/register?petId=x1",
            "/pets/x1/details",
            "/pets/x1/scanned",
            "/profile",
        ] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn scanned_flag_tracks_variant() {
        assert!(Route::parse("/pets/x/scanned").is_scanned());
        assert!(!Route::parse("/pets/x/details").is_scanned());
    }
}
