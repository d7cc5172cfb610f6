//! Scanned-card URL construction.
//!
//! Builds the opaque URL embedded in a pet's QR code. The link carries the
//! pet id as a path segment and nothing else: no signature, no expiry. Anyone
//! holding the link can open the public card indefinitely.

/// Renders share URLs from the configured scheme and authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    scheme: String,
    authority: String,
}

impl LinkBuilder {
    /// Creates a builder from the configured link scheme and authority.
    #[must_use]
    pub fn new(scheme: impl Into<String>, authority: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
        }
    }

    /// Returns the shareable URL of a pet's public scanned card.
    #[must_use]
    pub fn scanned_url(&self, pet_id: &str) -> String {
        format!(
            "{}://{}/pets/{}/scanned",
            self.scheme, self.authority, pet_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Route;

    #[test]
    fn scanned_url_embeds_the_pet_id() {
        let builder = LinkBuilder::new("petid", "share.petid.app");
        assert_eq!(
            builder.scanned_url("abc123"),
            "petid://share.petid.app/pets/abc123/scanned"
        );
    }

    #[test]
    fn built_url_parses_back_to_the_scanned_route() {
        let builder = LinkBuilder::new("petid", "share.petid.app");
        let url = builder.scanned_url("abc123");
        assert_eq!(
            Route::parse(&url),
            Route::PetScanned {
                pet_id: "abc123".to_string()
            }
        );
    }
}
