//! Inbound deep-link capture.
//!
//! When the application is opened or resumed through a shared pet link, the
//! host observes the activating URL and feeds it here. The capture stores the
//! most recent URL verbatim; it does not parse it. Whether the URL has been
//! consumed for navigation is tracked by the redirector's episode flags, not
//! here, so unrelated reads of the latest URL stay harmless.

/// Holds the most recent inbound link URL, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLinkCapture {
    latest: Option<String>,
}

impl DeepLinkCapture {
    /// Creates a capture with no link observed.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Records an inbound link URL, replacing any earlier one.
    pub fn observe(&mut self, url: impl Into<String>) {
        let url = url.into();
        tracing::debug!(url = %url, "inbound link observed");
        self.latest = Some(url);
    }

    /// Returns the most recently observed URL.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_url() {
        let mut capture = DeepLinkCapture::new();
        assert_eq!(capture.latest(), None);

        capture.observe("petid://app/pets/a/scanned");
        capture.observe("petid://app/pets/b/scanned");
        assert_eq!(capture.latest(), Some("petid://app/pets/b/scanned"));
    }
}
