//! Petid: scannable pet identification with auth-aware navigation.
//!
//! Petid keeps a household's pets findable: every registered pet gets an
//! opaque id baked into a shareable link, and anyone scanning that link sees
//! the pet's public identification card with the owner's contact details.
//! The crate provides:
//! - Deep-link capture and an at-most-once corrective redirect per arrival
//! - Three-valued auth tracking (loading, signed out, signed in)
//! - Public/management bifurcation of the pet card by route kind
//! - Owner-scoped pet and profile records backed by JSON file storage
//! - Asynchronous store access via a background worker

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host Shell (main.rs)                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Store ops   │
//! │ - Theming     │   │ - Ownership   │   │ - Req/resp    │
//! │ - Components  │   │ - Backend API │   │ - Tracing     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Auth, Nav, Infrastructure & Domain Layers          │
//! │  - Provider trait + tracker (auth/)                 │
//! │  - Routes, redirector, history (nav/)               │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Pet/profile models, errors (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`auth`]: Auth provider abstraction and three-valued state tracking
//! - [`domain`]: Core domain types (Pet, `OwnerProfile`, errors)
//! - [`nav`]: Routes, deep-link capture, redirect rules, history
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence layer with ownership enforcement
//! - [`worker`]: Background worker for async store operations
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Load configuration from the TOML config file
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme and link builder
//!    - Spawn the store worker thread
//!    - Feed the initial auth notification (and any activating link)
//!
//! 2. **Arrival**:
//!    - The redirect rules pick at most one history-replacing redirect:
//!      an unconsumed deep link wins, otherwise the auth default applies
//!      once the auth state has resolved
//!
//! 3. **Worker Processing**:
//!    - Store requests run against the JSON document store
//!    - Typed responses flow back into the event loop
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, list, card, form, footer)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use petid::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! // The provider's first notification resolves the auth state.
//! let (_render, actions) = handle_event(&mut state, &Event::AuthChanged { user: None })?;
//! // Execute actions against the navigator and provider...
//! # assert!(!actions.is_empty());
//! # Ok::<(), petid::PetIdError>(())
//! ```
//!
//! ## Worker Usage
//!
//! ```rust
//! use petid::storage::MemoryStore;
//! use petid::worker::{StoreRequest, StoreWorker};
//!
//! // In the worker thread
//! let mut worker = StoreWorker::with_store(Box::new(MemoryStore::default()));
//! let response = worker.handle_request(StoreRequest::load_pets("user-1".to_string()));
//! ```
//!
//! # Key Design Decisions
//!
//! ## At-Most-Once Redirects
//!
//! Each arrival episode performs at most one history-replacing redirect:
//! - A consumed deep link stays consumed for the process lifetime
//! - Auth change notifications re-arm the redirect, sign-out included
//! - Repeated notifications of the same state never stack redirects
//!
//! ## Route-Kind View Selection
//!
//! The pet card's rendering mode derives from the route kind alone:
//! - `/pets/{id}/details` renders the management view
//! - `/pets/{id}/scanned` renders the public view, signed in or not
//! - Ownership itself is enforced in the data layer, not the view
//!
//! ## Worker-Based Store Access
//!
//! Document-store operations run in a separate worker thread:
//! - Prevents UI blocking during storage I/O
//! - Request/response enums carry trace context across the thread hop
//! - Atomic temp-then-rename writes keep the JSON file consistent

pub mod app;
pub mod auth;
pub mod domain;
pub mod infrastructure;
pub mod nav;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Pet, PetForm, PetIdError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a TOML file.
///
/// Every field is optional in the file; absent fields fall back to the
/// defaults below.
///
/// # Example
///
/// ```toml
/// # ~/.config/petid/config.toml
/// link_scheme = "petid"
/// link_authority = "share.petid.app"
/// theme = "dark"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL scheme for shareable scanned-card links.
    ///
    /// Default: `"petid"`
    pub link_scheme: String,

    /// URL authority for shareable scanned-card links.
    ///
    /// Default: `"share.petid.app"`
    pub link_authority: String,

    /// Override for the data directory holding the store and trace files.
    ///
    /// Default: resolved per [`infrastructure::paths::get_data_dir`].
    pub data_dir: Option<PathBuf>,

    /// Built-in theme name to use.
    ///
    /// Options: `dark`, `light`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// The `RUST_LOG` environment variable takes precedence when set.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_scheme: "petid".to_string(),
            link_authority: "share.petid.app".to_string(),
            data_dir: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Fields absent from the file fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML cannot be
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| PetIdError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from the given path, or defaults when absent.
    ///
    /// A missing file is not an error; a present but malformed file is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Initializes the application with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - A link builder for the configured scheme and authority
/// - Auth in its loading state, no link observed, route at the landing screen
///
/// # Example
///
/// ```rust
/// use petid::{initialize, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// // State is ready for event processing
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing petid");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let link_builder = nav::LinkBuilder::new(&config.link_scheme, &config.link_authority);

    AppState::new(theme, link_builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_absent_fields() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.link_scheme, "petid");
        assert_eq!(config.link_authority, "share.petid.app");
        assert_eq!(config.theme_name.as_deref(), Some("light"));
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_honors_the_named_theme() {
        let config = Config {
            theme_name: Some("light".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "light");
    }

    #[test]
    fn unknown_theme_names_fall_back_to_default() {
        let config = Config {
            theme_name: Some("mystery".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "dark");
    }
}
