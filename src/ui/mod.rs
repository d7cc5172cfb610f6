//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides
//! theme support and a strict public/management separation for the pet card.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → ViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ChromeView, DetailActions, OwnerContactView, PetCardState, PetCardView, PetListItem,
    RenderMode, Screen, ViewModel,
};
