//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host shell (main.rs) and the domain/storage/worker layers. It implements
//! the event-driven architecture that powers the scan-and-reveal flow.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └── Auth / Worker / Route Changes ─┘
//! ```
//!
//! Navigation is one of the side effects: the handler emits replace/push/back
//! actions, the host executes them against its navigator, and the resulting
//! route change re-enters the loop as an event.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
