//! Background worker for asynchronous document-store operations.
//!
//! This module implements the worker that handles all storage I/O off the
//! event loop, so the interactive shell never blocks on disk access. It
//! includes distributed tracing support for cross-thread observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and request processing logic

pub mod handler;
pub mod messages;

pub use handler::StoreWorker;
pub use messages::{StoreRequest, StoreResponse, TraceContext};
