//! Navigation layer: routes, deep links, history, and the redirector.
//!
//! This module implements the scan-and-reveal routing core. An inbound deep
//! link (a shared pet card URL), the asynchronously resolving auth state, and
//! the navigation history feed the [`Redirector`], which performs at most one
//! history-replacing redirect per arrival episode. Everything downstream of
//! the redirect decision — which screen a route shows, whether it is the
//! public or the management rendering — keys off the enumerated [`Route`].
//!
//! # Modules
//!
//! - [`route`]: enumerated route kinds, parsed once per navigation event
//! - [`deeplink`]: capture of the most recent inbound link URL
//! - [`redirector`]: the redirect state machine and its episode flags
//! - [`history`]: `Navigator` trait and in-memory history stack
//! - [`link`]: scanned-card URL construction

pub mod deeplink;
pub mod history;
pub mod link;
pub mod redirector;
pub mod route;

pub use deeplink::DeepLinkCapture;
pub use history::{MemoryHistory, Navigator};
pub use link::LinkBuilder;
pub use redirector::{ArrivalEpisode, Redirector};
pub use route::Route;
