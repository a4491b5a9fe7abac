//! # Navigation Module
//!
//! The [`Router`] owns the Router State (current screen, parameters, path),
//! keeps it in sync with browser history, and notifies listeners whenever it
//! changes.
//!
//! ## Overview
//!
//! - [`Router::navigate`] normalizes a path, matches it against the
//!   [`RouteTable`](crate::router::RouteTable), swaps the state in one step,
//!   pushes or replaces a history entry, and emits a [`NavigationEvent`].
//! - [`Router::handle_pop_state`] runs the same path for browser back/forward
//!   without touching history.
//! - [`Router::on_route_change`] returns a [`Subscription`]; the listener stays
//!   registered until the subscription is cancelled or dropped.
//!
//! Paths that match no route resolve to [`Current::NotFound`]; navigation never
//! returns an error.
//!
//! ## Example
//!
//! ```rust
//! use navrouter::navigation::{Current, MemoryHistory, NavigateOptions, Router, RouterConfig};
//! use navrouter::router::RouteTable;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), navrouter::router::PatternError> {
//! let table = RouteTable::builder()
//!     .route("", "dashboard".to_string())?
//!     .route("doctors/:id", "doctorDetail".to_string())?
//!     .build();
//! let history = Arc::new(MemoryHistory::new("/admin/"));
//! let router = Router::new(table, history, RouterConfig::with_root("/admin/"));
//!
//! let state = router.navigate("doctors/7", NavigateOptions::default());
//! assert_eq!(state.current, Current::Screen("doctorDetail".to_string()));
//! assert_eq!(state.params.get("id"), Some("7"));
//!
//! let state = router.navigate("unknown/path", NavigateOptions::default());
//! assert!(state.current.is_not_found());
//! # Ok(())
//! # }
//! ```

mod core;
mod history;
mod normalize;
mod state;
#[cfg(test)]
mod tests;

pub use core::{
    LinkOutcome, Listener, NavigateOptions, Router, RouterConfig, Subscription, WeakRouter,
};
pub use history::{History, MemoryHistory};
pub use normalize::{is_under_root, normalize_root, split_location, Location};
pub use state::{Current, NavigationCause, NavigationEvent, RouterState};
