//! # Dispatcher Module
//!
//! The shell is the top-level container of the application. It renders the
//! nav bar and exactly one screen, selected by the router's current screen
//! identifier, using a static [`ScreenTable`] of render functions.
//!
//! ## Lifecycle
//!
//! 1. [`Shell::mount`] filters the nav menu through the capability check,
//!    renders the screen for the current Router State, and subscribes to
//!    Navigation Events.
//! 2. Every event re-renders; the latest [`Frame`] is available from
//!    [`Shell::frame`].
//! 3. [`Shell::unmount`] (or dropping the shell) unsubscribes.
//!
//! ## Fallback
//!
//! The shell has two states, [`ShellState::Rendering`] and
//! [`ShellState::NotFound`]. A NotFound router state, or a screen with no
//! registered render function, renders the fixed
//! [`NOT_FOUND_PLACEHOLDER`] instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use navrouter::capabilities::AllowAll;
//! use navrouter::dispatcher::{Body, ScreenTable, Shell};
//! use navrouter::nav::NavMenu;
//! use navrouter::navigation::{MemoryHistory, NavigateOptions, Router, RouterConfig};
//! use navrouter::router::RouteTable;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), navrouter::router::PatternError> {
//! let table = RouteTable::builder()
//!     .route("doctors/:id", "doctorDetail")?
//!     .build();
//! let router = Router::new(table, Arc::new(MemoryHistory::new("/")), RouterConfig::default());
//! let screens = ScreenTable::new()
//!     .screen("doctorDetail", |_router, params| {
//!         format!("doctor {}", params.get("id").unwrap_or("?"))
//!     });
//! let shell = Shell::mount(router.clone(), screens, &NavMenu::new("Admin"), &AllowAll);
//! assert_eq!(shell.frame().body.to_string(), "Page Not Found");
//!
//! router.navigate("doctors/7", NavigateOptions::default());
//! assert_eq!(shell.frame().body, Body::Screen("doctor 7".to_string()));
//! # Ok(())
//! # }
//! ```

mod core;
mod screens;

pub use core::{Body, Frame, Shell, ShellState, NOT_FOUND_PLACEHOLDER};
pub use screens::{RenderFn, ScreenTable};
