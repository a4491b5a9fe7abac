//! # navrouter
//!
//! **navrouter** is the client-side navigation core of a single-page
//! administrative application: it maps URL paths to screens, owns the
//! navigation state, keeps it in sync with browser history, and drives a
//! shell that renders exactly one screen at a time.
//!
//! ## Architecture
//!
//! - **[`router`]** - Route Table: `:param` patterns, first-registered-wins
//!   matching, default parameters, reverse URL building
//! - **[`navigation`]** - The [`Router`](navigation::Router): Router State,
//!   `navigate`, back/forward, listeners with scoped subscriptions
//! - **[`dispatcher`]** - The [`Shell`](dispatcher::Shell): mounts the screen
//!   for the current state, re-renders on every navigation, falls back to
//!   "Page Not Found"
//! - **[`nav`]** - Navigation menu and the rendered nav bar
//! - **[`capabilities`]** - Permission predicate that gates menu entries
//! - **[`manifest`]** - Routes and menu declared in YAML, JSON or TOML
//! - **[`admin`]** - The admin console's screens, routes and menu
//! - **[`hot_reload`]** - Swap the route table when a manifest changes
//! - **[`linter`]** - Find shadowed, duplicate and ambiguous routes
//! - **[`runtime_config`]** / **[`logging`]** - Environment configuration
//!   and structured logging
//! - **[`cli`]** - The `navrouter` command line
//!
//! ### Navigation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant Router
//!     participant Table as RouteTable
//!     participant History
//!     participant Shell
//!
//!     User->>Router: navigate("doctors/7")
//!     Router->>Table: match_path("doctors/7")
//!     Table-->>Router: doctorDetail {id: "7"}
//!     Router->>Router: swap Router State
//!     Router->>History: push("/admin/doctors/7")
//!     Router->>Shell: NavigationEvent
//!     Shell->>Shell: render(doctorDetail, {id: "7"})
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use navrouter::admin::{self, AdminScreen};
//! use navrouter::capabilities::CapabilitySet;
//! use navrouter::dispatcher::{ScreenTable, Shell};
//! use navrouter::navigation::{MemoryHistory, NavigateOptions, Router, RouterConfig};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let router = Router::new(
//!     admin::route_table()?,
//!     Arc::new(MemoryHistory::new("/admin/")),
//!     RouterConfig::with_root(admin::ADMIN_ROOT),
//! );
//!
//! let screens = ScreenTable::new()
//!     .screen(AdminScreen::Dashboard, |_router, _params| "Dashboard".to_string())
//!     .screen(AdminScreen::Doctor, |_router, params| {
//!         format!("Doctor {}", params.get("doctorID").unwrap_or_default())
//!     });
//!
//! let caps = CapabilitySet::parse("doctors.view");
//! let shell = Shell::mount(router.clone(), screens, &admin::menu()?, &caps);
//! assert_eq!(shell.frame().body.to_string(), "Dashboard");
//!
//! router.navigate("doctors/42/profile", NavigateOptions::default());
//! assert_eq!(shell.frame().body.to_string(), "Doctor 42");
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod capabilities;
pub mod cli;
pub mod dispatcher;
pub mod hot_reload;
pub mod ids;
pub mod linter;
pub mod logging;
pub mod manifest;
pub mod nav;
pub mod navigation;
pub mod router;
pub mod runtime_config;

pub use manifest::{load_manifest, Manifest, ManifestError};
pub use navigation::{NavigateOptions, Router, RouterConfig, RouterState};
pub use router::{RouteMatch, RouteParams, RouteTable, ScreenKey};
