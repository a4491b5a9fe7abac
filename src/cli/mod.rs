//! # CLI Module
//!
//! Command-line tools for inspecting route manifests.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! Resolve a path to its screen and parameters:
//!
//! ```bash
//! navrouter resolve --manifest routes.yaml doctors/42/profile
//! navrouter resolve /admin/pathways --json
//! ```
//!
//! ### `routes`
//!
//! List the routes in registration order, with their default parameters.
//!
//! ### `nav`
//!
//! Render the nav bar a caller with the given capabilities would see:
//!
//! ```bash
//! navrouter nav --capability doctors.view,rx_guides.view --path doctors
//! ```
//!
//! ### `lint`
//!
//! Check a manifest for duplicate, shadowed and ambiguous routes:
//!
//! ```bash
//! navrouter lint --manifest routes.yaml --fail-on-error
//! ```
//!
//! ### `watch`
//!
//! Watch a manifest and print the re-resolved state after every reload.
//!
//! Every command except `watch` falls back to the built-in admin console when
//! no `--manifest` (or `NAVR_MANIFEST`) is given.

mod commands;


pub use commands::{
    manifest_router, render_nav, resolve, run, run_cli, Cli, Commands, ManifestArgs,
};
