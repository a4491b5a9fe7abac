//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the router.
//!
//! ## Environment Variables
//!
//! ### `NAVR_ROOT`
//!
//! Root prefix all routes are mounted under. Normalized to `/prefix/`.
//! Values that are not a plain path (a full URL, or containing `?`, `#` or
//! whitespace) are ignored with a warning.
//!
//! Default: the manifest's `root`
//!
//! ### `NAVR_TITLE`
//!
//! Title shown in the nav bar. Overrides the manifest title when set.
//!
//! ### `NAVR_MANIFEST`
//!
//! Path of the route manifest (YAML, JSON or TOML). When unset the built-in
//! admin console routes are used.
//!
//! ### `NAVR_CAPABILITIES`
//!
//! Comma-separated list of granted capabilities, e.g.
//! `doctors.view,pathways.view`.
//!
//! Default: none
//!
//! ## Usage
//!
//! ```rust
//! use navrouter::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Root: {:?}", config.root);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! export NAVR_ROOT=/admin/
//! export NAVR_MANIFEST=routes.yaml
//! export NAVR_CAPABILITIES=doctors.view,rx_guides.view
//! navrouter nav
//! ```

use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::capabilities::CapabilitySet;
use crate::navigation::normalize_root;

/// Runtime configuration loaded from environment variables.
///
/// Command-line flags take precedence; these values fill in whatever the
/// command line leaves unset.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Normalized root prefix, when `NAVR_ROOT` holds a usable one
    pub root: Option<String>,
    pub title: Option<String>,
    pub manifest: Option<PathBuf>,
    pub capabilities: CapabilitySet,
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Normalize a root prefix, rejecting values that are not a plain path.
pub fn parse_root(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.contains("://") || raw.contains(|c: char| c == '?' || c == '#' || c.is_whitespace()) {
        return None;
    }
    Some(normalize_root(raw))
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// Unusable values are logged and ignored.
    pub fn from_env() -> Self {
        let root = non_empty("NAVR_ROOT").and_then(|raw| {
            let root = parse_root(&raw);
            if root.is_none() {
                warn!(value = %raw, "Ignoring NAVR_ROOT: not a path prefix");
            }
            root
        });

        RuntimeConfig {
            root,
            title: non_empty("NAVR_TITLE"),
            manifest: non_empty("NAVR_MANIFEST").map(PathBuf::from),
            capabilities: non_empty("NAVR_CAPABILITIES")
                .map(|list| CapabilitySet::parse(&list))
                .unwrap_or_default(),
        }
    }
}
