//! # Hot Reload Module
//!
//! Live reloading of a route manifest without restarting the application.
//!
//! ## Overview
//!
//! [`watch_manifest`] watches a manifest file and, on every change:
//! - Reloads and parses the manifest
//! - Rebuilds the route table
//! - Swaps it into the [`Router`] with [`Router::replace_table`], which
//!   re-resolves the current path and emits a `Reload` navigation event
//! - Calls the reload hook with the new manifest and state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navrouter::admin::AdminScreen;
//! use navrouter::hot_reload::watch_manifest;
//!
//! let watcher = watch_manifest("routes.yaml", router.clone(), |manifest, state| {
//!     println!("Reloaded {} routes, now at {}", manifest.routes.len(), state.current);
//! })?;
//!
//! // The watcher stops when dropped
//! ```
//!
//! ## Error Handling
//!
//! If the new manifest fails to parse or build:
//! - The error is logged
//! - The previous route table remains active
//! - The hook is not called
//!
//! Saving a half-edited manifest never breaks navigation.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::manifest::{load_manifest, Manifest};
use crate::navigation::{Router, RouterState};
use crate::router::ScreenKey;

/// Load `path`, rebuild its route table and swap it into `router`.
///
/// On error the router is left untouched.
pub fn reload_manifest<S>(
    path: &Path,
    router: &Router<S>,
) -> anyhow::Result<(Manifest, Arc<RouterState<S>>)>
where
    S: ScreenKey + FromStr,
{
    let manifest = load_manifest(path)?;
    let table = manifest.build_table::<S>()?;
    let state = router.replace_table(table);
    Ok((manifest, state))
}

/// Watch a manifest file and swap the [`Router`]'s route table when it changes.
///
/// The watcher holds only a weak handle to the router; once every
/// [`Router`] clone is gone, change events are ignored.
pub fn watch_manifest<P, S, F>(
    manifest_path: P,
    router: Router<S>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    S: ScreenKey + FromStr,
    F: FnMut(&Manifest, &RouterState<S>) + Send + 'static,
{
    let path: PathBuf = manifest_path.as_ref().to_path_buf();
    let watch_path = path.clone();
    let router = router.downgrade();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                let Some(router) = router.upgrade() else {
                    debug!(path = %watch_path.display(), "hot-reload: router dropped, ignoring change");
                    return;
                };
                match reload_manifest(&watch_path, &router) {
                    Ok((manifest, state)) => {
                        info!(
                            path = %watch_path.display(),
                            routes_count = manifest.routes.len(),
                            screen = %state.current,
                            "hot-reload: route table replaced"
                        );
                        on_reload(&manifest, &state);
                    }
                    Err(e) => {
                        warn!(
                            path = %watch_path.display(),
                            error = %format!("{:#}", e),
                            "hot-reload: keeping previous route table"
                        );
                    }
                }
            }
            Err(e) => warn!(error = %e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    info!(path = %path.display(), "hot-reload: watching manifest");
    Ok(watcher)
}
