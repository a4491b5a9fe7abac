//! The Router: owns Router State and mediates between history and the route table.

use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use tracing::{debug, info};

use super::history::History;
use super::normalize::{is_under_root, normalize_root, split_location, Location};
use super::state::{NavigationCause, NavigationEvent, RouterState};
use crate::ids::{EventId, SubscriptionId};
use crate::router::{RouteTable, ScreenKey};

/// Callback invoked on every Navigation Event.
pub type Listener<S> = Arc<dyn Fn(&NavigationEvent<S>) + Send + Sync>;

/// Router construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// URL prefix all routes are mounted under, e.g. `/admin/`
    pub root: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn with_root(root: &str) -> Self {
        Self {
            root: normalize_root(root),
        }
    }
}

/// Options for [`Router::navigate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of pushing a new one
    pub replace_history: bool,
}

impl NavigateOptions {
    pub fn push() -> Self {
        Self {
            replace_history: false,
        }
    }

    pub fn replace() -> Self {
        Self {
            replace_history: true,
        }
    }
}

/// Outcome of [`Router::follow_link`].
#[derive(Debug, Clone)]
pub enum LinkOutcome<S> {
    /// The link was inside the app and the router navigated
    Handled(Arc<RouterState<S>>),
    /// The link leaves the app; let the browser load it
    External,
}

struct RouterInner<S> {
    root: String,
    table: ArcSwap<RouteTable<S>>,
    state: ArcSwap<RouterState<S>>,
    history: Arc<dyn History>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<S>)>>,
    /// Serializes state swaps with their history writes
    transition: Mutex<()>,
}

impl<S> RouterInner<S> {
    fn remove_listener(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        before != listeners.len()
    }

    fn is_registered(&self, id: SubscriptionId) -> bool {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(lid, _)| *lid == id)
    }
}

/// Navigation state owner. Cheap to clone; clones share state.
///
/// There is no global instance: create one at bootstrap and pass it to the
/// shell and to screens.
pub struct Router<S> {
    inner: Arc<RouterInner<S>>,
}

impl<S> Clone for Router<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ScreenKey> std::fmt::Debug for Router<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("root", &self.inner.root)
            .field("state", &self.state())
            .finish()
    }
}

/// Non-owning handle to a [`Router`], used by listeners to avoid cycles.
pub struct WeakRouter<S> {
    inner: Weak<RouterInner<S>>,
}

impl<S> Clone for WeakRouter<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S> WeakRouter<S> {
    pub fn upgrade(&self) -> Option<Router<S>> {
        self.inner.upgrade().map(|inner| Router { inner })
    }
}

/// A live listener registration. Dropping it deregisters the listener.
pub struct Subscription<S> {
    id: SubscriptionId,
    router: Weak<RouterInner<S>>,
}

impl<S> Subscription<S> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Deregister now. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(inner) = self.router.upgrade() {
            if inner.remove_listener(self.id) {
                debug!(subscription_id = %self.id, "Route listener removed");
            }
        }
    }
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: ScreenKey> Router<S> {
    /// Create a router, resolving the initial URL from `history`.
    ///
    /// No history entry is written and no event is emitted.
    pub fn new(table: RouteTable<S>, history: Arc<dyn History>, config: RouterConfig) -> Self {
        let root = normalize_root(&config.root);
        let location = split_location(&history.current_url(), &root);
        let state = RouterState::resolve(&table, &location);

        info!(
            root = %root,
            path = %state.path,
            screen = %state.current,
            routes_count = table.len(),
            "Router initialized"
        );

        Self {
            inner: Arc::new(RouterInner {
                root,
                table: ArcSwap::from_pointee(table),
                state: ArcSwap::from_pointee(state),
                history,
                listeners: RwLock::new(Vec::new()),
                transition: Mutex::new(()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakRouter<S> {
        WeakRouter {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// The configured root prefix, always of the form `/prefix/` or `/`.
    pub fn root(&self) -> &str {
        &self.inner.root
    }

    /// Snapshot of the current Router State.
    pub fn state(&self) -> Arc<RouterState<S>> {
        self.inner.state.load_full()
    }

    /// Snapshot of the current route table.
    pub fn table(&self) -> Arc<RouteTable<S>> {
        self.inner.table.load_full()
    }

    /// Absolute href for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.inner.root, path.trim_start_matches('/'))
    }

    /// Navigate to `path`, write history, and notify listeners.
    ///
    /// Unmatched or malformed paths resolve to [`Current::NotFound`](super::Current::NotFound);
    /// this never fails.
    pub fn navigate(&self, path: &str, options: NavigateOptions) -> Arc<RouterState<S>> {
        let cause = if options.replace_history {
            NavigationCause::Replace
        } else {
            NavigationCause::Push
        };
        self.transition(path, cause)
    }

    /// Browser back/forward: re-resolve `url` without writing history.
    pub fn handle_pop_state(&self, url: &str) -> Arc<RouterState<S>> {
        self.transition(url, NavigationCause::PopState)
    }

    /// In-app link interception.
    ///
    /// Absolute URLs and root-relative hrefs outside the root prefix (such as
    /// `/logout`) are left to the browser.
    pub fn follow_link(&self, href: &str) -> LinkOutcome<S> {
        if url::Url::parse(href).is_ok() || !is_under_root(href, &self.inner.root) {
            debug!(href = %href, root = %self.inner.root, "Link leaves the app");
            return LinkOutcome::External;
        }
        LinkOutcome::Handled(self.transition(href, NavigationCause::Push))
    }

    /// Swap in a new route table and re-resolve the current location.
    ///
    /// The swap and the re-resolution happen under the transition lock, so a
    /// concurrent `navigate` is applied either entirely before or entirely
    /// after the reload.
    pub fn replace_table(&self, table: RouteTable<S>) -> Arc<RouterState<S>> {
        info!(routes_count = table.len(), "Route table replaced");
        self.transition_with(NavigationCause::Reload, Some(table), |current| Location {
            path: current.path.clone(),
            query: current.raw_query.clone(),
        })
    }

    /// Register `listener` for Navigation Events.
    ///
    /// Keep the returned [`Subscription`] alive while the owning component is
    /// mounted; dropping it (or calling [`off_route_change`](Self::off_route_change))
    /// deregisters.
    #[must_use = "dropping the subscription deregisters the listener"]
    pub fn on_route_change<F>(&self, listener: F) -> Subscription<S>
    where
        F: Fn(&NavigationEvent<S>) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        debug!(subscription_id = %id, "Route listener added");
        Subscription {
            id,
            router: Arc::downgrade(&self.inner),
        }
    }

    /// Deregister a listener. Idempotent.
    pub fn off_route_change(&self, subscription: &Subscription<S>) {
        subscription.cancel();
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop every listener. Used when the application is torn down.
    pub fn teardown(&self) {
        let removed = {
            let mut listeners = self
                .inner
                .listeners
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let n = listeners.len();
            listeners.clear();
            n
        };
        info!(listeners_removed = removed, "Router torn down");
    }

    fn transition(&self, raw: &str, cause: NavigationCause) -> Arc<RouterState<S>> {
        let location = split_location(raw, &self.inner.root);
        self.transition_with(cause, None, move |_| location)
    }

    /// Swap in the state resolved from `locate`, optionally installing `table`
    /// first. `locate` sees the state current at the time the lock is taken.
    fn transition_with<F>(
        &self,
        cause: NavigationCause,
        table: Option<RouteTable<S>>,
        locate: F,
    ) -> Arc<RouterState<S>>
    where
        F: FnOnce(&RouterState<S>) -> Location,
    {
        let event = {
            let _guard = self
                .inner
                .transition
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            if let Some(table) = table {
                self.inner.table.store(Arc::new(table));
            }
            let location = locate(&self.inner.state.load_full());
            let table = self.inner.table.load();
            let next = Arc::new(RouterState::resolve(&table, &location));
            let previous = self.inner.state.swap(Arc::clone(&next));

            match cause {
                NavigationCause::Push => self.inner.history.push(&self.href(&next.location())),
                NavigationCause::Replace => {
                    self.inner.history.replace(&self.href(&next.location()))
                }
                NavigationCause::PopState | NavigationCause::Reload => {}
            }

            NavigationEvent {
                id: EventId::new(),
                cause,
                state: next,
                previous,
            }
        };

        info!(
            event_id = %event.id,
            cause = %cause,
            path = %event.state.path,
            screen = %event.state.current,
            params = %event.state.params,
            "Navigated"
        );

        self.notify(&event);
        event.state
    }

    fn notify(&self, event: &NavigationEvent<S>) {
        // Snapshot so listeners may (un)subscribe or navigate re-entrantly
        let snapshot: Vec<(SubscriptionId, Listener<S>)> = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, l)| (*id, Arc::clone(l)))
            .collect();

        for (id, listener) in snapshot {
            // A listener navigated; the nested event already reached everyone
            if !Arc::ptr_eq(&event.state, &*self.inner.state.load()) {
                debug!(event_id = %event.id, "Navigation superseded, dispatch stopped");
                break;
            }
            // Removed by an earlier listener during this dispatch
            if !self.inner.is_registered(id) {
                continue;
            }
            listener(event);
        }
    }
}
