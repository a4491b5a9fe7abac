//! Shell core: mounts one screen at a time and re-renders on navigation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::{debug, info, warn};

use super::screens::ScreenTable;
use crate::capabilities::Capabilities;
use crate::nav::{NavBar, NavMenu};
use crate::navigation::{Current, NavigationEvent, Router, RouterState, Subscription};
use crate::router::ScreenKey;

/// Text of the fixed placeholder rendered when no screen applies.
pub const NOT_FOUND_PLACEHOLDER: &str = "Page Not Found";

/// Which screen the shell is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState<S> {
    Rendering(S),
    NotFound,
}

/// Body of a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<V> {
    Screen(V),
    /// The fixed "Page Not Found" placeholder
    NotFound,
}

impl<V> Body<V> {
    pub fn view(&self) -> Option<&V> {
        match self {
            Body::Screen(v) => Some(v),
            Body::NotFound => None,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Body<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Screen(v) => v.fmt(f),
            Body::NotFound => f.write_str(NOT_FOUND_PLACEHOLDER),
        }
    }
}

/// Output of one render pass: nav bar plus the mounted screen.
#[derive(Debug, Clone)]
pub struct Frame<S, V> {
    pub state: ShellState<S>,
    pub nav: NavBar<S>,
    pub body: Body<V>,
}

struct ShellInner<S, V> {
    screens: ScreenTable<S, V>,
    /// Menu already filtered by capability at mount
    menu: NavMenu<S>,
    frame: RwLock<Arc<Frame<S, V>>>,
    renders: AtomicU64,
}

impl<S: ScreenKey, V> ShellInner<S, V> {
    fn render(&self, router: &Router<S>, state: &RouterState<S>) -> Frame<S, V> {
        let rendered = match &state.current {
            Current::Screen(screen) => self
                .screens
                .get(screen)
                .map(|render| (screen, render(router, &state.params))),
            Current::NotFound => None,
        };

        let (shell_state, body) = match rendered {
            Some((screen, view)) => (ShellState::Rendering(screen.clone()), Body::Screen(view)),
            None => {
                if let Current::Screen(screen) = &state.current {
                    warn!(screen = %screen, path = %state.path, "No render function registered for screen");
                }
                (ShellState::NotFound, Body::NotFound)
            }
        };

        self.renders.fetch_add(1, Ordering::Relaxed);
        Frame {
            state: shell_state,
            nav: self.menu.bar(router, state.current.screen()),
            body,
        }
    }

    fn store(&self, frame: Frame<S, V>) {
        *self.frame.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(frame);
    }
}

/// Top-level container. Renders exactly one screen, chosen by the router.
///
/// Mounting subscribes to the router; every Navigation Event re-renders.
/// Unmounting, or dropping the shell along with its subscription,
/// unsubscribes. A notification that races with unmount finds the shell gone
/// and does nothing.
pub struct Shell<S, V> {
    router: Router<S>,
    inner: Arc<ShellInner<S, V>>,
    subscription: Option<Subscription<S>>,
}

impl<S, V> Shell<S, V>
where
    S: ScreenKey,
    V: Send + Sync + 'static,
{
    /// Mount the shell on `router`.
    ///
    /// `capabilities` filters `menu` once; the filtered menu is reused for
    /// every render.
    pub fn mount(
        router: Router<S>,
        screens: ScreenTable<S, V>,
        menu: &NavMenu<S>,
        capabilities: &dyn Capabilities,
    ) -> Self {
        let menu = menu.filtered(capabilities);
        let inner = ShellInner {
            screens,
            menu,
            frame: RwLock::new(Arc::new(Frame {
                state: ShellState::NotFound,
                nav: NavBar {
                    title: String::new(),
                    brand_href: router.root().to_string(),
                    left: Vec::new(),
                    right: Vec::new(),
                },
                body: Body::NotFound,
            })),
            renders: AtomicU64::new(0),
        };

        let initial = inner.render(&router, &router.state());
        inner.store(initial);
        let inner = Arc::new(inner);

        let weak_inner: Weak<ShellInner<S, V>> = Arc::downgrade(&inner);
        let weak_router = router.downgrade();
        let subscription = router.on_route_change(move |event: &NavigationEvent<S>| {
            let (Some(inner), Some(router)) = (weak_inner.upgrade(), weak_router.upgrade()) else {
                debug!(event_id = %event.id, "Navigation event after shell unmount ignored");
                return;
            };
            // Render whatever the router holds now, which a listener that ran
            // earlier may already have moved past `event.state`
            let frame = inner.render(&router, &router.state());
            inner.store(frame);
        });

        info!(
            screens = inner.screens.len(),
            menu_items = inner.menu.left.len(),
            state = ?inner.frame.read().unwrap_or_else(PoisonError::into_inner).state,
            "Shell mounted"
        );

        Self {
            router,
            inner,
            subscription: Some(subscription),
        }
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> Arc<Frame<S, V>> {
        let guard = self.inner.frame.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    pub fn state(&self) -> ShellState<S> {
        self.frame().state.clone()
    }

    /// Total renders since mount, including the initial one.
    pub fn render_count(&self) -> u64 {
        self.inner.renders.load(Ordering::Relaxed)
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn router(&self) -> &Router<S> {
        &self.router
    }

    /// Force a render outside of a navigation event.
    pub fn rerender(&self) -> Arc<Frame<S, V>> {
        let frame = self.inner.render(&self.router, &self.router.state());
        self.inner.store(frame);
        self.frame()
    }

    /// Stop listening to the router. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.router.off_route_change(&subscription);
            info!(renders = self.render_count(), "Shell unmounted");
        }
    }
}
