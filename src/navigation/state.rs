use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::normalize::Location;
use crate::ids::EventId;
use crate::router::{RouteParams, RouteTable, ScreenKey};

/// The screen the router currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Current<S> {
    Screen(S),
    /// Reserved sentinel for paths no route matched
    NotFound,
}

impl<S> Current<S> {
    pub fn screen(&self) -> Option<&S> {
        match self {
            Current::Screen(s) => Some(s),
            Current::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Current::NotFound)
    }
}

impl<S: fmt::Display> fmt::Display for Current<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Current::Screen(s) => s.fmt(f),
            Current::NotFound => f.write_str("not_found"),
        }
    }
}

/// Router State. Replaced wholesale on every navigation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterState<S> {
    pub current: Current<S>,
    /// Route parameters (defaults merged with path values)
    pub params: RouteParams,
    /// Normalized path relative to the root
    pub path: String,
    /// Parsed query string; not used for matching. Repeated keys keep the
    /// last value
    pub query: RouteParams,
    /// Query string as given, without `?`. Written back to history verbatim
    #[serde(skip)]
    pub raw_query: String,
}

impl<S: ScreenKey> RouterState<S> {
    /// Resolve `location` against `table`.
    pub fn resolve(table: &RouteTable<S>, location: &Location) -> Self {
        let query = RouteParams::from_query(&location.query);
        match table.match_path(&location.path) {
            Some(m) => Self {
                current: Current::Screen(m.route.screen.clone()),
                params: m.params,
                path: location.path.clone(),
                query,
                raw_query: location.query.clone(),
            },
            None => Self {
                current: Current::NotFound,
                params: RouteParams::new(),
                path: location.path.clone(),
                query,
                raw_query: location.query.clone(),
            },
        }
    }

    /// Path plus query string, as fed back into navigation.
    pub fn location(&self) -> String {
        if self.raw_query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.raw_query)
        }
    }
}

/// Why a navigation event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationCause {
    /// `navigate` with a new history entry
    Push,
    /// `navigate` replacing the current history entry
    Replace,
    /// Browser back/forward
    PopState,
    /// Route table swapped and the current path re-resolved
    Reload,
}

impl fmt::Display for NavigationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NavigationCause::Push => "push",
            NavigationCause::Replace => "replace",
            NavigationCause::PopState => "pop_state",
            NavigationCause::Reload => "reload",
        };
        f.write_str(s)
    }
}

/// Emitted after every Router State change.
#[derive(Debug, Clone)]
pub struct NavigationEvent<S> {
    pub id: EventId,
    pub cause: NavigationCause,
    pub state: Arc<RouterState<S>>,
    pub previous: Arc<RouterState<S>>,
}
