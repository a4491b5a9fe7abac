//! Route table core: registration-ordered, first-match-wins lookup.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::params::RouteParams;
use super::pattern::{PatternError, RoutePattern};

/// Identifies a screen. Implemented for every type with the listed bounds,
/// so both enums and `String` work.
pub trait ScreenKey: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> ScreenKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{}

/// One registered entry of a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct Route<S> {
    pub pattern: RoutePattern,
    pub screen: S,
    /// Fixed parameters added to every match; extracted values take precedence.
    pub defaults: RouteParams,
}

/// Result of successfully matching a path against a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteMatch<S> {
    /// The matched route (shared with the table)
    pub route: Arc<Route<S>>,
    /// Defaults merged with the values extracted from the path
    pub params: RouteParams,
}

impl<S> RouteMatch<S> {
    pub fn screen(&self) -> &S {
        &self.route.screen
    }

    pub fn pattern(&self) -> &str {
        self.route.pattern.as_str()
    }

    #[inline]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// Static mapping from path patterns to screens.
///
/// Patterns are tried in registration order and the first full match wins,
/// so a literal route that competes with a parameter route of the same shape
/// must be registered first.
#[derive(Debug, Clone)]
pub struct RouteTable<S> {
    routes: Vec<Arc<Route<S>>>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S: ScreenKey> RouteTable<S> {
    pub fn builder() -> RouteTableBuilder<S> {
        RouteTableBuilder { routes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<S>> {
        self.routes.iter().map(|r| r.as_ref())
    }

    /// Pattern texts in registration order.
    pub fn patterns(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|r| r.pattern.as_str().to_string())
            .collect()
    }

    /// Match a normalized path (no root prefix, query string, or surrounding slashes).
    ///
    /// `None` means no route matched; callers render their NotFound state.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<S>> {
        let start = Instant::now();
        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        for route in &self.routes {
            if let Some(extracted) = route.pattern.match_segments(&segments) {
                let mut params = route.defaults.clone();
                params.merge(&extracted);
                debug!(
                    path = %path,
                    screen = %route.screen,
                    route_pattern = %route.pattern,
                    params = %params,
                    duration_us = start.elapsed().as_micros(),
                    "Route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    params,
                });
            }
        }

        warn!(
            path = %path,
            routes_count = self.routes.len(),
            duration_us = start.elapsed().as_micros(),
            "No route matched"
        );
        None
    }

    /// Build the path for `screen` from `params`.
    ///
    /// Picks the first route registered for `screen` whose parameters are all
    /// supplied and where every supplied parameter is either bound by the
    /// pattern or equal to one of the route's defaults.
    pub fn reverse(&self, screen: &S, params: &RouteParams) -> Option<String> {
        self.routes
            .iter()
            .filter(|r| &r.screen == screen)
            .find(|r| {
                params.iter().all(|(k, v)| {
                    r.pattern.param_names().any(|p| p == k) || r.defaults.get(k) == Some(v)
                })
            })
            .and_then(|r| r.pattern.format(params))
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        println!("[routes] {} registered", self.routes.len());
        for (i, route) in self.routes.iter().enumerate() {
            let pattern = if route.pattern.is_empty() {
                "<root>"
            } else {
                route.pattern.as_str()
            };
            if route.defaults.is_empty() {
                println!("{:>3}  {:<40} -> {}", i, pattern, route.screen);
            } else {
                println!(
                    "{:>3}  {:<40} -> {} {}",
                    i, pattern, route.screen, route.defaults
                );
            }
        }
    }
}

/// Builder for [`RouteTable`]; registration order is preserved.
#[derive(Debug)]
pub struct RouteTableBuilder<S> {
    routes: Vec<Route<S>>,
}

impl<S: ScreenKey> RouteTableBuilder<S> {
    /// Register `pattern` for `screen`.
    pub fn route(self, pattern: &str, screen: S) -> Result<Self, PatternError> {
        self.route_with_defaults(pattern, screen, RouteParams::new())
    }

    /// Register `pattern` for `screen`, adding `defaults` to every match.
    pub fn route_with_defaults(
        mut self,
        pattern: &str,
        screen: S,
        defaults: RouteParams,
    ) -> Result<Self, PatternError> {
        let pattern = RoutePattern::parse(pattern)?;
        self.routes.push(Route {
            pattern,
            screen,
            defaults,
        });
        Ok(self)
    }

    pub fn build(self) -> RouteTable<S> {
        let routes: Vec<Arc<Route<S>>> = self.routes.into_iter().map(Arc::new).collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|r| format!("{} -> {}", r.pattern, r.screen))
            .collect();
        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Route table loaded"
        );

        RouteTable { routes }
    }
}
