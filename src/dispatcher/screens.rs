use std::collections::HashMap;
use std::fmt;

use crate::navigation::Router;
use crate::router::{RouteParams, ScreenKey};

/// Render function for one screen. Receives the router and the current
/// parameters, nothing else.
pub type RenderFn<S, V> = Box<dyn Fn(&Router<S>, &RouteParams) -> V + Send + Sync>;

/// Static mapping from screen identifier to render function, registered once
/// at application start.
pub struct ScreenTable<S, V> {
    renderers: HashMap<S, RenderFn<S, V>>,
}

impl<S: ScreenKey, V> Default for ScreenTable<S, V> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<S: ScreenKey, V> ScreenTable<S, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the render function for `screen`.
    #[must_use]
    pub fn screen<F>(mut self, screen: S, render: F) -> Self
    where
        F: Fn(&Router<S>, &RouteParams) -> V + Send + Sync + 'static,
    {
        self.register(screen, render);
        self
    }

    pub fn register<F>(&mut self, screen: S, render: F)
    where
        F: Fn(&Router<S>, &RouteParams) -> V + Send + Sync + 'static,
    {
        self.renderers.insert(screen, Box::new(render));
    }

    pub fn get(&self, screen: &S) -> Option<&RenderFn<S, V>> {
        self.renderers.get(screen)
    }

    pub fn contains(&self, screen: &S) -> bool {
        self.renderers.contains_key(screen)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl<S: ScreenKey, V> fmt::Debug for ScreenTable<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut screens: Vec<String> = self.renderers.keys().map(|s| s.to_string()).collect();
        screens.sort();
        f.debug_struct("ScreenTable").field("screens", &screens).finish()
    }
}
