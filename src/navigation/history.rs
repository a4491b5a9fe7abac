//! Browser history abstraction.

use std::sync::{Mutex, PoisonError};

/// The address bar and session history the router writes to.
///
/// In a browser this wraps `history.pushState`/`replaceState`; tests and the
/// CLI use [`MemoryHistory`].
pub trait History: Send + Sync {
    /// The URL currently shown in the address bar.
    fn current_url(&self) -> String;
    /// Add a new entry, discarding any forward entries.
    fn push(&self, url: &str);
    /// Overwrite the current entry.
    fn replace(&self, url: &str);
}

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    index: usize,
}

/// In-memory session history with back/forward support.
///
/// `back` and `forward` move the cursor and return the URL that should be fed
/// to [`Router::handle_pop_state`](crate::navigation::Router::handle_pop_state),
/// mirroring the browser's popstate event.
#[derive(Debug)]
pub struct MemoryHistory {
    stack: Mutex<Stack>,
}

impl MemoryHistory {
    pub fn new(initial_url: &str) -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![initial_url.to_string()],
                index: 0,
            }),
        }
    }

    fn with_stack<R>(&self, f: impl FnOnce(&mut Stack) -> R) -> R {
        let mut guard = self.stack.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn back(&self) -> Option<String> {
        self.with_stack(|s| {
            if s.index == 0 {
                return None;
            }
            s.index -= 1;
            s.entries.get(s.index).cloned()
        })
    }

    pub fn forward(&self) -> Option<String> {
        self.with_stack(|s| {
            if s.index + 1 >= s.entries.len() {
                return None;
            }
            s.index += 1;
            s.entries.get(s.index).cloned()
        })
    }

    /// Number of entries, including forward entries.
    pub fn len(&self) -> usize {
        self.with_stack(|s| s.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<String> {
        self.with_stack(|s| s.entries.clone())
    }

    pub fn index(&self) -> usize {
        self.with_stack(|s| s.index)
    }
}

impl History for MemoryHistory {
    fn current_url(&self) -> String {
        self.with_stack(|s| s.entries.get(s.index).cloned().unwrap_or_default())
    }

    fn push(&self, url: &str) {
        self.with_stack(|s| {
            s.entries.truncate(s.index + 1);
            s.entries.push(url.to_string());
            s.index = s.entries.len() - 1;
        })
    }

    fn replace(&self, url: &str) {
        self.with_stack(|s| match s.entries.get_mut(s.index) {
            Some(slot) => *slot = url.to_string(),
            None => {
                s.entries.push(url.to_string());
                s.index = s.entries.len() - 1;
            }
        })
    }
}
