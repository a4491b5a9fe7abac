//! Capability checks that gate navigation entries and edit affordances.
//!
//! The permission source is external to the router; anything that can answer
//! `has(capability)` plugs in through [`Capabilities`].

use std::collections::HashSet;

/// Permission predicate supplied by the host application.
pub trait Capabilities {
    fn has(&self, capability: &str) -> bool;
}

impl<F> Capabilities for F
where
    F: Fn(&str) -> bool,
{
    fn has(&self, capability: &str) -> bool {
        self(capability)
    }
}

/// Grants every capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Capabilities for AllowAll {
    fn has(&self, _capability: &str) -> bool {
        true
    }
}

/// Grants nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl Capabilities for DenyAll {
    fn has(&self, _capability: &str) -> bool {
        false
    }
}

/// A fixed set of granted capability names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    granted: HashSet<String>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, e.g. `doctors.view, pathways.view`.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn grant(&mut self, capability: impl Into<String>) {
        self.granted.insert(capability.into());
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// Granted names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.granted.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Capabilities for CapabilitySet {
    fn has(&self, capability: &str) -> bool {
        self.granted.contains(capability)
    }
}

impl<T: Into<String>> FromIterator<T> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().map(Into::into).collect(),
        }
    }
}
