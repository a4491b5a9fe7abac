use serde::Serialize;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Maximum number of route parameters before heap allocation.
/// The admin routes carry at most three (`case/:caseID/visit/:visitID` plus `page`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Inline parameter storage.
///
/// Param names use `Arc<str>` since they come from the static route table;
/// values are per-navigation data taken from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Mapping from parameter name to value. Keys are unique; order is not
/// significant for equality.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    entries: ParamVec,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.insert_shared(Arc::from(name), value.into());
    }

    pub(crate) fn insert_shared(&mut self, name: Arc<str>, value: String) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: &RouteParams) {
        for (k, v) in &other.entries {
            self.insert_shared(Arc::clone(k), v.clone());
        }
    }

    /// Convert to a `HashMap`. Allocates; prefer [`get`](Self::get).
    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::new();
        for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
            if !k.is_empty() {
                params.insert(&k, v.into_owned());
            }
        }
        params
    }

    /// Serialize as a query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.iter() {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl PartialEq for RouteParams {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for RouteParams {}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k.as_ref(), v);
        }
        params
    }
}

impl From<&BTreeMap<String, String>> for RouteParams {
    fn from(map: &BTreeMap<String, String>) -> Self {
        map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect()
    }
}

impl Serialize for RouteParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted for stable output in the CLI
        let sorted: BTreeMap<&str, &str> = self.iter().collect();
        sorted.serialize(serializer)
    }
}

impl fmt::Display for RouteParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted: BTreeMap<&str, &str> = self.iter().collect();
        f.write_str("{")?;
        for (i, (k, v)) in sorted.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", k, v)?;
        }
        f.write_str("}")
    }
}
