use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_root() -> String {
    "/".to_string()
}

/// Declarative description of an application's routes and menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub title: String,
    /// Root prefix the routes are mounted under
    #[serde(default = "default_root")]
    pub root: String,
    /// Routes in registration order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
    #[serde(default)]
    pub right_menu: Vec<MenuEntry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            title: String::new(),
            root: default_root(),
            routes: Vec::new(),
            menu: Vec::new(),
            right_menu: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub pattern: String,
    pub screen: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defaults: BTreeMap<String, String>,
}

impl RouteEntry {
    pub fn new(pattern: &str, screen: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            screen: screen.to_string(),
            defaults: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_default(mut self, name: &str, value: &str) -> Self {
        self.defaults.insert(name.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Screen the entry is highlighted for
    pub id: String,
    pub url: String,
    pub name: String,
    /// Any one of these capabilities makes the entry visible; empty means always
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
}

impl MenuEntry {
    pub fn new(id: &str, url: &str, name: &str, requires: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            name: name.to_string(),
            requires: requires.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from a file name. Unknown extensions are read as JSON.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            Some("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}
