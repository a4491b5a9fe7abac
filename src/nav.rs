//! Site-wide navigation menu and the nav bar model rendered by the shell.

use serde::Serialize;

use crate::capabilities::Capabilities;
use crate::navigation::Router;
use crate::router::ScreenKey;

/// Href of the fixed sign-out link appended to the right side of every nav bar.
pub const SIGN_OUT_HREF: &str = "/logout";
pub const SIGN_OUT_LABEL: &str = "Sign Out";

/// Which capabilities make a menu entry visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Requirement {
    #[default]
    Always,
    /// Visible when the caller has at least one of these
    AnyOf(Vec<String>),
}

impl Requirement {
    pub fn any_of<I, T>(caps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let caps: Vec<String> = caps.into_iter().map(Into::into).collect();
        if caps.is_empty() {
            Requirement::Always
        } else {
            Requirement::AnyOf(caps)
        }
    }

    pub fn allows(&self, capabilities: &dyn Capabilities) -> bool {
        match self {
            Requirement::Always => true,
            Requirement::AnyOf(caps) => caps.iter().any(|c| capabilities.has(c)),
        }
    }
}

/// A static menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem<S> {
    /// Screen this entry is highlighted for
    pub id: S,
    /// App-relative url, e.g. `guides/resources`
    pub url: String,
    pub name: String,
    pub requires: Requirement,
}

/// The static list of menu entries for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenu<S> {
    pub title: String,
    pub left: Vec<NavItem<S>>,
    pub right: Vec<NavItem<S>>,
}

impl<S: ScreenKey> NavMenu<S> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Append a left-side entry.
    #[must_use]
    pub fn item(mut self, id: S, url: &str, name: &str, requires: Requirement) -> Self {
        self.left.push(NavItem {
            id,
            url: url.to_string(),
            name: name.to_string(),
            requires,
        });
        self
    }

    /// Append a right-side entry (rendered before the sign-out link).
    #[must_use]
    pub fn right_item(mut self, id: S, url: &str, name: &str, requires: Requirement) -> Self {
        self.right.push(NavItem {
            id,
            url: url.to_string(),
            name: name.to_string(),
            requires,
        });
        self
    }

    /// A copy of this menu with only the entries `capabilities` allows.
    /// Pure filter: order is preserved and nothing is cached.
    pub fn filtered(&self, capabilities: &dyn Capabilities) -> NavMenu<S> {
        let keep = |items: &[NavItem<S>]| -> Vec<NavItem<S>> {
            items
                .iter()
                .filter(|i| i.requires.allows(capabilities))
                .cloned()
                .collect()
        };
        NavMenu {
            title: self.title.clone(),
            left: keep(&self.left),
            right: keep(&self.right),
        }
    }

    /// Build the nav bar for `active` using `router` for hrefs.
    pub fn bar(&self, router: &Router<S>, active: Option<&S>) -> NavBar<S> {
        let link = |item: &NavItem<S>| NavLink {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            href: router.href(&item.url),
            active: active == Some(&item.id),
        };

        let mut right: Vec<NavLink<S>> = self.right.iter().map(link).collect();
        right.push(NavLink {
            id: None,
            name: SIGN_OUT_LABEL.to_string(),
            href: SIGN_OUT_HREF.to_string(),
            active: false,
        });

        NavBar {
            title: self.title.clone(),
            brand_href: router.root().to_string(),
            left: self.left.iter().map(link).collect(),
            right,
        }
    }
}

/// One rendered link of the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink<S> {
    /// `None` for fixed links such as sign-out
    pub id: Option<S>,
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// The rendered top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar<S> {
    pub title: String,
    pub brand_href: String,
    pub left: Vec<NavLink<S>>,
    pub right: Vec<NavLink<S>>,
}

impl<S> NavBar<S> {
    pub fn active(&self) -> Option<&NavLink<S>> {
        self.left.iter().chain(&self.right).find(|l| l.active)
    }
}
