use std::fmt;
use std::str::FromStr;

use super::types::{Manifest, MenuEntry};
use crate::nav::{NavMenu, Requirement};
use crate::router::{PatternError, RouteParams, RouteTable, ScreenKey};

/// A manifest entry that cannot be turned into a route or menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Route `index` has an unparseable pattern
    Pattern { index: usize, source: PatternError },
    /// A route or menu entry names a screen the application does not know
    UnknownScreen {
        section: &'static str,
        index: usize,
        screen: String,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Pattern { index, source } => {
                write!(f, "routes[{}]: {}", index, source)
            }
            ManifestError::UnknownScreen {
                section,
                index,
                screen,
            } => write!(f, "{}[{}]: unknown screen '{}'", section, index, screen),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Pattern { source, .. } => Some(source),
            ManifestError::UnknownScreen { .. } => None,
        }
    }
}

fn parse_screen<S: FromStr>(
    section: &'static str,
    index: usize,
    screen: &str,
) -> Result<S, ManifestError> {
    S::from_str(screen).map_err(|_| ManifestError::UnknownScreen {
        section,
        index,
        screen: screen.to_string(),
    })
}

fn menu_items<'a, S: ScreenKey + FromStr>(
    section: &'static str,
    entries: &'a [MenuEntry],
) -> Result<Vec<(S, &'a MenuEntry)>, ManifestError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| parse_screen(section, i, &e.id).map(|id| (id, e)))
        .collect()
}

impl Manifest {
    /// Build the route table and navigation menu described by this manifest.
    ///
    /// Screen names are parsed with `S::from_str`. The first bad entry aborts
    /// the build.
    pub fn build<S>(&self) -> Result<(RouteTable<S>, NavMenu<S>), ManifestError>
    where
        S: ScreenKey + FromStr,
    {
        Ok((self.build_table()?, self.build_menu()?))
    }

    pub fn build_table<S>(&self) -> Result<RouteTable<S>, ManifestError>
    where
        S: ScreenKey + FromStr,
    {
        let mut builder = RouteTable::builder();
        for (index, entry) in self.routes.iter().enumerate() {
            let screen = parse_screen("routes", index, &entry.screen)?;
            let defaults = RouteParams::from(&entry.defaults);
            builder = builder
                .route_with_defaults(&entry.pattern, screen, defaults)
                .map_err(|source| ManifestError::Pattern { index, source })?;
        }
        Ok(builder.build())
    }

    pub fn build_menu<S>(&self) -> Result<NavMenu<S>, ManifestError>
    where
        S: ScreenKey + FromStr,
    {
        let mut menu = NavMenu::new(self.title.clone());
        for (id, entry) in menu_items("menu", &self.menu)? {
            menu = menu.item(
                id,
                &entry.url,
                &entry.name,
                Requirement::any_of(entry.requires.iter().cloned()),
            );
        }
        for (id, entry) in menu_items("right_menu", &self.right_menu)? {
            menu = menu.right_item(
                id,
                &entry.url,
                &entry.name,
                Requirement::any_of(entry.requires.iter().cloned()),
            );
        }
        Ok(menu)
    }
}
