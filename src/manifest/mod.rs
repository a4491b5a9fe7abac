//! # Manifest Module
//!
//! Declarative route and menu definitions, loaded from YAML, JSON or TOML.
//!
//! ```yaml
//! title: Admin
//! root: /admin/
//! routes:
//!   - { pattern: "", screen: dashboard }
//!   - { pattern: "doctors/:doctorID/:page", screen: doctor }
//!   - { pattern: pathways, screen: pathways, defaults: { page: list } }
//! menu:
//!   - { id: doctorSearch, url: doctors, name: Doctors, requires: [doctors.view] }
//! ```
//!
//! [`load_manifest`] reads a file; [`Manifest::build`] turns it into a
//! [`RouteTable`](crate::router::RouteTable) and a
//! [`NavMenu`](crate::nav::NavMenu) for any screen type that implements
//! `FromStr`.

mod build;
mod load;
mod types;

pub use build::ManifestError;
pub use load::{load_manifest, parse_manifest};
pub use types::{Manifest, ManifestFormat, MenuEntry, RouteEntry};
