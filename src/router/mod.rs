//! # Route Table
//!
//! Maps application paths to screen identifiers and extracts named parameters.
//!
//! ## Matching
//!
//! Both the pattern and the incoming path are split on `/`. Literal segments
//! must be identical (case-sensitive); `:name` segments match any non-empty
//! segment and bind its percent-decoded value. Segment counts must be equal.
//!
//! Routes are tried in registration order and the first full match wins. This
//! is the ordering contract: a specific literal route that could collide with
//! a parameter route of the same length must be registered before it.
//!
//! ## Example
//!
//! ```rust
//! use navrouter::router::RouteTable;
//!
//! # fn main() -> Result<(), navrouter::router::PatternError> {
//! let table = RouteTable::builder()
//!     .route("", "dashboard".to_string())?
//!     .route("doctors/:doctorID/:page", "doctor".to_string())?
//!     .build();
//!
//! let m = table.match_path("doctors/42/profile").expect("route");
//! assert_eq!(m.screen(), "doctor");
//! assert_eq!(m.get_param("doctorID"), Some("42"));
//! assert!(table.match_path("unknown/path").is_none());
//! # Ok(())
//! # }
//! ```

mod core;
mod params;
mod pattern;
#[cfg(test)]
mod tests;

pub use core::{Route, RouteMatch, RouteTable, RouteTableBuilder, ScreenKey};
pub use params::{ParamVec, RouteParams, MAX_INLINE_PARAMS};
pub use pattern::{PatternError, RoutePattern, Segment};
