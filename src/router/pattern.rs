//! Route pattern parsing and segment matching.
//!
//! Patterns are written relative to the application root, with `/`-separated
//! segments. A segment starting with `:` is a named parameter; everything else
//! is a literal that must match exactly (case-sensitive).
//!
//! ```text
//! ""                        -> root route, zero segments
//! "doctors"                 -> one literal
//! "doctors/:doctorID/:page" -> one literal, two parameters
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::params::RouteParams;

static PARAM_NAME: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok());

/// Returns true when `name` is usable as a parameter name.
pub(crate) fn is_valid_param_name(name: &str) -> bool {
    match PARAM_NAME.as_ref() {
        Some(re) => re.is_match(name),
        None => false,
    }
}

/// One segment of a [`RoutePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only the identical segment
    Literal(String),
    /// Matches any non-empty segment and binds it under this name
    Param(Arc<str>),
}

impl Segment {
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// Error raised when a route pattern cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `a//b`: interior segments must not be empty
    EmptySegment { pattern: String },
    /// `:` alone, or a name that is not an identifier
    InvalidParamName { pattern: String, name: String },
    /// The same parameter name appears twice in one pattern
    DuplicateParam { pattern: String, name: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptySegment { pattern } => {
                write!(f, "route pattern '{}' contains an empty segment", pattern)
            }
            PatternError::InvalidParamName { pattern, name } => write!(
                f,
                "route pattern '{}' has invalid parameter name '{}' (expected [A-Za-z_][A-Za-z0-9_]*)",
                pattern, name
            ),
            PatternError::DuplicateParam { pattern, name } => write!(
                f,
                "route pattern '{}' binds parameter '{}' more than once",
                pattern, name
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `doctors/:doctorID/:page`.
    ///
    /// Leading and trailing slashes are ignored, so `/doctors/` and `doctors`
    /// are the same pattern.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = pattern.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self {
                source: String::new(),
                segments: Vec::new(),
            });
        }

        let mut segments = Vec::with_capacity(trimmed.matches('/').count() + 1);
        let mut seen: Vec<&str> = Vec::new();

        for raw in trimmed.split('/') {
            if raw.is_empty() {
                return Err(PatternError::EmptySegment {
                    pattern: pattern.to_string(),
                });
            }
            if let Some(name) = raw.strip_prefix(':') {
                if !is_valid_param_name(name) {
                    return Err(PatternError::InvalidParamName {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                if seen.contains(&name) {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                seen.push(name);
                segments.push(Segment::Param(Arc::from(name)));
            } else {
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        Ok(Self {
            source: trimmed.to_string(),
            segments,
        })
    }

    /// The normalized pattern text (no leading or trailing slash).
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of the parameters in positional order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_ref()),
            Segment::Literal(_) => None,
        })
    }

    /// Match already-split path segments against this pattern.
    ///
    /// Parameter values are percent-decoded. A value that does not decode to
    /// valid UTF-8, or an empty segment in a parameter position, makes the
    /// pattern fail to match.
    pub fn match_segments(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    let decoded = urlencoding::decode(value).ok()?;
                    params.insert_shared(Arc::clone(name), decoded.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Build a concrete path by substituting `params` into this pattern.
    ///
    /// Returns `None` when a parameter of the pattern is missing or empty.
    pub fn format(&self, params: &RouteParams) -> Option<String> {
        let mut out = String::with_capacity(self.source.len());
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    let value = params.get(name).filter(|v| !v.is_empty())?;
                    out.push_str(&urlencoding::encode(value));
                }
            }
        }
        Some(out)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
