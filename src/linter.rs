//! # Route Table Linter
//!
//! Static checks over a [`RouteTable`]. Lookup is first-registered-wins, so a
//! table can silently contain routes that never match. The linter finds them.
//!
//! ## Checks Performed
//!
//! 1. **duplicate_pattern** (error) - the same pattern registered twice
//! 2. **shadowed_route** (error) - an earlier route matches every path a later
//!    route matches, so the later route is unreachable
//! 3. **ambiguous_route** (warning) - two routes match some common path but
//!    neither covers the other; the earlier one wins for the shared paths
//!
//! Registering a literal route before a parameter route of the same shape
//! (`doctors/new` before `doctors/:id`) is the intended way to express
//! precedence and is not reported.
//!
//! ## Usage
//!
//! ```rust
//! use navrouter::linter::{lint_table, LintSeverity};
//! use navrouter::router::RouteTable;
//!
//! # fn main() -> Result<(), navrouter::router::PatternError> {
//! let table = RouteTable::builder()
//!     .route("doctors/:id", "doctor")?
//!     .route("doctors/new", "newDoctor")?
//!     .build();
//! let issues = lint_table(&table);
//! assert_eq!(issues[0].kind, "shadowed_route");
//! assert_eq!(issues[0].severity, LintSeverity::Error);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::router::{Route, RouteTable, ScreenKey, Segment};


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - a route can never be reached
    Error,
    /// Warning - the table relies on registration order in a non-obvious way
    Warning,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A lint issue found in a route table
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "route[3]:doctors/new")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "shadowed_route")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// True when every path `later` matches is also matched by `earlier`.
fn covers(earlier: &[Segment], later: &[Segment]) -> bool {
    earlier.len() == later.len()
        && earlier.iter().zip(later).all(|(e, l)| match (e, l) {
            (Segment::Param(_), _) => true,
            (Segment::Literal(a), Segment::Literal(b)) => a == b,
            (Segment::Literal(_), Segment::Param(_)) => false,
        })
}

/// True when some concrete path is matched by both.
fn overlaps(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| match (x, y) {
            (Segment::Literal(p), Segment::Literal(q)) => p == q,
            _ => true,
        })
}

fn location<S: ScreenKey>(index: usize, route: &Route<S>) -> String {
    format!("route[{}]:{}", index, route.pattern)
}

/// Lint a route table.
///
/// Each later route is reported at most once, against the first earlier route
/// that causes the issue.
pub fn lint_table<S: ScreenKey>(table: &RouteTable<S>) -> Vec<LintIssue> {
    let routes: Vec<&Route<S>> = table.routes().collect();
    let mut issues = Vec::new();

    for (j, later) in routes.iter().enumerate() {
        for (i, earlier) in routes.iter().enumerate().take(j) {
            let (e, l) = (earlier.pattern.segments(), later.pattern.segments());

            if earlier.pattern.as_str() == later.pattern.as_str() {
                issues.push(
                    LintIssue::new(
                        location(j, later),
                        LintSeverity::Error,
                        "duplicate_pattern",
                        format!(
                            "Pattern '{}' is already registered as route[{}] for '{}'",
                            later.pattern, i, earlier.screen
                        ),
                    )
                    .with_suggestion("Remove the duplicate registration"),
                );
                break;
            }

            if covers(e, l) {
                issues.push(
                    LintIssue::new(
                        location(j, later),
                        LintSeverity::Error,
                        "shadowed_route",
                        format!(
                            "Route for '{}' can never match: route[{}] '{}' matches every path it does",
                            later.screen, i, earlier.pattern
                        ),
                    )
                    .with_suggestion(format!(
                        "Register '{}' before '{}'",
                        later.pattern, earlier.pattern
                    )),
                );
                break;
            }

            if overlaps(e, l) && !covers(l, e) {
                issues.push(
                    LintIssue::new(
                        location(j, later),
                        LintSeverity::Warning,
                        "ambiguous_route",
                        format!(
                            "Route for '{}' overlaps route[{}] '{}'; the earlier route wins where both match",
                            later.screen, i, earlier.pattern
                        ),
                    )
                    .with_suggestion("Add a distinguishing literal segment to one of the patterns"),
                );
                break;
            }
        }
    }

    issues
}

/// True if any issue is an error.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues to stdout, grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
    ] {
        let group: Vec<&LintIssue> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{}", heading);
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}
