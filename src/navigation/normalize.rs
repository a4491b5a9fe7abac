//! Turning addresses into route-table paths.

/// Normalize a root prefix to the `/prefix/` form. `""` and `"/"` both mean
/// the site root.
pub fn normalize_root(root: &str) -> String {
    let trimmed = root.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// An address split into its route path and raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path relative to the root, without surrounding slashes
    pub path: String,
    /// Query string without `?`, empty if absent
    pub query: String,
}

/// Split `raw` into a [`Location`] relative to `root` (already normalized).
///
/// Accepts absolute URLs (scheme and host are dropped), root-relative paths
/// (`/admin/doctors`), app-relative paths (`doctors`), and paths with a leading
/// slash that are not under the root (`/drugs` is treated as `drugs`).
/// Fragments are dropped.
pub fn split_location(raw: &str, root: &str) -> Location {
    let owned;
    let mut rest = raw.trim();

    if let Ok(parsed) = url::Url::parse(rest) {
        if parsed.has_host() {
            owned = match parsed.query() {
                Some(q) => format!("{}?{}", parsed.path(), q),
                None => parsed.path().to_string(),
            };
            rest = &owned;
        }
    }

    let rest = rest.split('#').next().unwrap_or_default();
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, q),
        None => (rest, ""),
    };

    Location {
        path: strip_root(path, root).trim_matches('/').to_string(),
        query: query.to_string(),
    }
}

/// Returns true when a non-absolute `href` addresses a page under `root`.
/// App-relative hrefs (no leading slash) always do.
pub fn is_under_root(href: &str, root: &str) -> bool {
    if root == "/" || !href.starts_with('/') {
        return true;
    }
    href.starts_with(root) || href == root.trim_end_matches('/')
}

fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    if root == "/" {
        return path;
    }
    if let Some(rest) = path.strip_prefix(root) {
        return rest;
    }
    if path == root.trim_end_matches('/') {
        return "";
    }
    path
}
