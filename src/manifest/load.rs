use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use super::types::{Manifest, ManifestFormat};

/// Read and parse a manifest file, choosing the format by extension.
pub fn load_manifest(path: impl AsRef<Path>) -> anyhow::Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let format = ManifestFormat::from_path(path);
    debug!(path = %path.display(), format = ?format, "Parsing manifest");

    let manifest = parse_manifest(&content, format)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;

    info!(
        path = %path.display(),
        title = %manifest.title,
        routes_count = manifest.routes.len(),
        menu_items = manifest.menu.len() + manifest.right_menu.len(),
        "Manifest loaded"
    );
    Ok(manifest)
}

pub fn parse_manifest(content: &str, format: ManifestFormat) -> anyhow::Result<Manifest> {
    let manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml::from_str(content)?,
    };
    Ok(manifest)
}
