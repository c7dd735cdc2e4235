use std::path::Path;

use anyhow::{Context, Result};
use sassmod_importer::ImporterConfig;

/// Read an importer config file. Relative paths inside it are taken
/// relative to the file's directory.
pub fn load(path: &Path) -> Result<ImporterConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let mut config: ImporterConfig =
        toml::from_str(&text).with_context(|| format!("Invalid config: {}", path.display()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    config.basedir = config.basedir.map(|basedir| dir.join(basedir));
    config.include_paths = config
        .include_paths
        .into_iter()
        .map(|include| dir.join(include))
        .collect();

    Ok(config)
}
