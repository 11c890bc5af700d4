use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes `<dir>/<name>.json`, creating `dir` when needed.
pub fn write_features_json<T: Serialize>(name: &str, features: &T, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", name));
    let json = serde_json::to_string_pretty(features)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Features saved to: {}", path.display());
    Ok(path)
}
