//! Overrides loading
//!
//! Data-shaped overrides can live in a `starlog.toml`/`starlog.yaml`/
//! `starlog.json` file; hook stages are code and are registered on the
//! preset programmatically.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::overrides::Overrides;

/// Load overrides from a file, choosing the format by extension
pub fn load_overrides(path: &Path) -> Result<Overrides> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("toml")
        .to_ascii_lowercase();
    info!(path = %path.display(), format, "loading overrides");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let overrides: Overrides = match format.as_str() {
        "toml" => toml::from_str(&content).map_err(ConfigError::TomlError)?,
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?,
        "json" => serde_json::from_str(&content).map_err(ConfigError::JsonError)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
    };

    debug!(path = %path.display(), "overrides loaded");
    Ok(overrides)
}

/// Find an overrides file in a directory or its parents.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `starlog.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/starlog.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_overrides(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for overrides file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let path = current.join(name);
            if path.exists() {
                info!(path = %path.display(), "found overrides file");
                return Some(path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found overrides file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no overrides file found");
    None
}

/// Load overrides from a directory (searching parent directories)
pub fn load_overrides_from_dir(dir: &Path) -> Result<(Overrides, PathBuf)> {
    let path = find_overrides(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;
    let overrides = load_overrides(&path)?;
    Ok((overrides, path))
}

/// Load overrides or fall back to an empty set
pub fn load_overrides_or_default(dir: &Path) -> (Overrides, Option<PathBuf>) {
    match load_overrides_from_dir(dir) {
        Ok((overrides, path)) => (overrides, Some(path)),
        Err(_) => {
            warn!(dir = %dir.display(), "no overrides found, using defaults");
            (Overrides::default(), None)
        }
    }
}
