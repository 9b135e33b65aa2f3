//! Config file discovery and loading.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::CzConfig;
use crate::error::ConfigError;
use crate::git::work_tree_root;

/// Config file looked up in the current directory and the work tree root.
pub const CONFIG_FILE_NAME: &str = ".cz-config.json";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CZ_CUSTOM_CONFIG";

/// Load the configuration, falling back to the built-in default.
///
/// Lookup order:
/// 1. `explicit` (the `--config` flag)
/// 2. `CZ_CUSTOM_CONFIG`
/// 3. `.cz-config.json` in `start_dir`, then in the git work tree root
/// 4. the `config.cz-customizable.config` entry of `package.json`
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<CzConfig, ConfigError> {
    match resolve_config_path(explicit, start_dir)? {
        Some(path) => read_config(&path),
        None => {
            info!("No config file found, using built-in defaults");
            Ok(CzConfig::default())
        }
    }
}

/// Find the config file to use, if any.
///
/// A path requested through the flag or the environment must exist;
/// discovered locations are skipped silently when absent.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        return require_file(path.to_path_buf()).map(Some);
    }

    match env::var(CONFIG_ENV_VAR) {
        Ok(v) if !v.is_empty() => return require_file(PathBuf::from(v)).map(Some),
        _ => {}
    }

    let mut dirs = vec![start_dir.to_path_buf()];
    if let Some(root) = work_tree_root(start_dir) {
        if root != start_dir {
            dirs.push(root);
        }
    }

    for dir in &dirs {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("Using config {}", candidate.display());
            return Ok(Some(candidate));
        }
    }

    for dir in &dirs {
        if let Some(path) = package_json_config(&dir.join("package.json"))? {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Read and parse a JSON config file.
pub fn read_config(path: &Path) -> Result<CzConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn require_file(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::NotFound(path))
    }
}

/// Resolve `config.cz-customizable.config` from a package.json.
///
/// The entry is a path relative to the package.json directory.
fn package_json_config(package_path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    if !package_path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(package_path).map_err(|source| ConfigError::Read {
        path: package_path.to_path_buf(),
        source,
    })?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: package_path.to_path_buf(),
            source,
        })?;

    let Some(relative) = json
        .pointer("/config/cz-customizable/config")
        .and_then(|v| v.as_str())
    else {
        return Ok(None);
    };

    let base = package_path.parent().unwrap_or_else(|| Path::new("."));
    let path = base.join(relative);
    if path.is_file() {
        debug!("Using config {} from {}", path.display(), package_path.display());
        Ok(Some(path))
    } else {
        warn!(
            "{} points to {}, which does not exist",
            package_path.display(),
            path.display()
        );
        Ok(None)
    }
}
