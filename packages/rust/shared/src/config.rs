//! Application configuration for marksmap.
//!
//! User config lives at `~/.marksmap/marksmap.toml`.
//! An explicit `--config` path overrides the default location; a missing
//! default file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MarksmapError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "marksmap.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".marksmap";

// ---------------------------------------------------------------------------
// Config structs (matching marksmap.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Conversion settings.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// `[convert]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Emit a debug event for every bookmark URI rejected by the validator.
    #[serde(default = "default_true")]
    pub log_dropped_links: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            log_dropped_links: true,
        }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.marksmap/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MarksmapError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.marksmap/marksmap.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from the default location.
/// Returns defaults if the file does not exist or no home directory is known.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(%err, "no config location, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MarksmapError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        MarksmapError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    tracing::debug!(?path, "loaded config file");

    Ok(config)
}
