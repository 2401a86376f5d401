//! Settings parser for config.toml

use super::types::Settings;
use beavertail_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "beavertail";

const DEFAULT_CONFIG: &str = r#"# beavertail configuration

[buffer]
# Number of log records kept in memory (oldest are dropped first)
capacity = 1000

[ui]
# Header bar title
title = "SpeedBeaver Logger"
# Show timestamps in UTC instead of local time
utc = false
# Terminal poll timeout in milliseconds
tick_rate_ms = 50
"#;

/// Default location: `<config_dir>/beavertail/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Pick the explicit path if given, otherwise the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load settings from a config file.
///
/// Never fails: a missing, unreadable, or invalid file yields the defaults
/// and a logged warning.
pub fn load_settings(config_path: &Path) -> Settings {
    match try_load_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No config file at {:?}, using defaults", config_path);
            Settings::default()
        }
        Err(e) => {
            warn!("Ignoring config {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings, reporting why the file could not be used
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }

    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content).map_err(|e| Error::config(e.to_string()))
}

/// Write the commented default config file if none exists.
///
/// Returns `true` if a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
