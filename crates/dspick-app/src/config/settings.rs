//! Settings parser for .dspick/config.toml and the settings reader seam

use super::types::Settings;
use dspick_core::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const DSPICK_DIR: &str = ".dspick";

/// Settings key holding the default data source id
pub const DEFAULT_DATA_SOURCE_KEY: &str = "defaultDataSource";

/// Key/value access to user settings.
///
/// The picker reads [`DEFAULT_DATA_SOURCE_KEY`] once when it activates.
pub trait SettingsReader {
    /// Value stored under `key`, or `fallback` when unset
    fn get(&self, key: &str, fallback: Option<String>) -> Option<String>;
}

impl SettingsReader for Settings {
    fn get(&self, key: &str, fallback: Option<String>) -> Option<String> {
        match key {
            DEFAULT_DATA_SOURCE_KEY => self
                .data_source
                .default_data_source
                .clone()
                .or(fallback),
            _ => fallback,
        }
    }
}

impl SettingsReader for HashMap<String, String> {
    fn get(&self, key: &str, fallback: Option<String>) -> Option<String> {
        HashMap::get(self, key).cloned().or(fallback)
    }
}

/// Load settings from `.dspick/config.toml`
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(DSPICK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the catalog file against the project directory
pub fn catalog_path(project_path: &Path, settings: &Settings) -> PathBuf {
    if settings.catalog.path.is_absolute() {
        settings.catalog.path.clone()
    } else {
        project_path.join(&settings.catalog.path)
    }
}

/// Create a default config file in the .dspick/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let dspick_dir = project_path.join(DSPICK_DIR);

    if !dspick_dir.exists() {
        std::fs::create_dir_all(&dspick_dir)
            .map_err(|e| Error::config(format!("Failed to create .dspick dir: {}", e)))?;
    }

    let config_path = dspick_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Data source picker configuration

[data_source]
# Advisory default source id shown by the presentation layer
# default_data_source = "my-data-source"
hide_local_cluster = false
full_width = false

[catalog]
# Saved-object export, relative to this project
path = "data-sources.json"
timeout_ms = 30000
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
