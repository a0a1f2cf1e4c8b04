//! Configuration types for the data source picker
//!
//! Defines:
//! - `Settings` - Top-level `.dspick/config.toml` contents
//! - `DataSourceSettings` - Default source and presentation flags
//! - `CatalogSettings` - Where the catalog lives and how long to wait for it

use dspick_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (.dspick/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub data_source: DataSourceSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Reject values the picker cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.catalog.timeout_ms == 0 {
            return Err(Error::config_invalid("catalog.timeout_ms must be positive"));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(Error::config_invalid("catalog.path is empty"));
        }
        if self.data_source.default_data_source.as_deref() == Some("") {
            return Err(Error::config_invalid(
                "data_source.default_data_source must not be empty",
            ));
        }
        Ok(())
    }
}

/// Picker behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataSourceSettings {
    /// Advisory default source handed to the presentation layer. Never
    /// filters or reorders the option list.
    #[serde(default)]
    pub default_data_source: Option<String>,

    /// Leave the local-cluster pseudo-source out of the option list
    #[serde(default)]
    pub hide_local_cluster: bool,

    /// Passed through to presentation untouched
    #[serde(default)]
    pub full_width: bool,
}

/// Catalog location
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Saved-object export, relative to the project directory
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// Catalog request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl CatalogSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data-sources.json")
}

fn default_timeout_ms() -> u64 {
    30_000
}
