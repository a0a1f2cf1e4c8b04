//! Configuration for the data source picker
//!
//! Supports:
//! - `.dspick/config.toml` - Picker and catalog settings
//! - [`SettingsReader`] - Key/value settings lookup used at activation
//! - [`SelectorConfig`] - Collaborators and flags of one picker instance

pub mod selector;
pub mod settings;
pub mod types;

pub use selector::SelectorConfig;
pub use settings::{
    catalog_path, init_config_dir, load_settings, SettingsReader, DEFAULT_DATA_SOURCE_KEY,
};
pub use types::*;
