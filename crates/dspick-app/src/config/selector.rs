//! Everything an [`Engine`](crate::Engine) is built from

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dspick_catalog::FETCH_TIMEOUT;

use super::settings::SettingsReader;
use super::types::Settings;
use crate::services::{Notifier, TracingNotifier};

/// Collaborators and flags of one picker instance
pub struct SelectorConfig<C> {
    /// Catalog the data sources are listed from
    pub catalog: Arc<C>,
    /// Source of the default data source setting
    pub settings: Box<dyn SettingsReader>,
    /// Receives the fetch failure warning
    pub notifier: Box<dyn Notifier>,
    pub hide_local_cluster: bool,
    /// Presentation hint, not interpreted by the picker
    pub full_width: bool,
    /// Fallback used when the settings hold no default data source
    pub default_source_id: Option<String>,
    pub fetch_timeout: Duration,
}

impl<C> SelectorConfig<C> {
    /// Defaults: no settings, warnings go to the log, local cluster shown
    pub fn new(catalog: C) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Box::new(HashMap::<String, String>::new()),
            notifier: Box::new(TracingNotifier),
            hide_local_cluster: false,
            full_width: false,
            default_source_id: None,
            fetch_timeout: FETCH_TIMEOUT,
        }
    }

    /// Take flags and timeout from loaded settings, which also become the
    /// settings reader
    pub fn from_settings(catalog: C, settings: Settings) -> Self {
        let mut config = Self::new(catalog);
        config.hide_local_cluster = settings.data_source.hide_local_cluster;
        config.full_width = settings.data_source.full_width;
        config.fetch_timeout = settings.catalog.timeout();
        config.settings = Box::new(settings);
        config
    }

    pub fn with_settings(mut self, settings: impl SettingsReader + 'static) -> Self {
        self.settings = Box::new(settings);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn hide_local_cluster(mut self, hide: bool) -> Self {
        self.hide_local_cluster = hide;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn default_source_id(mut self, id: Option<String>) -> Self {
        self.default_source_id = id;
        self
    }

    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

impl<C> std::fmt::Debug for SelectorConfig<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorConfig")
            .field("hide_local_cluster", &self.hide_local_cluster)
            .field("full_width", &self.full_width)
            .field("default_source_id", &self.default_source_id)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}
