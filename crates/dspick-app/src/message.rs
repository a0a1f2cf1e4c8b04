//! Message types for the application (TEA pattern)

use dspick_core::{DataSourceRecord, SelectableOption};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Instance mounted; carries the default source read from settings
    Activate { default_source_id: Option<String> },

    /// Catalog fetch completed
    DataSourcesFetched { records: Vec<DataSourceRecord> },

    /// Catalog fetch failed
    DataSourceFetchFailed { error: String },

    /// The presentation layer reports a new selection: every option with
    /// its current checkbox state
    SelectionChanged { options: Vec<SelectableOption> },

    /// Instance unmounted
    Teardown,
}
