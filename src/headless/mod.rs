//! Headless mode - NDJSON event output and stdin commands
//!
//! Drives one picker instance without any UI. Every outward report of the
//! picker becomes a JSON event on stdout, and the selection is changed with
//! line commands on stdin. This is what scripts and tests talk to.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"selected_data_sources","options":[{"id":"","label":"Local cluster","checked":"on","visible":true}],"timestamp":1704700001000}
//! {"event":"ready","options":[{"id":"","label":"Local cluster","checked":"on","visible":true}],"default_data_source":null,"full_width":false,"timestamp":1704700001001}
//! {"event":"teardown","timestamp":1704700002000}
//! ```

pub mod commands;
pub mod runner;

use chrono::Utc;
use dspick_core::SelectableOption;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Initialization finished (successfully or not); lists every option
    Ready {
        options: Vec<SelectableOption>,
        default_data_source: Option<String>,
        /// Layout hint passed through from configuration
        full_width: bool,
        timestamp: i64,
    },

    /// The picker reported a selection
    SelectedDataSources {
        options: Vec<SelectableOption>,
        timestamp: i64,
    },

    /// Current option list with check states, in answer to `list`
    Options {
        options: Vec<SelectableOption>,
        timestamp: i64,
    },

    /// Non-blocking warning shown to the user
    Warning {
        id: String,
        message: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// The picker was torn down
    Teardown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(
        options: Vec<SelectableOption>,
        default_data_source: Option<String>,
        full_width: bool,
    ) -> Self {
        Self::Ready {
            options,
            default_data_source,
            full_width,
            timestamp: Self::now(),
        }
    }

    pub fn selected_data_sources(options: Vec<SelectableOption>) -> Self {
        Self::SelectedDataSources {
            options,
            timestamp: Self::now(),
        }
    }

    pub fn options(options: Vec<SelectableOption>) -> Self {
        Self::Options {
            options,
            timestamp: Self::now(),
        }
    }

    pub fn warning(id: &str, message: &str) -> Self {
        Self::Warning {
            id: id.to_string(),
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn teardown() -> Self {
        Self::Teardown {
            timestamp: Self::now(),
        }
    }
}
