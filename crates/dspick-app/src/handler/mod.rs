//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `lifecycle`: Activation and teardown
//! - `selection`: Fetch completion and selection changes

pub(crate) mod lifecycle;
pub(crate) mod selection;
pub(crate) mod update;


use dspick_core::SelectableOption;

// Re-export main entry point
pub use update::update;

/// Actions that the engine should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn the one catalog fetch of this activation
    FetchDataSources { fields: &'static [&'static str] },

    /// Hand an options snapshot to the selection handler
    ReportSelection { options: Vec<SelectableOption> },

    /// Show a non-blocking warning
    ShowWarning { id: &'static str, message: String },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
