//! Application state (Model in TEA pattern)

use crate::lifecycle::LifecycleGuard;
use crate::selection::{SelectionPhase, SelectionState};

/// Complete state of one picker instance
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Gates every state write and outward report
    pub lifecycle: LifecycleGuard,

    pub phase: SelectionPhase,

    pub selection: SelectionState,

    /// A catalog fetch has been spawned and its result not yet processed
    pub fetch_in_flight: bool,

    pub hide_local_cluster: bool,

    /// Presentation hint carried for the caller
    pub full_width: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(hide_local_cluster: bool, full_width: bool) -> Self {
        Self {
            hide_local_cluster,
            full_width,
            ..Self::default()
        }
    }

    pub fn include_local_cluster(&self) -> bool {
        !self.hide_local_cluster
    }

    /// Only a fresh, never torn down instance may activate
    pub fn can_activate(&self) -> bool {
        self.phase == SelectionPhase::Uninitialized && !self.lifecycle.is_closed()
    }

    pub fn is_ready(&self) -> bool {
        self.phase.is_ready()
    }

    pub fn default_source_id(&self) -> Option<&str> {
        match &self.phase {
            SelectionPhase::Initializing { default_source_id } => default_source_id.as_deref(),
            _ => self.selection.default_source_id(),
        }
    }
}
