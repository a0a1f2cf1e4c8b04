//! Activation and teardown handlers

use dspick_catalog::DATA_SOURCE_FIELDS;
use dspick_core::prelude::*;

use crate::selection::SelectionPhase;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Open the guard and request the one catalog fetch of this instance.
///
/// Duplicate activations and activation after teardown are ignored.
pub fn handle_activate(state: &mut AppState, default_source_id: Option<String>) -> UpdateResult {
    if state.phase != SelectionPhase::Uninitialized {
        warn!("Ignoring duplicate activation (phase: {:?})", state.phase);
        return UpdateResult::none();
    }

    if !state.lifecycle.open() {
        debug!("Ignoring activation of a torn down picker");
        return UpdateResult::none();
    }

    info!(
        "Activating picker (default source: {:?}, local cluster: {})",
        default_source_id,
        state.include_local_cluster()
    );

    state.phase = SelectionPhase::Initializing { default_source_id };
    state.fetch_in_flight = true;

    UpdateResult::action(UpdateAction::FetchDataSources {
        fields: &DATA_SOURCE_FIELDS,
    })
}

/// Close the guard. An outstanding fetch keeps running; its result is
/// dropped when it arrives.
pub fn handle_teardown(state: &mut AppState) -> UpdateResult {
    if state.fetch_in_flight {
        debug!("Tearing down with a data source fetch still in flight");
    }
    state.lifecycle.close();
    UpdateResult::none()
}
