//! Fetch completion and selection change handlers

use dspick_core::prelude::*;
use dspick_core::{normalize, DataSourceRecord, SelectableOption};

use crate::selection::{SelectionPhase, SelectionState};
use crate::services::{FETCH_DATA_SOURCE_ERROR, FETCH_DATA_SOURCE_ERROR_ID};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Normalize fetched records, adopt them and report the full option list.
pub fn handle_data_sources_fetched(
    state: &mut AppState,
    records: Vec<DataSourceRecord>,
) -> UpdateResult {
    state.fetch_in_flight = false;

    if !state.lifecycle.is_open() {
        debug!(
            "Discarding {} data sources fetched after teardown",
            records.len()
        );
        return UpdateResult::none();
    }

    let default_source_id = match std::mem::take(&mut state.phase) {
        SelectionPhase::Initializing { default_source_id } => default_source_id,
        other => {
            warn!("Unexpected data source fetch result in phase {:?}", other);
            state.phase = other;
            return UpdateResult::none();
        }
    };

    let options = normalize(&records, state.include_local_cluster());
    state.selection = SelectionState::initialize(default_source_id, options.clone());
    state.phase = SelectionPhase::Ready;

    UpdateResult::action(UpdateAction::ReportSelection { options })
}

/// Degrade to an empty, usable picker and warn the user once.
pub fn handle_data_source_fetch_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.fetch_in_flight = false;

    if !state.lifecycle.is_open() {
        debug!("Discarding data source fetch failure after teardown: {}", error);
        return UpdateResult::none();
    }

    if !matches!(state.phase, SelectionPhase::Initializing { .. }) {
        warn!("Unexpected data source fetch failure in phase {:?}", state.phase);
        return UpdateResult::none();
    }

    warn!("Failed to fetch data sources: {}", error);
    state.phase = SelectionPhase::Ready;

    UpdateResult::action(UpdateAction::ShowWarning {
        id: FETCH_DATA_SOURCE_ERROR_ID,
        message: FETCH_DATA_SOURCE_ERROR.to_string(),
    })
}

/// Replace the selection and report its checked entries.
pub fn handle_selection_changed(
    state: &mut AppState,
    options: Vec<SelectableOption>,
) -> UpdateResult {
    if !state.lifecycle.is_open() {
        debug!("Ignoring selection change while picker is not live");
        return UpdateResult::none();
    }

    let selected = state.selection.apply_toggle(options);
    trace!("Selection changed, {} checked", selected.len());

    UpdateResult::action(UpdateAction::ReportSelection { options: selected })
}
