//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{lifecycle, selection, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Activate { default_source_id } => {
            lifecycle::handle_activate(state, default_source_id)
        }

        Message::Teardown => lifecycle::handle_teardown(state),

        Message::DataSourcesFetched { records } => {
            selection::handle_data_sources_fetched(state, records)
        }

        Message::DataSourceFetchFailed { error } => {
            selection::handle_data_source_fetch_failed(state, error)
        }

        Message::SelectionChanged { options } => {
            selection::handle_selection_changed(state, options)
        }
    }
}
