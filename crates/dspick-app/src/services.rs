//! Collaborator seams: warning notifications and selection reporting

use dspick_core::prelude::*;
use dspick_core::SelectableOption;

/// Message id of the fetch failure warning
pub const FETCH_DATA_SOURCE_ERROR_ID: &str = "dataSource.fetchDataSourceError";

/// Warning shown when the catalog cannot be read
pub const FETCH_DATA_SOURCE_ERROR: &str = "Unable to fetch existing data sources";

/// Non-blocking user notifications (toasts)
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a warning; `id` is a stable message key, `message` the text
    fn add_warning(&self, id: &str, message: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn add_warning(&self, id: &str, message: &str) {
        warn!("[{}] {}", id, message);
    }
}

/// Receives the picker's outward reports.
///
/// Called once after initialization with every option, then once per
/// selection change with the checked options only. Each call gets its own
/// snapshot.
pub trait SelectionHandler {
    fn on_selected_data_sources(&mut self, options: Vec<SelectableOption>);
}

impl<F> SelectionHandler for F
where
    F: FnMut(Vec<SelectableOption>),
{
    fn on_selected_data_sources(&mut self, options: Vec<SelectableOption>) {
        self(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_selection_handler() {
        let mut seen = Vec::new();
        {
            let mut handler = |options: Vec<SelectableOption>| seen.push(options.len());
            handler.on_selected_data_sources(vec![SelectableOption::local_cluster()]);
            handler.on_selected_data_sources(vec![]);
        }
        assert_eq!(seen, vec![1, 0]);
    }

    #[test]
    fn test_mock_notifier_records_warning() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_add_warning()
            .withf(|id, message| {
                id == FETCH_DATA_SOURCE_ERROR_ID && message == FETCH_DATA_SOURCE_ERROR
            })
            .times(1)
            .return_const(());

        notifier.add_warning(FETCH_DATA_SOURCE_ERROR_ID, FETCH_DATA_SOURCE_ERROR);
    }
}
