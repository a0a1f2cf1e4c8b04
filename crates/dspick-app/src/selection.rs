//! Selection state machine
//!
//! `Uninitialized → Initializing → Ready`, with `Ready` looping on
//! selection changes. A failed fetch still ends in `Ready`, with nothing
//! selected.

use dspick_core::{checked_only, SelectableOption};

/// Where the picker is in its initialization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Not activated yet
    #[default]
    Uninitialized,
    /// Fetch outstanding. Holds the default source read at activation
    /// until the options arrive.
    Initializing { default_source_id: Option<String> },
    /// Options known (or fetch failed); selection changes are applied
    Ready,
}

impl SelectionPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, SelectionPhase::Ready)
    }
}

/// Options, their current checkbox states and the advisory default source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    all_options: Vec<SelectableOption>,
    checked_subset: Vec<SelectableOption>,
    default_source_id: Option<String>,
}

impl SelectionState {
    /// Adopt freshly fetched options as both the full option list and the
    /// current selection.
    pub fn initialize(
        default_source_id: Option<String>,
        options: Vec<SelectableOption>,
    ) -> Self {
        Self {
            checked_subset: options.clone(),
            all_options: options,
            default_source_id,
        }
    }

    /// Replace the current selection wholesale and return its checked
    /// entries, in the order given.
    ///
    /// Applying the same selection again yields the same result and leaves
    /// the state unchanged.
    pub fn apply_toggle(
        &mut self,
        new_selection: Vec<SelectableOption>,
    ) -> Vec<SelectableOption> {
        let checked = checked_only(&new_selection);
        self.checked_subset = new_selection;
        checked
    }

    /// Every option produced at initialization
    pub fn all_options(&self) -> &[SelectableOption] {
        &self.all_options
    }

    /// The most recent selection, including unchecked entries
    pub fn checked_subset(&self) -> &[SelectableOption] {
        &self.checked_subset
    }

    /// Checked entries of the most recent selection
    pub fn selected(&self) -> Vec<SelectableOption> {
        checked_only(&self.checked_subset)
    }

    pub fn default_source_id(&self) -> Option<&str> {
        self.default_source_id.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.all_options.is_empty() && self.checked_subset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dspick_core::CheckState;

    fn options() -> Vec<SelectableOption> {
        vec![
            SelectableOption::local_cluster(),
            SelectableOption::new("ds1", "Prod"),
            SelectableOption::new("ds2", "Staging"),
        ]
    }

    #[test]
    fn test_initialize_adopts_options_twice() {
        let state = SelectionState::initialize(Some("ds2".to_string()), options());

        assert_eq!(state.all_options(), options().as_slice());
        assert_eq!(state.checked_subset(), options().as_slice());
        assert_eq!(state.default_source_id(), Some("ds2"));
    }

    #[test]
    fn test_default_source_does_not_reorder_or_filter() {
        let state = SelectionState::initialize(Some("ds2".to_string()), options());
        assert_eq!(state.all_options()[0].id, "");
        assert_eq!(state.all_options().len(), 3);
    }

    #[test]
    fn test_apply_toggle_returns_checked_in_order() {
        let mut state = SelectionState::initialize(None, options());
        let mut selection = options();
        selection[1].checked = CheckState::Off;

        let result = state.apply_toggle(selection.clone());

        assert_eq!(result, vec![options()[0].clone(), options()[2].clone()]);
        assert_eq!(state.checked_subset(), selection.as_slice());
        // all_options is only ever set by initialize
        assert_eq!(state.all_options(), options().as_slice());
    }

    #[test]
    fn test_apply_toggle_is_idempotent() {
        let mut state = SelectionState::initialize(None, options());
        let mut selection = options();
        selection[0].checked = CheckState::Off;

        let first = state.apply_toggle(selection.clone());
        let after_first = state.clone();
        let second = state.apply_toggle(selection);

        assert_eq!(first, second);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_apply_toggle_of_own_output_is_stable() {
        let mut state = SelectionState::initialize(None, options());
        let mut selection = options();
        selection[2].checked = CheckState::Off;

        let once = state.apply_toggle(selection);
        let twice = state.apply_toggle(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_toggle_keeps_duplicates_and_ignores_visibility() {
        let mut state = SelectionState::default();
        let mut hidden = SelectableOption::new("ds1", "Prod");
        hidden.visible = false;
        let selection = vec![hidden.clone(), hidden.clone()];

        let result = state.apply_toggle(selection);

        assert_eq!(result, vec![hidden.clone(), hidden]);
    }

    #[test]
    fn test_all_off_yields_empty_report() {
        let mut state = SelectionState::initialize(None, options());
        let selection: Vec<_> = options()
            .into_iter()
            .map(|o| o.with_checked(CheckState::Off))
            .collect();

        assert!(state.apply_toggle(selection).is_empty());
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_phase_default_is_uninitialized() {
        assert_eq!(SelectionPhase::default(), SelectionPhase::Uninitialized);
        assert!(!SelectionPhase::default().is_ready());
        assert!(SelectionPhase::Ready.is_ready());
    }
}
