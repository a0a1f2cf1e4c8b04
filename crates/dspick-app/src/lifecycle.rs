//! Liveness gate of a picker instance
//!
//! The guard is opened when the instance activates and closed when it is
//! torn down. State writes and outward calls only happen while it is open;
//! a fetch that completes after teardown finds it closed and its result is
//! dropped. Closing is final.

use dspick_core::prelude::*;

/// Guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Not activated yet. Gates like `Closed`, but may still open.
    #[default]
    Inactive,
    /// Live: writes and reports go through
    Open,
    /// Torn down, permanently inert
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct LifecycleGuard {
    state: GuardState,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Open the guard. Returns `false` if it was already open or has been
    /// closed; a closed guard never reopens.
    pub fn open(&mut self) -> bool {
        match self.state {
            GuardState::Inactive => {
                self.state = GuardState::Open;
                true
            }
            GuardState::Open => false,
            GuardState::Closed => {
                debug!("Refusing to reopen a closed lifecycle guard");
                false
            }
        }
    }

    /// Close the guard. Idempotent.
    pub fn close(&mut self) {
        self.state = GuardState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == GuardState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == GuardState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guard_is_inactive_and_gated() {
        let guard = LifecycleGuard::new();
        assert_eq!(guard.state(), GuardState::Inactive);
        assert!(!guard.is_open());
        assert!(!guard.is_closed());
    }

    #[test]
    fn test_open_then_close() {
        let mut guard = LifecycleGuard::new();

        assert!(guard.open());
        assert!(guard.is_open());
        assert!(!guard.open());

        guard.close();
        assert!(guard.is_closed());
        assert!(!guard.is_open());
    }

    #[test]
    fn test_closed_guard_never_reopens() {
        let mut guard = LifecycleGuard::new();
        guard.open();
        guard.close();

        assert!(!guard.open());
        assert!(guard.is_closed());
    }

    #[test]
    fn test_close_before_open_is_final() {
        let mut guard = LifecycleGuard::new();
        guard.close();
        guard.close();

        assert!(!guard.open());
        assert_eq!(guard.state(), GuardState::Closed);
    }
}
