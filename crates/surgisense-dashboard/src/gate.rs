use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ViewError;

/// The loading flag of one view action.
///
/// Only one call per action may be in flight. A second submission while the
/// first is outstanding is rejected, not queued.
#[derive(Debug)]
pub struct ActionGate {
    action: &'static str,
    loading: AtomicBool,
}

impl ActionGate {
    pub const fn new(action: &'static str) -> Self {
        Self {
            action,
            loading: AtomicBool::new(false),
        }
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Raise the loading flag. It drops back when the guard is dropped.
    pub fn try_begin(&self) -> Result<GateGuard<'_>, ViewError> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| GateGuard { gate: self })
            .map_err(|_| ViewError::Busy(self.action))
    }
}

#[must_use = "the action is only marked in flight while the guard lives"]
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a ActionGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.loading.store(false, Ordering::Release);
    }
}
