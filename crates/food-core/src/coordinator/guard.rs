//! RAII guards for the load and mutation axes.
//!
//! Dropping a guard is the cleanup path, so a future cancelled mid-request
//! still leaves the page out of its loading/pending state.

use std::cell::RefCell;

use super::state::{LoadState, PageState, LOAD_FAILED};
use crate::domain::{FetchError, FoodItem, MutationKind};

pub(super) struct LoadGuard<'a> {
    state: &'a RefCell<PageState>,
    seq: u64,
    done: bool,
}

impl<'a> LoadGuard<'a> {
    pub fn begin(state: &'a RefCell<PageState>) -> Self {
        let mut s = state.borrow_mut();
        s.issued += 1;
        s.load = LoadState::Loading;
        let seq = s.issued;
        drop(s);
        Self {
            state,
            seq,
            done: false,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Apply a list result; returns false when a newer call superseded it
    pub fn finish(mut self, result: Result<Vec<FoodItem>, FetchError>) -> bool {
        self.done = true;
        let mut s = self.state.borrow_mut();
        if s.issued != self.seq {
            tracing::debug!(seq = self.seq, latest = s.issued, "discarding stale list response");
            return false;
        }

        match result {
            Ok(foods) => {
                tracing::info!(seq = self.seq, count = foods.len(), "foods loaded");
                s.foods = foods;
                s.load = LoadState::Ready;
            }
            Err(err) => {
                tracing::warn!(seq = self.seq, error = %err, "failed to load foods");
                s.foods.clear();
                s.load = LoadState::Failed(LOAD_FAILED.to_string());
            }
        }
        true
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let mut s = self.state.borrow_mut();
        if s.issued == self.seq && s.load.is_loading() {
            tracing::debug!(seq = self.seq, "list call cancelled");
            s.load = LoadState::Ready;
        }
    }
}

/// Single-slot in-flight guard: one mutation page-wide at a time
pub(super) struct PendingGuard<'a> {
    state: &'a RefCell<PageState>,
}

impl<'a> PendingGuard<'a> {
    /// Claim the slot, or return the kind already holding it
    pub fn acquire(state: &'a RefCell<PageState>, kind: MutationKind) -> Result<Self, MutationKind> {
        let mut s = state.borrow_mut();
        if let Some(current) = s.pending {
            return Err(current);
        }
        s.pending = Some(kind);
        Ok(Self { state })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().pending = None;
    }
}
