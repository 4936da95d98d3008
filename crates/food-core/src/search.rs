//! Search Debouncer
//!
//! Turns a fast-changing text input into a settled value. Every input
//! re-arms the timer by issuing a new ticket; only the newest ticket may
//! settle, so a burst of keystrokes produces at most one reload.
//!
//! The timer is supplied by the caller (`gloo_timers` in the browser,
//! `tokio::time` in tests), keeping this module runtime-agnostic.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

/// Handle for one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct DebounceState<T> {
    live: T,
    settled: T,
    generation: u64,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    state: RefCell<DebounceState<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            state: RefCell::new(DebounceState {
                live: initial.clone(),
                settled: initial,
                generation: 0,
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn live(&self) -> T {
        self.state.borrow().live.clone()
    }

    pub fn settled(&self) -> T {
        self.state.borrow().settled.clone()
    }

    /// Record a new live value and (re)arm the timer
    pub fn input(&self, value: T) -> Ticket {
        let mut state = self.state.borrow_mut();
        state.live = value;
        state.generation += 1;
        Ticket(state.generation)
    }

    /// The timer for `ticket` fired.
    ///
    /// Returns the new settled value when the ticket is still current and the
    /// value differs from what was settled before.
    pub fn elapse(&self, ticket: Ticket) -> Option<T> {
        let mut state = self.state.borrow_mut();
        if ticket.0 != state.generation || state.live == state.settled {
            return None;
        }
        state.settled = state.live.clone();
        Some(state.settled.clone())
    }

    /// Wait on `timer`, then try to settle with `ticket`
    pub async fn settle<F>(&self, ticket: Ticket, timer: F) -> Option<T>
    where
        F: Future<Output = ()>,
    {
        timer.await;
        self.elapse(ticket)
    }
}
