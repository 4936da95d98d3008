//! Page Coordinator
//!
//! Owns the food list for a page session and orchestrates the three
//! independent axes around repository calls:
//! - load: `Loading -> Ready | Failed`, tagged so stale responses are dropped
//! - mutation: one create/update/delete in flight page-wide
//! - selection: which modal is open and for which item; a finished action
//!   only closes the modal it was started from
//!
//! Every successful write is followed by a fresh list with the settled
//! search; the list is never patched locally.
//!
//! State lives behind a `RefCell` whose borrows never span an `.await`,
//! so the coordinator can be shared through an `Rc` by UI callbacks.

mod guard;
mod state;


use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::domain::{FoodItem, MutationKind};
use crate::repository::FoodRepository;
use crate::search::{Debouncer, Ticket};
use crate::validation::FoodForm;

use guard::{LoadGuard, PendingGuard};
use state::PageState;
pub use state::*;

/// Called with a fresh snapshot after every visible state change
type Observer = Box<dyn Fn(PageSnapshot)>;

pub struct PageCoordinator<R> {
    repo: R,
    search: Debouncer<String>,
    state: RefCell<PageState>,
    observer: RefCell<Option<Observer>>,
}

impl<R: FoodRepository> PageCoordinator<R> {
    pub fn new(repo: R, search_delay: Duration) -> Self {
        Self {
            repo,
            search: Debouncer::new(String::new(), search_delay),
            state: RefCell::new(PageState::default()),
            observer: RefCell::new(None),
        }
    }

    pub fn with_config(repo: R, config: &Config) -> Self {
        Self::new(repo, config.search_debounce())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Register the presentation layer's change listener
    pub fn subscribe(&self, observer: impl Fn(PageSnapshot) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(snapshot);
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn foods(&self) -> Vec<FoodItem> {
        self.state.borrow().foods.clone()
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load.clone()
    }

    pub fn pending(&self) -> Option<MutationKind> {
        self.state.borrow().pending
    }

    pub fn modal(&self) -> ActiveModal {
        self.state.borrow().modal.clone()
    }

    pub fn selected(&self) -> Option<FoodItem> {
        self.state.borrow().modal.selected().cloned()
    }

    pub fn search_delay(&self) -> Duration {
        self.search.delay()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let s = self.state.borrow();
        PageSnapshot {
            foods: s.foods.clone(),
            load: s.load.clone(),
            pending: s.pending,
            modal: s.modal.clone(),
            search: self.search.live(),
        }
    }

    // ========================
    // Load axis
    // ========================

    /// List with the current settled search.
    ///
    /// Returns false when the response was discarded because a newer list
    /// call was issued meanwhile.
    pub async fn reload(&self) -> bool {
        let query = self.search.settled();
        let guard = LoadGuard::begin(&self.state);
        tracing::debug!(seq = guard.seq(), query = %query, "reloading foods");
        self.notify();

        let result = self.repo.list(Some(query.as_str())).await;
        let applied = guard.finish(result);
        if applied {
            self.notify();
        }
        applied
    }

    /// Record a keystroke in the search box; arm a timer with the ticket
    pub fn search_input(&self, text: impl Into<String>) -> Ticket {
        let ticket = self.search.input(text.into());
        self.notify();
        ticket
    }

    /// Wait for `timer` and reload if the search settled to a new value
    pub async fn settle_search<F>(&self, ticket: Ticket, timer: F) -> bool
    where
        F: Future<Output = ()>,
    {
        match self.search.settle(ticket, timer).await {
            Some(query) => {
                tracing::debug!(query = %query, "search settled");
                self.reload().await;
                true
            }
            None => false,
        }
    }

    // ========================
    // Selection axis
    // ========================

    pub fn open_add(&self) {
        self.state.borrow_mut().modal = ActiveModal::Add;
        self.notify();
    }

    pub fn open_edit(&self, item: FoodItem) {
        self.state.borrow_mut().modal = ActiveModal::Edit(item);
        self.notify();
    }

    pub fn open_delete(&self, item: FoodItem) {
        self.state.borrow_mut().modal = ActiveModal::Delete(item);
        self.notify();
    }

    pub fn dismiss(&self) {
        self.state.borrow_mut().modal = ActiveModal::Closed;
        self.notify();
    }

    /// User-initiated dismiss; refused while a mutation is in flight so its
    /// outcome still has a modal to land on
    pub fn cancel(&self) -> bool {
        if self.pending().is_some() {
            tracing::debug!("dismiss ignored while a change is being saved");
            return false;
        }
        self.dismiss();
        true
    }

    /// Close the modal a finished action started from, leaving any other open
    fn close_if_still(&self, origin: &ActiveModal) {
        let closed = {
            let mut s = self.state.borrow_mut();
            if s.modal.same_target(origin) {
                s.modal = ActiveModal::Closed;
                true
            } else {
                false
            }
        };
        if closed {
            self.notify();
        } else {
            tracing::debug!("modal changed while saving; leaving it open");
        }
    }

    /// Initial values for the form of the open modal
    pub fn form_values(&self) -> FoodForm {
        match &self.state.borrow().modal {
            ActiveModal::Edit(item) => FoodForm::from_item(item),
            _ => FoodForm::default(),
        }
    }

    // ========================
    // Mutation axis
    // ========================

    pub async fn submit_add(&self, form: &FoodForm) -> SubmitOutcome {
        let outcome = self.run_add(form).await;
        self.notify();
        outcome
    }

    pub async fn submit_edit(&self, form: &FoodForm) -> SubmitOutcome {
        let outcome = self.run_edit(form).await;
        self.notify();
        outcome
    }

    pub async fn confirm_delete(&self) -> SubmitOutcome {
        let outcome = self.run_delete().await;
        self.notify();
        outcome
    }

    async fn run_add(&self, form: &FoodForm) -> SubmitOutcome {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        let _pending = match self.acquire(MutationKind::Create) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let origin = self.modal();

        match self.repo.create(&draft).await {
            Ok(item) => {
                tracing::info!(id = ?item.id, name = %item.name, "food created");
                self.reload().await;
                self.close_if_still(&origin);
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to create food");
                SubmitOutcome::Failed(ADD_FAILED.to_string())
            }
        }
    }

    async fn run_edit(&self, form: &FoodForm) -> SubmitOutcome {
        let Some(id) = self.selected_id(|m| matches!(m, ActiveModal::Edit(_))) else {
            return SubmitOutcome::Failed(INVALID_SELECTION.to_string());
        };
        let patch = match form.to_patch() {
            Ok(patch) => patch,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        let _pending = match self.acquire(MutationKind::Update) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let origin = self.modal();

        match self.repo.update(&id, &patch).await {
            Ok(item) => {
                tracing::info!(id = %id, name = %item.name, "food updated");
                self.reload().await;
                self.close_if_still(&origin);
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to update food");
                SubmitOutcome::Failed(UPDATE_FAILED.to_string())
            }
        }
    }

    async fn run_delete(&self) -> SubmitOutcome {
        let Some(id) = self.selected_id(|m| matches!(m, ActiveModal::Delete(_))) else {
            return SubmitOutcome::Failed(INVALID_SELECTION.to_string());
        };
        let _pending = match self.acquire(MutationKind::Delete) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        let origin = self.modal();

        match self.repo.delete(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "food deleted");
                self.reload().await;
                self.close_if_still(&origin);
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to delete food");
                SubmitOutcome::Failed(DELETE_FAILED.to_string())
            }
        }
    }

    fn selected_id(&self, is_expected: impl Fn(&ActiveModal) -> bool) -> Option<String> {
        let s = self.state.borrow();
        if !is_expected(&s.modal) {
            return None;
        }
        s.modal.selected().and_then(|item| item.id.clone())
    }

    fn acquire(&self, kind: MutationKind) -> Result<PendingGuard<'_>, SubmitOutcome> {
        let guard = PendingGuard::acquire(&self.state, kind).map_err(|current| {
            tracing::debug!(requested = %kind, in_flight = %current, "mutation rejected while busy");
            SubmitOutcome::Failed(BUSY.to_string())
        })?;
        self.notify();
        Ok(guard)
    }
}
