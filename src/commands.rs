//! Page Commands
//!
//! Frontend entry points into the food coordinator. Each spawns the async
//! work on the UI thread; results reach the view through the store.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use food_core::{FoodForm, FoodItem, SubmitOutcome};

use crate::context::AppContext;

/// Which form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Load the list with the current settled search
pub fn load_foods(ctx: AppContext) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        coordinator.reload().await;
    });
}

/// Record a search keystroke and reload once typing settles
pub fn search(ctx: AppContext, text: String) {
    let coordinator = ctx.coordinator();
    let ticket = coordinator.search_input(text);
    let delay = ctx.search_delay_ms();
    spawn_local(async move {
        coordinator.settle_search(ticket, TimeoutFuture::new(delay)).await;
    });
}

pub fn open_add(ctx: AppContext) {
    ctx.coordinator().open_add();
}

pub fn open_edit(ctx: AppContext, item: FoodItem) {
    ctx.coordinator().open_edit(item);
}

pub fn open_delete(ctx: AppContext, item: FoodItem) {
    ctx.coordinator().open_delete(item);
}

/// Close the open modal unless its change is still being saved
pub fn dismiss(ctx: AppContext) {
    ctx.coordinator().cancel();
}

/// Submit the add or edit form; `done` receives the outcome
pub fn submit_form(ctx: AppContext, mode: FormMode, values: FoodForm, done: impl FnOnce(SubmitOutcome) + 'static) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        let outcome = match mode {
            FormMode::Add => coordinator.submit_add(&values).await,
            FormMode::Edit => coordinator.submit_edit(&values).await,
        };
        done(outcome);
    });
}

/// Delete the item selected in the delete modal
pub fn confirm_delete(ctx: AppContext, done: impl FnOnce(SubmitOutcome) + 'static) {
    let coordinator = ctx.coordinator();
    spawn_local(async move {
        done(coordinator.confirm_delete().await);
    });
}
