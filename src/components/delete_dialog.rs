//! Delete Dialog Component
//!
//! Confirmation body for the delete modal.

use food_core::{FoodItem, MutationKind, SubmitOutcome};
use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Asks before deleting `item`; failures stay on the dialog
#[component]
pub fn DeleteDialog(item: FoodItem) -> impl IntoView {
    let ctx = use_app_context();
    let pending = ctx.store.pending();
    let (message, set_message) = signal::<Option<String>>(None);

    let deleting = move || pending.get() == Some(MutationKind::Delete);

    let on_confirm = move |_| {
        set_message.set(None);
        commands::confirm_delete(ctx, move |outcome| {
            if let SubmitOutcome::Failed(text) = outcome {
                let _ = set_message.try_set(Some(text));
            }
        });
    };

    view! {
        <div class="delete-confirm">
            <p>"Are you sure you want to delete " <strong>{item.name.clone()}</strong> "?"</p>
            {move || message.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
            <div class="form-actions">
                <button
                    type="button"
                    class="food-btn cancel-btn"
                    disabled=move || pending.get().is_some()
                    on:click=move |_| commands::dismiss(ctx)
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="food-btn delete-btn"
                    data-test-id="food-confirm-delete-btn"
                    disabled=move || pending.get().is_some()
                    on:click=on_confirm
                >
                    {move || if deleting() { "Deleting Food..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
