//! Modal Shell Component
//!
//! Overlay with a title and a close button; the body is passed as children.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FoodModal(
    #[prop(into)] title: String,
    #[prop(into)] test_id: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let pending = ctx.store.pending();

    view! {
        <div class="modal-backdrop" on:click=move |_| commands::dismiss(ctx)>
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                data-test-id=test_id
                on:click=|ev| ev.stop_propagation()
            >
                <header class="modal-header">
                    <h2>{title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        disabled=move || pending.get().is_some()
                        on:click=move |_| commands::dismiss(ctx)
                    >
                        "×"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
