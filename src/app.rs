//! Food Wagen App
//!
//! Page layout: header, search, the food grid and the active modal.

use food_core::{ActiveModal, FoodItem};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{self, FormMode};
use crate::components::{DeleteDialog, FoodCard, FoodFormView, FoodModal, PageFooter, SearchBar};
use crate::context::{AppContext, Coordinator};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(coordinator: Coordinator) -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(coordinator, store);
    provide_context(ctx);

    // Initial fetch with an empty search
    commands::load_foods(ctx);

    let body = move || {
        if store.loading().get() {
            return view! { <p class="page-status" data-test-id="food-loading">"Loading..."</p> }.into_any();
        }
        if let Some(message) = store.error().get() {
            return view! {
                <div class="page-status error" role="alert">
                    <p>{message}</p>
                    <button type="button" class="food-btn" on:click=move |_| commands::load_foods(ctx)>
                        "Retry"
                    </button>
                </div>
            }
            .into_any();
        }
        if store.foods().with(|foods| foods.is_empty()) {
            return view! {
                <div class="page-status empty" data-test-id="food-empty">
                    <p>"No items available"</p>
                    <button type="button" class="food-btn" on:click=move |_| commands::open_add(ctx)>
                        "Add Food"
                    </button>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="food-grid">
                <For
                    each=move || store.foods().get().into_iter().enumerate()
                    key=|(index, food)| card_key(*index, food)
                    children=|(_, food)| view! { <FoodCard item=food/> }
                />
            </div>
        }
        .into_any()
    };

    let modal = move || match store.modal().get() {
        ActiveModal::Closed => ().into_any(),
        ActiveModal::Add => view! {
            <FoodModal title="Add Food" test_id="food-add-modal">
                <FoodFormView mode=FormMode::Add initial={ctx.coordinator().form_values()}/>
            </FoodModal>
        }
        .into_any(),
        ActiveModal::Edit(_) => view! {
            <FoodModal title="Edit Food" test_id="food-edit-modal">
                <FoodFormView mode=FormMode::Edit initial={ctx.coordinator().form_values()}/>
            </FoodModal>
        }
        .into_any(),
        ActiveModal::Delete(item) => view! {
            <FoodModal title="Delete Food" test_id="food-delete-modal">
                <DeleteDialog item=item/>
            </FoodModal>
        }
        .into_any(),
    };

    view! {
        <div class="app-layout">
            <header class="page-header">
                <div class="brand">
                    <h1>"Food Wagen"</h1>
                    <span>"Manage your restaurant foods"</span>
                </div>
                <button
                    type="button"
                    class="food-btn add-btn"
                    data-test-id="food-add-btn"
                    on:click=move |_| commands::open_add(ctx)
                >
                    "Add Food"
                </button>
            </header>
            <SearchBar/>
            <main class="page-body">{body}</main>
            <PageFooter/>
            {modal}
        </div>
    }
}

/// Server id, or the list position for records the server sent without one
fn card_key(index: usize, food: &FoodItem) -> Result<String, usize> {
    food.id.clone().ok_or(index)
}
