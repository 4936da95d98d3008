//! Food Card Component

use food_core::{FoodItem, FoodStatus};
use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;

/// One catalogue entry with its edit/delete actions
#[component]
pub fn FoodCard(item: FoodItem) -> impl IntoView {
    let ctx = use_app_context();

    let status_class = match item.status {
        FoodStatus::OpenNow => "food-status open",
        FoodStatus::Closed => "food-status closed",
    };
    let price = item.price_label();
    let rating = item.rating_label();
    let edit_item = item.clone();
    let delete_item = item.clone();

    view! {
        <article class="food-card" data-test-id="food-card">
            <div class="food-card-media">
                <img class="food-image" src=item.image.clone() alt=item.name.clone() loading="lazy"/>
                <span class="food-price">{price}</span>
            </div>
            <div class="food-card-body">
                <h3 class="food-name">{item.name.clone()}</h3>
                <span class="food-rating" aria-label="Rating">"★ " {rating}</span>
                <span class=status_class>{item.status.as_str()}</span>
            </div>
            <div class="food-card-actions">
                <button
                    type="button"
                    class="food-btn edit-btn"
                    data-test-id="food-edit-btn"
                    on:click=move |_| commands::open_edit(ctx, edit_item.clone())
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="food-btn delete-btn"
                    data-test-id="food-delete-btn"
                    on:click=move |_| commands::open_delete(ctx, delete_item.clone())
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
