//! Search Bar Component
//!
//! Live search box. Keystrokes go to the coordinator right away; the list
//! only reloads once typing settles.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let search = ctx.store.search();

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        commands::search(ctx, input.value());
    };

    view! {
        <section class="hero-section">
            <div class="hero-text">
                <h1>"Are You Starving?"</h1>
                <p>"Within a few clicks, find meals that are accessible near you"</p>
            </div>
            <div class="search-row">
                <label class="sr-only" for="food-search">"Search food"</label>
                <input
                    id="food-search"
                    class="food-input search-input"
                    type="search"
                    placeholder="What do you like to eat today?"
                    data-test-id="food-search"
                    prop:value=move || search.get()
                    on:input=on_input
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            commands::search(ctx, String::new());
                        }
                    }
                />
                <Show when=move || !search.get().is_empty()>
                    <button
                        type="button"
                        class="food-btn clear-btn"
                        aria-label="Clear search"
                        on:click=move |_| commands::search(ctx, String::new())
                    >
                        "×"
                    </button>
                </Show>
            </div>
        </section>
    }
}
