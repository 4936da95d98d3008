//! Food Form Component
//!
//! Shared add/edit form. Field values and errors live in a local
//! `FormState`; the coordinator only sees the values on submit.

use food_core::{FoodForm, FoodStatus, FormField, FormState, MutationKind, SubmitOutcome};
use leptos::prelude::*;

use crate::commands::{self, FormMode};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FoodFormView(mode: FormMode, initial: FoodForm) -> impl IntoView {
    let ctx = use_app_context();
    let pending = ctx.store.pending();

    let (form, set_form) = signal(FormState::new(initial));
    let (message, set_message) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let mut values = None;
        set_form.update(|f| values = f.submit().cloned());
        let Some(values) = values else {
            return;
        };

        set_submitting.set(true);
        set_message.set(None);
        commands::submit_form(ctx, mode, values, move |outcome| {
            // The form may already be unmounted once the modal closed
            let _ = set_submitting.try_set(false);
            match outcome {
                SubmitOutcome::Saved => {
                    let _ = set_form.try_update(|f| f.reset(FoodForm::default()));
                }
                SubmitOutcome::Invalid(errors) => {
                    let _ = set_form.try_update(|f| f.set_errors(errors));
                }
                SubmitOutcome::Failed(text) => {
                    let _ = set_message.try_set(Some(text));
                }
            }
        });
    };

    let busy = move || submitting.get() || pending.get().is_some();
    let save_label = move || match pending.get() {
        Some(MutationKind::Create) => "Adding Food...",
        Some(MutationKind::Update) => "Updating Food...",
        _ => "Save",
    };
    let status_error = move || form.with(|f| f.errors().get(FormField::Status).map(str::to_string));

    view! {
        <form class="food-form" novalidate=true on:submit=on_submit>
            {text_field(form, set_form, FormField::Name, "Food Name", "text", "Enter food name")}
            {text_field(form, set_form, FormField::Rating, "Food Rating", "number", "Rating (1-5)")}
            {text_field(form, set_form, FormField::Image, "Food Image URL", "url", "Enter food image URL")}

            <div class="form-field">
                <label for={FormField::Status.key()}>"Food Status"</label>
                <select
                    id={FormField::Status.key()}
                    name={FormField::Status.key()}
                    class="food-input"
                    aria-invalid=move || if status_error().is_some() { "true" } else { "false" }
                    prop:value=move || form.with(|f| f.values().status.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.set(FormField::Status, value));
                    }
                >
                    <option value={FoodStatus::OPEN_NOW}>{FoodStatus::OPEN_NOW}</option>
                    <option value={FoodStatus::CLOSED}>{FoodStatus::CLOSED}</option>
                </select>
                {move || status_error().map(|text| view! { <p class="field-error">{text}</p> })}
            </div>

            {text_field(form, set_form, FormField::Price, "Food Price (optional)", "number", "Enter food price (optional)")}

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
                <button type="submit" class="food-btn save-btn" data-test-id="food-save-btn" disabled=busy>
                    {save_label}
                </button>
            </div>
        </form>
    }
}

/// Labelled input bound to one form field, with its error line
fn text_field(
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error_id = format!("{}-error", field.key());
    let error = move || form.with(|f| f.errors().get(field).map(str::to_string));

    view! {
        <div class="form-field">
            <label for=field.key()>{label}</label>
            <input
                id=field.key()
                name=field.key()
                class="food-input"
                type=input_type
                placeholder=placeholder
                aria-invalid=move || if error().is_some() { "true" } else { "false" }
                prop:value=move || form.with(|f| f.values().get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.set(field, value));
                }
            />
            {move || error().map(|text| view! { <p class="field-error" id=error_id.clone()>{text}</p> })}
        </div>
    }
}
