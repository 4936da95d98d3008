//! Global Application State Store
//!
//! Mirror of the coordinator's page state, using Leptos reactive_stores for
//! fine-grained reactivity. Only the coordinator writes here.

use food_core::{ActiveModal, FoodItem, LoadState, MutationKind, PageSnapshot};
use leptos::prelude::*;
use reactive_stores::Store;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items returned by the latest list call
    pub foods: Vec<FoodItem>,
    pub loading: bool,
    /// Page-level failure message
    pub error: Option<String>,
    /// Mutation currently in flight, if any
    pub pending: Option<MutationKind>,
    pub modal: ActiveModal,
    /// Live search box text
    pub search: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a coordinator snapshot into the store, touching only changed fields
pub fn store_apply_snapshot(store: &AppStore, snapshot: PageSnapshot) {
    let loading = snapshot.load.is_loading();
    let error = match snapshot.load {
        LoadState::Failed(message) => Some(message),
        _ => None,
    };

    if store.foods().get_untracked() != snapshot.foods {
        store.foods().set(snapshot.foods);
    }
    if store.loading().get_untracked() != loading {
        store.loading().set(loading);
    }
    if store.error().get_untracked() != error {
        store.error().set(error);
    }
    if store.pending().get_untracked() != snapshot.pending {
        store.pending().set(snapshot.pending);
    }
    if store.modal().get_untracked() != snapshot.modal {
        store.modal().set(snapshot.modal);
    }
    if store.search().get_untracked() != snapshot.search {
        store.search().set(snapshot.search);
    }
}
