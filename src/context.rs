//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use food_core::{HttpFoodRepository, PageCoordinator};
use leptos::prelude::*;

use crate::store::{store_apply_snapshot, AppStore};

pub type Coordinator = PageCoordinator<HttpFoodRepository>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page coordinator; lives on the UI thread only
    coordinator: StoredValue<Rc<Coordinator>, LocalStorage>,
    /// Reactive mirror of the coordinator state
    pub store: AppStore,
}

impl AppContext {
    /// Wire the coordinator so every state change lands in the store
    pub fn new(coordinator: Coordinator, store: AppStore) -> Self {
        coordinator.subscribe(move |snapshot| store_apply_snapshot(&store, snapshot));
        Self {
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
            store,
        }
    }

    pub fn coordinator(&self) -> Rc<Coordinator> {
        self.coordinator.get_value()
    }

    /// Debounce window for the search box, in milliseconds
    pub fn search_delay_ms(&self) -> u32 {
        let millis = self.coordinator().search_delay().as_millis();
        u32::try_from(millis).unwrap_or(u32::MAX)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
