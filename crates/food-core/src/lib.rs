//! Food Wagen Core
//!
//! Data layer behind the restaurant-menu admin page:
//! - domain: food entities, numeric coercion, error types
//! - repository: REST client for the hosted food collection
//! - validation: add/edit form rules
//! - search: debounced search box
//! - coordinator: page state around repository calls
//! - config: runtime configuration

pub mod config;
pub mod coordinator;
pub mod domain;
pub mod repository;
pub mod search;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use coordinator::{ActiveModal, LoadState, PageCoordinator, PageSnapshot, SubmitOutcome};
pub use domain::{
    ConfigError, FetchError, FoodDraft, FoodItem, FoodPatch, FoodStatus, MutationError, MutationKind, TransportError,
};
pub use repository::{FoodRepository, HttpFoodRepository, ReqwestTransport};
pub use search::{Debouncer, Ticket};
pub use validation::{FoodForm, FormErrors, FormField, FormState};
