//! Repository Layer - Core Traits
//!
//! Abstract interface to the remote food collection. Futures are not
//! required to be `Send`: the UI drives them on a single thread.

use async_trait::async_trait;

use crate::domain::{FetchError, FoodDraft, FoodItem, FoodPatch, MutationError};

/// CRUD access to the food collection
#[async_trait(?Send)]
pub trait FoodRepository {
    /// List records, optionally filtered by name on the server
    async fn list(&self, query: Option<&str>) -> Result<Vec<FoodItem>, FetchError>;

    /// Persist a new record and return the server's copy
    async fn create(&self, draft: &FoodDraft) -> Result<FoodItem, MutationError>;

    /// Apply a partial update to the record with `id`
    async fn update(&self, id: &str, patch: &FoodPatch) -> Result<FoodItem, MutationError>;

    /// Remove the record with `id`
    async fn delete(&self, id: &str) -> Result<(), MutationError>;
}

#[async_trait(?Send)]
impl<R: FoodRepository + ?Sized> FoodRepository for std::rc::Rc<R> {
    async fn list(&self, query: Option<&str>) -> Result<Vec<FoodItem>, FetchError> {
        (**self).list(query).await
    }

    async fn create(&self, draft: &FoodDraft) -> Result<FoodItem, MutationError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &str, patch: &FoodPatch) -> Result<FoodItem, MutationError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), MutationError> {
        (**self).delete(id).await
    }
}
