//! HTTP Food Repository
//!
//! Maps repository calls onto the REST collection:
//! `GET {base}?name=q`, `POST {base}`, `PUT {base}/{id}`, `DELETE {base}/{id}`.

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

use super::normalize::{normalize_list, normalize_one};
use super::traits::FoodRepository;
use super::transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
use crate::config::Config;
use crate::domain::{ConfigError, FetchError, FoodDraft, FoodItem, FoodPatch, MutationError, MutationKind};

/// Stateless client for one remote collection
#[derive(Debug, Clone)]
pub struct HttpFoodRepository<T = ReqwestTransport> {
    base: Url,
    transport: T,
}

impl HttpFoodRepository<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let base = Url::parse(&config.api_base)
            .map_err(|_| ConfigError::InvalidApiBase(config.api_base.clone()))?;
        Ok(Self::new(base, ReqwestTransport::default()))
    }
}

impl<T: Transport> HttpFoodRepository<T> {
    pub fn new(base: Url, transport: T) -> Self {
        Self { base, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Collection URL; a blank query adds no filter
    pub fn collection_url(&self, query: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("name", q);
        }
        url
    }

    /// URL of a single record; the id is percent-encoded as one path segment
    pub fn item_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    async fn mutate<B: Serialize>(
        &self,
        action: MutationKind,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiResponse, MutationError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|source| MutationError::Encode { action, source })?;

        tracing::debug!(%action, method = method.as_str(), %url, "sending mutation");
        let response = self
            .transport
            .send(ApiRequest { method, url, body })
            .await
            .map_err(|source| MutationError::Transport { action, source })?;

        if !response.is_success() {
            tracing::warn!(%action, status = response.status, "mutation rejected");
            return Err(MutationError::Status {
                action,
                status: response.status,
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl<T: Transport> FoodRepository for HttpFoodRepository<T> {
    async fn list(&self, query: Option<&str>) -> Result<Vec<FoodItem>, FetchError> {
        let url = self.collection_url(query);
        tracing::debug!(%url, "listing foods");

        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Get,
                url,
                body: None,
            })
            .await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "list rejected");
            return Err(FetchError::Status(response.status));
        }

        let items = normalize_list(&response.body)?;
        tracing::debug!(count = items.len(), "listed foods");
        Ok(items)
    }

    async fn create(&self, draft: &FoodDraft) -> Result<FoodItem, MutationError> {
        let action = MutationKind::Create;
        let response = self
            .mutate(action, Method::Post, self.base.clone(), Some(draft))
            .await?;
        normalize_one(&response.body).map_err(|source| MutationError::Decode { action, source })
    }

    async fn update(&self, id: &str, patch: &FoodPatch) -> Result<FoodItem, MutationError> {
        let action = MutationKind::Update;
        let response = self
            .mutate(action, Method::Put, self.item_url(id), Some(patch))
            .await?;
        normalize_one(&response.body).map_err(|source| MutationError::Decode { action, source })
    }

    async fn delete(&self, id: &str) -> Result<(), MutationError> {
        self.mutate::<()>(MutationKind::Delete, Method::Delete, self.item_url(id), None)
            .await?;
        Ok(())
    }
}
