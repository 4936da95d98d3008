//! In-memory transports shared by the test modules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use crate::domain::TransportError;
use crate::repository::{ApiRequest, ApiResponse, HttpFoodRepository, Method, Transport};

pub const BASE: &str = "https://mock.test/api/Food";

pub fn base_url() -> Url {
    Url::parse(BASE).unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Replays canned responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

/// A tiny REST collection held in memory; writes are reflected in later reads
pub struct MemoryTransport {
    base_path: String,
    records: RefCell<Vec<Value>>,
    next_id: Cell<u64>,
    fail_status: Cell<Option<u16>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            base_path: base_url().path().to_string(),
            records: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_status: Cell::new(None),
        }
    }

    pub fn with_records(records: Vec<Value>) -> Self {
        let transport = Self::new();
        transport.next_id.set(records.len() as u64 + 1);
        *transport.records.borrow_mut() = records;
        transport
    }

    /// Answer every following request with `status` until cleared
    pub fn fail_with(&self, status: Option<u16>) {
        self.fail_status.set(status);
    }

    fn record_id<'a>(&self, url: &'a Url) -> Option<&'a str> {
        url.path()
            .strip_prefix(self.base_path.as_str())?
            .strip_prefix('/')
            .filter(|id| !id.is_empty())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .borrow()
            .iter()
            .position(|r| r["id"].as_str() == Some(id))
    }
}

#[async_trait(?Send)]
impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if let Some(status) = self.fail_status.get() {
            return Ok(ApiResponse::new(status, r#""Something went wrong""#));
        }

        let not_found = ApiResponse::new(404, r#""Not found""#);
        let body: Value = match &request.body {
            Some(body) => serde_json::from_str(body).map_err(|e| TransportError(e.to_string()))?,
            None => Value::Null,
        };

        let response = match (request.method, self.record_id(&request.url)) {
            (Method::Get, None) => {
                let filter = request
                    .url
                    .query_pairs()
                    .find(|(k, _)| k == "name")
                    .map(|(_, v)| v.to_lowercase());
                let matching: Vec<Value> = self
                    .records
                    .borrow()
                    .iter()
                    .filter(|r| match &filter {
                        Some(f) => r["name"].as_str().is_some_and(|n| n.to_lowercase().contains(f)),
                        None => true,
                    })
                    .cloned()
                    .collect();
                ApiResponse::new(200, Value::Array(matching).to_string())
            }
            (Method::Post, None) => {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                let mut record = body;
                record["id"] = json!(id.to_string());
                record["createdAt"] = json!("2025-06-18T05:12:44.000Z");
                self.records.borrow_mut().push(record.clone());
                ApiResponse::new(201, record.to_string())
            }
            (Method::Put, Some(id)) => match self.position(id) {
                Some(idx) => {
                    let mut records = self.records.borrow_mut();
                    if let (Some(target), Some(fields)) = (records[idx].as_object_mut(), body.as_object()) {
                        for (k, v) in fields {
                            target.insert(k.clone(), v.clone());
                        }
                    }
                    ApiResponse::new(200, records[idx].to_string())
                }
                None => not_found,
            },
            (Method::Delete, Some(id)) => match self.position(id) {
                Some(idx) => {
                    let removed = self.records.borrow_mut().remove(idx);
                    ApiResponse::new(200, removed.to_string())
                }
                None => not_found,
            },
            _ => ApiResponse::new(405, r#""Method not allowed""#),
        };
        Ok(response)
    }
}

pub fn memory_repository(records: Vec<Value>) -> HttpFoodRepository<MemoryTransport> {
    HttpFoodRepository::new(base_url(), MemoryTransport::with_records(records))
}

pub fn sample_records() -> Vec<Value> {
    vec![
        json!({ "id": "1", "name": "Burger", "rating": 4.2, "image": "http://img", "status": "Open Now", "price": 8.2 }),
        json!({ "id": "2", "name": "Pasta", "rating": "4.8", "restaurant_image": "http://img2", "status": "Closed", "price": 11.0 }),
        json!({ "id": "3", "name": "Burger Deluxe", "rating": 3.9, "image": "http://img3" }),
    ]
}
