//! Mock resource client for testing.
//!
//! Provides a configurable resource client that pops scripted envelopes
//! (or errors) per call and records every invocation for verification.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::models::{Envelope, RequestBody};
use crate::traits::{BasicResource, FieldKey, KeyedResource};

/// A recorded resource call for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Capability name, e.g. `"get_items"` or `"update_item_by_pk"`.
    pub capability: String,
    /// Primary key or field key the call addressed, if any.
    pub id: Option<String>,
    /// Bearer token the call carried.
    pub token: String,
    /// JSON rendering of the payload (request body, entity or batch).
    pub payload: Option<serde_json::Value>,
}

/// Mock resource client.
///
/// Single-entity capabilities pop from the item-response queue, list
/// capabilities (`get_items`, `update_items_by`) from the list-response
/// queue. When a queue is empty the call answers with a failure envelope,
/// so an over-consuming test fails loudly instead of hanging.
#[derive(Debug, Clone)]
pub struct MockResource<T> {
    item_responses: Arc<Mutex<VecDeque<Result<Envelope<T>, ApiError>>>>,
    list_responses: Arc<Mutex<VecDeque<Result<Envelope<Vec<T>>, ApiError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl<T> MockResource<T> {
    /// Create a mock with empty response queues.
    pub fn new() -> Self {
        Self {
            item_responses: Arc::new(Mutex::new(VecDeque::new())),
            list_responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response for the next single-entity capability call.
    pub fn push_item_response(&self, response: Result<Envelope<T>, ApiError>) {
        self.item_responses.lock().unwrap().push_back(response);
    }

    /// Queue a response for the next list capability call.
    pub fn push_list_response(&self, response: Result<Envelope<Vec<T>>, ApiError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        capability: &str,
        id: Option<String>,
        token: &str,
        payload: Option<serde_json::Value>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            capability: capability.to_string(),
            id,
            token: token.to_string(),
            payload,
        });
    }

    fn next_item(&self) -> Result<Envelope<T>, ApiError> {
        self.item_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Envelope::failure("no scripted response")))
    }

    fn next_list(&self) -> Result<Envelope<Vec<T>>, ApiError> {
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Envelope::failure("no scripted response")))
    }
}

impl<T> Default for MockResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<V: Serialize>(value: &V) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

#[async_trait]
impl<T> BasicResource<T> for MockResource<T>
where
    T: Serialize + Send + Sync,
{
    async fn create_item(&self, item: &T, token: &str) -> Result<Envelope<T>, ApiError> {
        self.record("create_item", None, token, to_json(item));
        self.next_item()
    }

    async fn get_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError> {
        self.record("get_item_by_pk", Some(id.to_string()), token, None);
        self.next_item()
    }

    async fn get_items(
        &self,
        body: &RequestBody,
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        self.record("get_items", None, token, to_json(body));
        self.next_list()
    }

    async fn update_item_by_pk(
        &self,
        id: &str,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError> {
        self.record("update_item_by_pk", Some(id.to_string()), token, to_json(item));
        self.next_item()
    }

    async fn delete_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError> {
        self.record("delete_item_by_pk", Some(id.to_string()), token, None);
        self.next_item()
    }
}

#[async_trait]
impl<T> KeyedResource<T> for MockResource<T>
where
    T: Serialize + Send + Sync,
{
    async fn get_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError> {
        self.record(
            "get_item_by",
            Some(format!("{}={}", key.field, key.id)),
            token,
            None,
        );
        self.next_item()
    }

    async fn update_item_by(
        &self,
        key: &FieldKey,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError> {
        self.record(
            "update_item_by",
            Some(format!("{}={}", key.field, key.id)),
            token,
            to_json(item),
        );
        self.next_item()
    }

    async fn update_items_by(
        &self,
        key: &FieldKey,
        items: &[T],
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        self.record(
            "update_items_by",
            Some(format!("{}={}", key.field, key.id)),
            token,
            to_json(&items),
        );
        self.next_list()
    }

    async fn delete_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError> {
        self.record(
            "delete_item_by",
            Some(format!("{}={}", key.field, key.id)),
            token,
            None,
        );
        self.next_item()
    }
}
