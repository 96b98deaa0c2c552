//! Test doubles shared by the unit test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::storage::{
    KeyValueStore,
    StorageError,
};
use crate::transport::{
    RequestOptions,
    Transport,
    TransportError,
};

/// Transport serving canned payloads by URL and recording every request.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    /// url -> payload
    payloads: HashMap<String, Value>,
    /// Requests received, in order
    requests: Mutex<Vec<(String, RequestOptions)>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_payload(mut self, url: &str, payload: Value) -> Self {
        self.payloads.insert(url.to_string(), payload);
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<(String, RequestOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(
        &self,
        url: &str,
        _params: &[(String, String)],
        options: RequestOptions,
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push((url.to_string(), options));
        // Let overlapping callers run before the response arrives.
        tokio::task::yield_now().await;
        self.payloads
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status { url: url.to_string(), status: 404 })
    }
}

/// Store whose every operation fails.
#[derive(Debug, Default)]
pub(crate) struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("unavailable".to_string()))
    }
}
