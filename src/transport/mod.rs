//! Remote fetch of translation payloads

mod http;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpTransport;

/// Errors raised by a [`Transport`]
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by a transport other than [`HttpTransport`]
    #[error("Transport failed: {0}")]
    Other(String),
}

/// Per-request options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Send the request without attaching credentials.
    pub skip_authorization: bool,
}

impl RequestOptions {
    /// Options for fetching public content.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self { skip_authorization: true }
    }
}

/// Client that fetches a JSON payload from a URL.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        options: RequestOptions,
    ) -> Result<Value, TransportError>;
}
