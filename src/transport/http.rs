use async_trait::async_trait;
use serde_json::Value;

use super::{
    RequestOptions,
    Transport,
    TransportError,
};

/// User agent sent with every request
const USER_AGENT: &str = concat!("locale-service/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a `reqwest` client.
///
/// When a bearer token is configured it is attached to every request that
/// does not set [`RequestOptions::skip_authorization`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Shared connection pool
    client: reqwest::Client,
    /// Credential for authorized requests
    bearer_token: Option<String>,
}

impl HttpTransport {
    /// # Errors
    /// Fails when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client, bearer_token: None }
    }

    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        options: RequestOptions,
    ) -> Result<Value, TransportError> {
        tracing::debug!(url, skip_authorization = options.skip_authorization, "GET");

        let mut request = self.client.get(url).query(params);
        if !options.skip_authorization
            && let Some(token) = &self.bearer_token
        {
            request = request.bearer_auth(token);
        }

        let request_error = |source| TransportError::Request { url: url.to_string(), source };
        let response = request.send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = response.text().await.map_err(request_error)?;
        serde_json::from_str(&body)
            .map_err(|source| TransportError::Decode { url: url.to_string(), source })
    }
}
