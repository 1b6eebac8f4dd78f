//! reqwest-backed [`RawApiPort`] for the sheet backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// JSON-over-HTTP client rooted at the backend base URL.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            ApiError::network(e.to_string())
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &PlayerConfig) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.as_str(), config.request_timeout)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send and decode; an empty 2xx body comes back as `Value::Null`.
    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value, ApiError> {
        tracing::debug!(%method, path, "Sending backend request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "Backend request failed");
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let err = ApiError::rejected(status.as_u16(), &body);
            tracing::warn!(%method, path, status = status.as_u16(), error = %err, "Backend rejected request");
            return Err(err);
        }

        decode_body(&body)
    }
}

fn decode_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::parse(e.to_string()))
}

#[async_trait]
impl RawApiPort for HttpClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.request(Method::GET, path);
        self.send(Method::GET, path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, request).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, request).await
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.request(Method::PATCH, path).json(body);
        self.send(Method::PATCH, path, request).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, request).await.map(|_| ())
    }
}
