//! HTTP executor for Scylla Cloud REST API calls

use super::decode::decode;
use super::error::{ApiError, Result};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// A single API call, relative to the configured endpoint
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// GET request with no body
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Authenticated HTTP client bound to one endpoint and token
///
/// Holds only immutable state, so clones can issue calls concurrently.
#[derive(Clone)]
pub struct CloudHttpClient {
    client: Client,
    endpoint: String,
    token: String,
    timeout: Duration,
}

impl std::fmt::Debug for CloudHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudHttpClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CloudHttpClient {
    /// Create a new HTTP client
    ///
    /// A trailing `/` on `endpoint` is dropped so paths can be appended as-is.
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(ApiError::Config("token must not be empty".to_string()));
        }
        let parsed = url::Url::parse(endpoint)
            .map_err(|e| ApiError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "endpoint '{}' must use http or https",
                endpoint
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("scylla-cloud/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.to_string(),
            timeout,
        })
    }

    /// Base endpoint every path is joined onto
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Overall per-call timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for a relative path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// GET `path` and decode the body into `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::get(path)).await
    }

    /// Issue `request` and decode the body into `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.url(&request.path);
        let (status, body) = self.send(&request, &url).await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Send the request and read the whole body before looking at the status
    async fn send(
        &self,
        request: &ApiRequest,
        url: &str,
    ) -> Result<(reqwest::StatusCode, Vec<u8>)> {
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .bearer_auth(&self.token);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        tracing::debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());

        Ok((status, body.to_vec()))
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}
