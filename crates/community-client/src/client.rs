//! Community API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use community_core::{ApiRequest, Backend, Config, Error, HttpMethod, Result};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::USER_AGENT;

/// Community API client.
///
/// Stateless apart from the connection pool: the bearer token travels on
/// each [`ApiRequest`].
pub struct CommunityClient {
    base_url: String,
    base: Url,
    client: reqwest::Client,
}

impl CommunityClient {
    /// Create a new client for `base_url` (including the versioned prefix).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a new client with an optional per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Invalid API URL '{}': not a base URL",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            base,
            client,
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.api.url.clone(), config.timeout())
    }

    /// Resolve the full URL for a request, percent-encoding each segment.
    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Invalid API URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }

    /// Handle response and map errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = error_message(&text, status.canonical_reason());
            warn!(
                status = status_code,
                message = %message,
                "Community API error response"
            );
            return Err(Error::Api {
                status: status_code,
                message,
            });
        }

        Ok(relay_body(&text))
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

/// Decode a success body. Non-JSON bodies, including empty ones, are wrapped
/// as `{"message": <text>}`.
fn relay_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

/// Extract the most useful message from an error body.
///
/// The backend reports errors as `{"detail": ...}`; other shapes fall back to
/// `message`/`error` fields, then to the raw text.
fn error_message(text: &str, reason: Option<&str>) -> String {
    if text.trim().is_empty() {
        return reason.unwrap_or("Request failed").to_string();
    }

    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        for field in ["detail", "message", "error"] {
            match body.get(field) {
                Some(Value::String(s)) => return s.clone(),
                Some(Value::Null) | None => continue,
                Some(other) => return other.to_string(),
            }
        }
    }

    text.to_string()
}

#[async_trait]
impl Backend for CommunityClient {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request)?;
        debug!(method = %request.method, url = %url, "Community API request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(ACCEPT, "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
