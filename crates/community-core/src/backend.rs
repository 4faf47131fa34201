//! Backend trait for the remote Community API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::request::ApiRequest;

/// Something that can carry one [`ApiRequest`] to the remote API.
///
/// Implementations issue exactly one request per call, never retry, and
/// return the decoded body on success or a typed error otherwise.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Send the request and relay the decoded response body.
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    /// Human-readable target, used for logging.
    fn base_url(&self) -> &str;
}
