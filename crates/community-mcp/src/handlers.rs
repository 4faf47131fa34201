//! Tool handlers for MCP server.
//!
//! Every tool call resolves to exactly one request against the backend.
//! Validation and the authentication check happen before any I/O.

use std::sync::Arc;

use community_core::{Backend, Error, Result, Session};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::tools::{self, ToolSpec};

/// Message returned in place of the token after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful. Token stored for subsequent requests.";

/// Tool handler that dispatches catalog tools to a backend.
pub struct ToolHandler {
    backend: Arc<dyn Backend>,
    session: Arc<Session>,
}

impl ToolHandler {
    /// Create a new tool handler.
    pub fn new(backend: Arc<dyn Backend>, session: Arc<Session>) -> Self {
        Self { backend, session }
    }

    /// Session shared with this handler.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Get available tool definitions.
    pub fn available_tools(&self) -> Vec<ToolDefinition> {
        tools::available_tools()
    }

    /// Execute a tool by name with arguments.
    ///
    /// Failures are reported in the result (`isError`), never as protocol
    /// errors.
    pub async fn execute(&self, name: &str, arguments: Option<Value>) -> ToolCallResult {
        match self.call(name, arguments).await {
            Ok(body) => ToolCallResult::json(&body),
            Err(e) => {
                warn!(tool = name, kind = e.kind(), "Tool call failed: {}", e);
                ToolCallResult::from_error(&e)
            }
        }
    }

    /// Execute a tool and return the relayed body.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> Result<Value> {
        let spec = tools::find(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        let args = argument_map(arguments)?;

        let request = spec.build_request(&args)?;

        let token = self.session.token();
        if spec.requires_auth && token.is_none() {
            return Err(Error::Unauthenticated(name.to_string()));
        }

        let request = request.bearer(token);
        info!(
            tool = name,
            method = %request.method,
            path = %request.path(),
            "Calling Community API"
        );

        let body = self.backend.send(request).await?;

        if spec.issues_token {
            return Ok(self.store_token(spec, body));
        }
        Ok(body)
    }

    /// Keep the access token from a login response and hide it from the host.
    fn store_token(&self, spec: &ToolSpec, body: Value) -> Value {
        let Some(token) = body.get("access_token").and_then(Value::as_str) else {
            debug!(tool = spec.name, "Response carried no access token");
            return body;
        };

        self.session.set_token(token);
        info!(tool = spec.name, "Session token stored");

        let token_type = body
            .get("token_type")
            .and_then(Value::as_str)
            .unwrap_or("bearer");

        json!({
            "message": LOGIN_SUCCESS_MESSAGE,
            "token_type": token_type,
        })
    }
}

/// Absent or `null` arguments are treated as an empty object.
fn argument_map(arguments: Option<Value>) -> Result<Map<String, Value>> {
    match arguments {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(Error::InvalidArguments(format!(
            "arguments must be an object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
