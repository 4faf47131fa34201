//! Outbound request description handed from the dispatcher to a backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method of a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remote HTTP operation.
///
/// Path segments are kept unencoded; the backend is responsible for
/// percent-encoding them when joining onto its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    /// Create a request for `path` (e.g. `/projects/7/issues`).
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    /// Append a path segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a bearer token.
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// Path rendered as `/a/b/c`, without percent-encoding.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_template_text() {
        let req = ApiRequest::new(HttpMethod::Get, "/feed/posts/");
        assert_eq!(req.segments, vec!["feed", "posts"]);
        assert_eq!(req.path(), "/feed/posts");
    }

    #[test]
    fn test_builder() {
        let req = ApiRequest::new(HttpMethod::Post, "/projects")
            .segment("7")
            .segment("issues")
            .query("state", "open")
            .json(serde_json::json!({"title": "Bug"}))
            .bearer(Some("tok".to_string()));

        assert_eq!(req.path(), "/projects/7/issues");
        assert_eq!(req.query, vec![("state".to_string(), "open".to_string())]);
        assert_eq!(req.body, Some(serde_json::json!({"title": "Bug"})));
        assert_eq!(req.bearer.as_deref(), Some("tok"));
    }

    #[test]
    fn test_root_path() {
        let req = ApiRequest::new(HttpMethod::Get, "/");
        assert!(req.segments.is_empty());
        assert_eq!(req.path(), "/");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(
            serde_json::to_string(&HttpMethod::Post).unwrap(),
            "\"POST\""
        );
    }
}
