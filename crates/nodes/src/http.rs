//! The HTTP seam between nodes and the host.
//!
//! Nodes describe the call they want as an [`HttpRequest`] and hand it to
//! whatever [`HttpTransport`] the host put in the execution context. The
//! engine ships a `reqwest` implementation; tests use
//! [`MockTransport`](crate::mock::MockTransport).

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::TransportError;

/// HTTP verbs a node may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file sent as one part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name.
    pub field: String,
    pub data: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Payload of an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(FilePart),
}

/// A fully-assembled outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL without the query string.
    pub url: String,
    /// Query parameters; flattened to strings by [`HttpRequest::query_pairs`].
    pub query: Map<String, Value>,
    /// Header name/value pairs in insertion order.
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Map::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query parameters as wire strings.
    ///
    /// Strings are sent as-is, numbers and booleans in their JSON form,
    /// arrays and objects as JSON text; `null` values are dropped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect()
    }
}

/// Executes requests on behalf of a node.
///
/// Implementations return the decoded response body on a 2xx status and a
/// [`TransportError`] otherwise. No retries are expected.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_values_are_flattened_for_the_wire() {
        let mut request = HttpRequest::new(HttpMethod::Get, "https://halo.example/api/Tickets");
        request.query.insert("page".into(), json!(2));
        request.query.insert("orderdesc".into(), json!(true));
        request.query.insert("search".into(), json!("printer"));
        request.query.insert("skip".into(), Value::Null);
        request.query.insert("ids".into(), json!([1, 2]));

        let pairs = request.query_pairs();
        assert!(pairs.contains(&("page".into(), "2".into())));
        assert!(pairs.contains(&("orderdesc".into(), "true".into())));
        assert!(pairs.contains(&("search".into(), "printer".into())));
        assert!(pairs.contains(&("ids".into(), "[1,2]".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "skip"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut request = HttpRequest::new(HttpMethod::Get, "https://halo.example");
        request.headers.push(("Content-Type".into(), "application/json".into()));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("X-Tenant"), None);
    }
}
