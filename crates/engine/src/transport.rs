//! Production `HttpTransport` backed by `reqwest`.
//!
//! No retries and no timeout beyond the client defaults. A 2xx answer is
//! decoded as JSON when possible; anything else becomes a
//! [`TransportError::Status`] carrying the status and the raw body.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use nodes::{HttpMethod, HttpRequest, HttpTransport, RequestBody, TransportError};

use crate::EngineError;

const USER_AGENT: &str = concat!("halopsa-connector/", env!("CARGO_PKG_VERSION"));

/// Sends node requests over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with a fresh client.
    ///
    /// # Errors
    /// [`EngineError::Transport`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, EngineError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn send_error(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Empty → `null`, JSON → parsed, anything else → a JSON string.
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError> {
        let query = request.query_pairs();
        let mut builder = self.client.request(method(request.method), &request.url);

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.data)
                    .file_name(file.file_name)
                    .mime_str(&file.mime_type)
                    .map_err(|e| {
                        TransportError::InvalidRequest(format!(
                            "invalid MIME type '{}': {e}",
                            file.mime_type
                        ))
                    })?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await.map_err(send_error)?;
        let status = response.status();
        let text = response.text().await.map_err(send_error)?;

        debug!(status = status.as_u16(), bytes = text.len(), "response received");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(decode_body(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bodies_are_decoded_leniently() {
        assert_eq!(decode_body(String::new()), Value::Null);
        assert_eq!(decode_body("  \n".into()), Value::Null);
        assert_eq!(decode_body(r#"{"id":1}"#.into()), json!({ "id": 1 }));
        assert_eq!(decode_body("OK".into()), json!("OK"));
    }

    #[test]
    fn methods_map_one_to_one() {
        assert_eq!(method(HttpMethod::Get), Method::GET);
        assert_eq!(method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(method(HttpMethod::Delete), Method::DELETE);
    }
}
