//! Node-level error types.

use thiserror::Error;

/// Errors returned by a node's `execute` method.
///
/// The variant decides whether a failing item may be turned into an error
/// record when the node runs with continue-on-failure:
/// - `Configuration` — the node definition does not match the catalog or
///   the credentials; always aborts the run.
/// - `Input`         — user-supplied data for one item is malformed.
/// - `External`      — the remote call failed; the message is passed through.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node is misconfigured; no item can succeed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed per-item input (e.g. invalid JSON text).
    #[error("invalid input: {0}")]
    Input(String),

    /// Failure reported by the transport or the remote API.
    #[error("{0}")]
    External(String),
}

impl NodeError {
    /// Whether continue-on-failure may convert this error into an output record.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}

impl From<TransportError> for NodeError {
    fn from(err: TransportError) -> Self {
        Self::External(err.to_string())
    }
}

/// Errors produced by an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS, TLS or body-read failure.
    #[error("{0}")]
    Network(String),

    /// The request could not be built (bad URL, bad header value, …).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
