//! Engine-level error types.

use thiserror::Error;

use nodes::NodeError;

/// Errors produced by the node executor.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The definition names a node type nothing is registered for.
    #[error("no implementation registered for node_type '{0}'")]
    UnknownNodeType(String),

    /// The node aborted the run.
    #[error("node '{node_id}' failed: {source}")]
    NodeFailed {
        node_id: String,
        #[source]
        source: NodeError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Transport(String),
}

impl EngineError {
    /// The node error behind a failed run, if that is what this is.
    pub fn node_error(&self) -> Option<&NodeError> {
        match self {
            Self::NodeFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
