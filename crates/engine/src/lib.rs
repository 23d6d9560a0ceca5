//! `engine` crate — the host side of a node run: definitions, the executor,
//! and the production HTTP transport.

pub mod models;
pub mod error;
pub mod executor;
pub mod transport;

pub use models::NodeDefinition;
pub use error::EngineError;
pub use executor::{default_registry, ExecutionResult, NodeExecutor, NodeRegistry};
pub use transport::ReqwestTransport;
