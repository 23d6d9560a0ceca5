//! `nodes` crate — the `ExecutableNode` contract shared by the engine and
//! every node implementation.
//!
//! Every node must implement [`ExecutableNode`]. The engine dispatches
//! execution through this trait object and hands the node an
//! [`ExecutionContext`] carrying parameters, credentials and the
//! [`HttpTransport`] used for outbound calls.

pub mod error;
pub mod http;
pub mod item;
pub mod traits;
pub mod mock;

pub use error::{NodeError, TransportError};
pub use http::{FilePart, HttpMethod, HttpRequest, HttpTransport, RequestBody};
pub use item::{BinaryData, InputItem, ItemOutcome, OutputItem};
pub use traits::{ExecutableNode, ExecutionContext, NodeParameters};
