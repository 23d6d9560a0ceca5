//! Node execution.
//!
//! `NodeExecutor` is the host side of a run:
//! 1. Resolves the definition's `node_type` in the registry.
//! 2. Builds the `ExecutionContext` (parameters, credentials, transport,
//!    continue-on-failure policy).
//! 3. Hands the whole batch of input items to the node and returns its
//!    output items, or the error that aborted the run.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, instrument};

use halopsa::HaloPsaNode;
use nodes::{ExecutableNode, ExecutionContext, HttpTransport, InputItem, OutputItem};

use crate::{EngineError, NodeDefinition};

// ---------------------------------------------------------------------------
// Node registry
// ---------------------------------------------------------------------------

/// Maps `node_type` strings to shared `ExecutableNode` implementations.
pub type NodeRegistry = HashMap<String, Arc<dyn ExecutableNode>>;

/// Registry with every built-in node.
pub fn default_registry() -> NodeRegistry {
    let mut registry: NodeRegistry = HashMap::new();
    registry.insert(halopsa::NODE_TYPE.to_owned(), Arc::new(HaloPsaNode::new()));
    registry
}

// ---------------------------------------------------------------------------
// Output of a completed execution
// ---------------------------------------------------------------------------

/// The result of running one node over a batch of items.
#[derive(Debug)]
pub struct ExecutionResult {
    pub execution_id: uuid::Uuid,
    /// One entry per processed input item, in input order.
    pub items: Vec<OutputItem>,
}

impl ExecutionResult {
    pub fn failed_items(&self) -> usize {
        self.items.iter().filter(|i| i.is_error()).count()
    }
}

// ---------------------------------------------------------------------------
// NodeExecutor
// ---------------------------------------------------------------------------

/// Runs node definitions against a registry, a transport and a set of
/// decrypted credentials.
pub struct NodeExecutor {
    registry: NodeRegistry,
    transport: Arc<dyn HttpTransport>,
    credentials: HashMap<String, Value>,
}

impl NodeExecutor {
    pub fn new(registry: NodeRegistry, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            registry,
            transport,
            credentials: HashMap::new(),
        }
    }

    /// Register the credential record the nodes will find under `name`.
    pub fn with_credentials(mut self, name: impl Into<String>, record: Value) -> Self {
        self.credentials.insert(name.into(), record);
        self
    }

    /// Run `node` over `items`.
    ///
    /// # Errors
    /// - [`EngineError::UnknownNodeType`] if nothing is registered for the type.
    /// - [`EngineError::NodeFailed`] if the node aborted the run.
    #[instrument(skip(self, node, items), fields(node_id = %node.id, node_type = %node.node_type))]
    pub async fn run(
        &self,
        node: &NodeDefinition,
        items: Vec<InputItem>,
    ) -> Result<ExecutionResult, EngineError> {
        let node_impl = self
            .registry
            .get(&node.node_type)
            .ok_or_else(|| EngineError::UnknownNodeType(node.node_type.clone()))?;

        let ctx = ExecutionContext {
            execution_id: uuid::Uuid::new_v4(),
            node_id: node.id.clone(),
            parameters: node.parameters.clone(),
            continue_on_fail: node.continue_on_fail,
            credentials: self.credentials.clone(),
            transport: Arc::clone(&self.transport),
        };

        info!(
            execution_id = %ctx.execution_id,
            items = items.len(),
            continue_on_fail = ctx.continue_on_fail,
            "executing node"
        );

        match node_impl.execute(items, &ctx).await {
            Ok(output) => {
                let result = ExecutionResult {
                    execution_id: ctx.execution_id,
                    items: output,
                };
                info!(
                    execution_id = %result.execution_id,
                    failed = result.failed_items(),
                    "node '{}' succeeded",
                    node.id
                );
                Ok(result)
            }
            Err(source) => {
                error!("node '{}' failed: {}", node.id, source);
                Err(EngineError::NodeFailed {
                    node_id: node.id.clone(),
                    source,
                })
            }
        }
    }
}
