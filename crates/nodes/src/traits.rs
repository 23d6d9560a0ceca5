//! The `ExecutableNode` trait — the contract every node must fulfil.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{HttpTransport, InputItem, NodeError, OutputItem};

/// Parameter values bound to a node, as the host resolved them.
///
/// Either one object shared by every item or one object per item (the host
/// evaluates expressions per item before handing them over).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeParameters {
    PerItem(Vec<Value>),
    Shared(Value),
}

impl NodeParameters {
    /// Parameters for the item at `index`, if the host supplied any.
    pub fn for_item(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Shared(value) => Some(value),
            Self::PerItem(values) => values.get(index),
        }
    }
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self::Shared(Value::Object(Default::default()))
    }
}

/// Shared context passed to a node for one run.
///
/// Defined here (in the nodes crate) so both the engine and individual node
/// implementations can import it without a circular dependency.
#[derive(Clone)]
pub struct ExecutionContext {
    /// ID of the current execution run.
    pub execution_id: uuid::Uuid,
    /// ID of the node within its workflow, used in log fields.
    pub node_id: String,
    /// Parameter values bound to the node.
    pub parameters: NodeParameters,
    /// Host-wide policy: turn recoverable item failures into error records.
    pub continue_on_fail: bool,
    /// Decrypted credential records keyed by credential type.
    pub credentials: HashMap<String, Value>,
    /// Executes outbound HTTP calls.
    pub transport: Arc<dyn HttpTransport>,
}

impl ExecutionContext {
    pub fn new(node_id: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            execution_id: uuid::Uuid::new_v4(),
            node_id: node_id.into(),
            parameters: NodeParameters::default(),
            continue_on_fail: false,
            credentials: HashMap::new(),
            transport,
        }
    }

    /// The credential record registered under `name`.
    ///
    /// # Errors
    /// [`NodeError::Configuration`] when the host supplied none.
    pub fn credentials(&self, name: &str) -> Result<&Value, NodeError> {
        self.credentials
            .get(name)
            .ok_or_else(|| NodeError::Configuration(format!("no credentials returned for '{name}'")))
    }

    /// Raw parameter object for the item at `index`.
    ///
    /// # Errors
    /// [`NodeError::Configuration`] when the host bound no parameters to it.
    pub fn parameters_for(&self, index: usize) -> Result<&Value, NodeError> {
        self.parameters.for_item(index).ok_or_else(|| {
            NodeError::Configuration(format!("no parameters bound for item {index}"))
        })
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credential values are secret; only their names are printed.
        f.debug_struct("ExecutionContext")
            .field("execution_id", &self.execution_id)
            .field("node_id", &self.node_id)
            .field("parameters", &self.parameters)
            .field("continue_on_fail", &self.continue_on_fail)
            .field("credentials", &self.credentials.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// The core node trait.
///
/// A node receives the whole batch of input items for one run and returns
/// one output item per processed input.
#[async_trait]
pub trait ExecutableNode: Send + Sync {
    /// Execute the node over `items`.
    ///
    /// # Errors
    /// Returns the first error that continue-on-failure does not absorb;
    /// processing stops there.
    async fn execute(
        &self,
        items: Vec<InputItem>,
        ctx: &ExecutionContext,
    ) -> Result<Vec<OutputItem>, NodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn shared_parameters_apply_to_every_item() {
        let params: NodeParameters =
            serde_json::from_value(json!({ "resource": "tickets" })).unwrap();
        assert_eq!(params.for_item(0), Some(&json!({ "resource": "tickets" })));
        assert_eq!(params.for_item(41), Some(&json!({ "resource": "tickets" })));
    }

    #[test]
    fn per_item_parameters_are_indexed() {
        let params: NodeParameters =
            serde_json::from_value(json!([{ "ticketId": "1" }, { "ticketId": "2" }])).unwrap();
        assert_eq!(params.for_item(1), Some(&json!({ "ticketId": "2" })));
        assert_eq!(params.for_item(2), None);
    }

    #[test]
    fn missing_credentials_are_a_configuration_error() {
        let ctx = ExecutionContext::new("halo", Arc::new(MockTransport::returning(json!({}))));
        assert!(matches!(
            ctx.credentials("haloPsaApi"),
            Err(NodeError::Configuration(_))
        ));
    }

    #[test]
    fn debug_output_hides_credential_values() {
        let mut ctx = ExecutionContext::new("halo", Arc::new(MockTransport::returning(json!({}))));
        ctx.credentials
            .insert("haloPsaApi".into(), json!({ "clientSecret": "hunter2" }));
        let printed = format!("{ctx:?}");
        assert!(printed.contains("haloPsaApi"));
        assert!(!printed.contains("hunter2"));
    }
}
