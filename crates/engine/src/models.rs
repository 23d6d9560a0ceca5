//! Host-side description of a node to run.
//!
//! A `NodeDefinition` is what the workflow editor stores for one node: which
//! implementation to use and the parameter values the user bound to it. It
//! can be serialised to/from JSON, which is how the CLI loads it.

use serde::{Deserialize, Serialize};

use nodes::NodeParameters;

/// A single configured node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    /// Identifier used in logs and error messages.
    pub id: String,
    /// Maps to a registered `ExecutableNode` implementation.
    pub node_type: String,
    /// Parameter values handed to the node, shared or per item.
    #[serde(default)]
    pub parameters: NodeParameters,
    /// Turn recoverable item failures into error records instead of
    /// aborting the run.
    #[serde(default)]
    pub continue_on_fail: bool,
}

impl NodeDefinition {
    /// Convenience constructor for testing.
    pub fn new(
        id: impl Into<String>,
        node_type: impl Into<String>,
        parameters: NodeParameters,
    ) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            parameters,
            continue_on_fail: false,
        }
    }

    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn definition_loads_with_defaults() {
        let def: NodeDefinition = serde_json::from_value(json!({
            "id": "halo-1",
            "node_type": "haloPsa",
            "parameters": { "resource": "tickets", "operation": "getTickets" },
        }))
        .unwrap();

        assert!(!def.continue_on_fail);
        assert_eq!(
            def.parameters.for_item(3),
            Some(&json!({ "resource": "tickets", "operation": "getTickets" }))
        );
    }
}
