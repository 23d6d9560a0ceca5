//! `HaloPsaNode` — the request dispatcher.
//!
//! For every input item, in order:
//! 1. Reads the item's parameters and resolves resource/operation in the
//!    catalog.
//! 2. Builds the request (endpoint, query or body, headers).
//! 3. Sends it through the context's transport and awaits the answer.
//! 4. Emits the raw response, or an error record when continue-on-failure
//!    absorbs a recoverable failure.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use nodes::{ExecutableNode, ExecutionContext, InputItem, NodeError, OutputItem};

use crate::catalog;
use crate::credentials::{HaloPsaCredentials, CREDENTIAL_TYPE};
use crate::params::ItemParameters;
use crate::request::build_request;

/// Registry key of this node.
pub const NODE_TYPE: &str = "haloPsa";

/// Executes Halo PSA operations. Stateless; one instance can serve any
/// number of runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaloPsaNode;

impl HaloPsaNode {
    pub fn new() -> Self {
        Self
    }

    async fn process_item(
        &self,
        index: usize,
        item: &InputItem,
        credentials: &HaloPsaCredentials,
        ctx: &ExecutionContext,
    ) -> Result<Value, NodeError> {
        let params = ItemParameters::from_value(ctx.parameters_for(index)?)?;
        let entry = catalog::lookup(&params.resource, &params.operation)?;
        let request = build_request(entry, params, credentials, item)?;

        debug!(
            item = index,
            method = %request.method,
            url = %request.url,
            "sending Halo PSA request"
        );

        Ok(ctx.transport.send(request).await?)
    }
}

#[async_trait]
impl ExecutableNode for HaloPsaNode {
    #[instrument(
        skip_all,
        fields(node_id = %ctx.node_id, execution_id = %ctx.execution_id, items = items.len())
    )]
    async fn execute(
        &self,
        items: Vec<InputItem>,
        ctx: &ExecutionContext,
    ) -> Result<Vec<OutputItem>, NodeError> {
        let credentials = HaloPsaCredentials::from_value(ctx.credentials(CREDENTIAL_TYPE)?)?;

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.process_item(index, item, &credentials, ctx).await {
                Ok(response) => output.push(OutputItem::success(index, response)),
                Err(err) if ctx.continue_on_fail && err.is_recoverable() => {
                    warn!(item = index, error = %err, "item failed, continuing");
                    output.push(OutputItem::failure(index, err.to_string()));
                }
                Err(err) => {
                    error!(item = index, error = %err, "item failed, aborting run");
                    return Err(err);
                }
            }
        }

        info!(
            processed = output.len(),
            failed = output.iter().filter(|o| o.is_error()).count(),
            "Halo PSA node finished"
        );
        Ok(output)
    }
}
