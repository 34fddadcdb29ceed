//! Metadata batch orchestration

use crate::config::models::RpcConfig;
use crate::core::context::GadgetContext;
use crate::core::process::GadgetProcessor;
use crate::core::rpc::parser::parse_batch;
use crate::core::rpc::projector::project;
use crate::core::rpc::types::{BatchResponse, GadgetFailure, GadgetResult, RpcError};
use crate::core::uri::UriBuilder;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Handles metadata batch requests end to end
///
/// Every gadget in a batch runs on its own task. Results are collected as
/// tasks finish, so a slow gadget never holds up the others and a failed
/// gadget becomes a failure entry instead of failing the batch.
#[derive(Debug, Clone)]
pub struct RpcHandler {
    processor: Arc<dyn GadgetProcessor>,
    uris: Arc<dyn UriBuilder>,
    config: RpcConfig,
    default_container: String,
}

impl RpcHandler {
    /// Create a handler over a processor and URI builder
    pub fn new(
        processor: Arc<dyn GadgetProcessor>,
        uris: Arc<dyn UriBuilder>,
        config: RpcConfig,
        default_container: String,
    ) -> Self {
        Self {
            processor,
            uris,
            config,
            default_container,
        }
    }

    /// Process one batch request body into the aggregate response
    ///
    /// Gadgets are dispatched in request order and collected in completion
    /// order. The returned error covers the whole batch; it is only used
    /// for undecodable requests and tasks that could not be joined.
    pub async fn process(&self, request: serde_json::Value) -> Result<BatchResponse, RpcError> {
        let contexts = parse_batch(request, &self.config, &self.default_container)?;
        let total = contexts.len();

        let mut jobs = JoinSet::new();
        for context in contexts {
            let processor = self.processor.clone();
            let uris = self.uris.clone();
            jobs.spawn(async move { run_job(processor, uris, context).await });
        }

        let mut gadgets = Vec::with_capacity(total);
        let mut failed = 0usize;
        while let Some(joined) = jobs.join_next().await {
            // A join failure means the task panicked or was aborted, not
            // that the gadget failed; dropping the set cancels the rest.
            let result = joined.map_err(|e| RpcError::orchestration(e.to_string()))?;
            if let GadgetResult::Failure(failure) = &result {
                warn!(
                    url = %failure.url,
                    module_id = failure.module_id,
                    errors = ?failure.errors,
                    "Gadget processing failed"
                );
                failed += 1;
            }
            gadgets.push(result);
        }

        info!(
            total,
            succeeded = total - failed,
            failed,
            "Processed metadata batch"
        );
        Ok(BatchResponse { gadgets })
    }
}

/// Process and project a single gadget
///
/// All per-gadget errors are folded into a failure entry here so the
/// batch keeps going.
async fn run_job(
    processor: Arc<dyn GadgetProcessor>,
    uris: Arc<dyn UriBuilder>,
    context: GadgetContext,
) -> GadgetResult {
    let url = context.url.clone();
    let module_id = context.module_id;

    match processor.process(context).await {
        Ok(gadget) => match project(&gadget, uris.as_ref()) {
            Ok(metadata) => GadgetResult::Metadata(Box::new(metadata)),
            Err(e) => GadgetResult::Failure(GadgetFailure::new(url, module_id, e.to_string())),
        },
        Err(e) => GadgetResult::Failure(GadgetFailure::new(url, module_id, e.to_string())),
    }
}
