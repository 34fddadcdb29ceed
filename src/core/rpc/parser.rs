//! Metadata batch request parsing

use crate::config::models::RpcConfig;
use crate::core::context::GadgetContext;
use crate::core::rpc::types::{BatchContext, BatchRequest, GadgetRequest, RpcError};
use tracing::debug;

/// Decode a batch request body into per-gadget contexts
///
/// Contexts come back in the order the gadgets were requested. Any shape
/// problem rejects the whole batch; nothing is dispatched for a request
/// that fails here.
pub fn parse_batch(
    request: serde_json::Value,
    limits: &RpcConfig,
    default_container: &str,
) -> Result<Vec<GadgetContext>, RpcError> {
    let batch: BatchRequest =
        serde_json::from_value(request).map_err(|e| RpcError::decode(e.to_string()))?;

    if batch.gadgets.len() > limits.max_batch_size {
        return Err(RpcError::decode(format!(
            "Batch of {} gadgets exceeds the limit of {}",
            batch.gadgets.len(),
            limits.max_batch_size
        )));
    }

    let contexts: Vec<GadgetContext> = batch
        .gadgets
        .into_iter()
        .map(|entry| merge_context(&batch.context, entry, default_container))
        .collect();

    debug!(count = contexts.len(), "Parsed metadata batch");
    Ok(contexts)
}

/// Resolve one gadget entry against the batch context
///
/// Entry fields win over batch fields; the container additionally falls
/// back to the configured default.
fn merge_context(
    batch: &BatchContext,
    entry: GadgetRequest,
    default_container: &str,
) -> GadgetContext {
    GadgetContext {
        url: entry.url,
        module_id: entry.module_id,
        language: entry.language.unwrap_or_else(|| batch.language.clone()),
        country: entry.country.unwrap_or_else(|| batch.country.clone()),
        view: entry.view.unwrap_or_else(|| batch.view.clone()),
        container: entry
            .container
            .or_else(|| batch.container.clone())
            .unwrap_or_else(|| default_container.to_string()),
        debug: entry.debug.unwrap_or(batch.debug),
        ignore_cache: entry.ignore_cache.unwrap_or(batch.ignore_cache),
        prefs: entry.prefs,
    }
}
