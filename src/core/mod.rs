//! Core functionality for the gadget metadata gateway
//!
//! This module contains the gadget processing pipeline and its data
//! structures.

pub mod context;
pub mod fetch;
pub mod process;
pub mod rpc;
pub mod spec;
pub mod uri;

use crate::config::Config;
use crate::core::fetch::HttpGadgetProcessor;
use crate::core::rpc::RpcHandler;
use crate::core::uri::IframeUriBuilder;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Main gateway struct that wires the processing pipeline together
#[derive(Clone)]
pub struct Gateway {
    /// Gateway configuration
    config: Arc<Config>,
    /// Metadata batch handler
    rpc: Arc<RpcHandler>,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing gateway");

        let config = Arc::new(config);

        debug!("Initializing gadget processor");
        let processor = HttpGadgetProcessor::new(config.fetcher())?;

        debug!("Initializing render URI builder");
        let uris = IframeUriBuilder::new(config.rendering())
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let rpc = Arc::new(RpcHandler::new(
            Arc::new(processor),
            Arc::new(uris),
            config.rpc().clone(),
            config.rendering().default_container.clone(),
        ));

        info!("Gateway initialized successfully");
        Ok(Self { config, rpc })
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the metadata batch handler
    pub fn rpc(&self) -> &Arc<RpcHandler> {
        &self.rpc
    }
}
