//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::Gateway;
use crate::core::rpc::RpcHandler;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker
/// threads.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Metadata batch handler
    pub rpc: Arc<RpcHandler>,
}

impl AppState {
    /// Create state from an initialized gateway
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            config: gateway.config().clone(),
            rpc: gateway.rpc().clone(),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
