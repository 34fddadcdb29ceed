//! Metadata RPC configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Configuration for the metadata RPC endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Maximum number of gadgets accepted in one batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}

#[allow(dead_code)]
impl RpcConfig {
    /// Merge RPC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_batch_size != default_max_batch_size() {
            self.max_batch_size = other.max_batch_size;
        }
        self
    }

    /// Validate RPC configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_batch_size == 0 {
            return Err("Max batch size cannot be 0".to_string());
        }

        Ok(())
    }
}
