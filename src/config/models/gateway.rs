//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata RPC configuration
    #[serde(default)]
    pub rpc: RpcConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Spec fetcher configuration
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

impl GatewayConfig {
    /// Build a configuration from environment variables, falling back to defaults
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("OPENGADGET_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("OPENGADGET_PORT") {
            config.server.port = port.parse().map_err(|e| {
                crate::utils::error::GatewayError::Config(format!("Invalid OPENGADGET_PORT: {}", e))
            })?;
        }

        if let Ok(base) = std::env::var("OPENGADGET_IFRAME_BASE_URL") {
            config.rendering.iframe_base_url = base;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.rpc = self.rpc.merge(other.rpc);
        self.rendering = self.rendering.merge(other.rendering);
        self.fetcher = self.fetcher.merge(other.fetcher);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.rpc.validate()?;
        self.rendering.validate()?;
        self.fetcher.validate()?;
        Ok(())
    }
}
