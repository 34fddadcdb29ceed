//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating gateway configuration");

        Validate::validate(&self.server)?;
        Validate::validate(&self.rpc)?;
        Validate::validate(&self.rendering)?;
        Validate::validate(&self.fetcher)?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        ServerConfig::validate(self)
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.cors
            .validate()
            .map_err(|e| GatewayError::Config(format!("CORS config error: {}", e)))?;

        Ok(())
    }
}

impl Validate for RpcConfig {
    fn validate(&self) -> Result<()> {
        RpcConfig::validate(self)
            .map_err(|e| GatewayError::Config(format!("RPC config error: {}", e)))
    }
}

impl Validate for RenderingConfig {
    fn validate(&self) -> Result<()> {
        RenderingConfig::validate(self)
            .map_err(|e| GatewayError::Config(format!("Rendering config error: {}", e)))
    }
}

impl Validate for FetcherConfig {
    fn validate(&self) -> Result<()> {
        FetcherConfig::validate(self)
            .map_err(|e| GatewayError::Config(format!("Fetcher config error: {}", e)))
    }
}
