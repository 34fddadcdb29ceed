//! Gadget rendering configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Configuration for gadget render URIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Base URL of the iframe rendering endpoint
    #[serde(default = "default_iframe_base_url")]
    pub iframe_base_url: String,
    /// Container name used when a request does not specify one
    #[serde(default = "default_container")]
    pub default_container: String,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            iframe_base_url: default_iframe_base_url(),
            default_container: default_container(),
        }
    }
}

#[allow(dead_code)]
impl RenderingConfig {
    /// Merge rendering configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.iframe_base_url != default_iframe_base_url() {
            self.iframe_base_url = other.iframe_base_url;
        }
        if other.default_container != default_container() {
            self.default_container = other.default_container;
        }
        self
    }

    /// Validate rendering configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.iframe_base_url.is_empty() {
            return Err("Iframe base URL cannot be empty".to_string());
        }

        let url = url::Url::parse(&self.iframe_base_url)
            .map_err(|e| format!("Invalid iframe base URL: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Iframe base URL must use http:// or https://, got: {}",
                    scheme
                ));
            }
        }

        if self.default_container.is_empty() {
            return Err("Default container cannot be empty".to_string());
        }

        Ok(())
    }
}
