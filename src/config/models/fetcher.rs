//! Spec fetcher configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Configuration for the HTTP spec fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Per-fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
    /// User agent sent with spec fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Parsed spec cache settings
    #[serde(default)]
    pub cache: SpecCacheConfig,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
            cache: SpecCacheConfig::default(),
        }
    }
}

#[allow(dead_code)]
impl FetcherConfig {
    /// Merge fetcher configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.timeout_secs != default_fetch_timeout() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.user_agent != default_user_agent() {
            self.user_agent = other.user_agent;
        }
        self.cache = self.cache.merge(other.cache);
        self
    }

    /// Validate fetcher configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("Fetch timeout cannot be 0".to_string());
        }

        if self.timeout_secs > 300 {
            return Err("Fetch timeout should not exceed 5 minutes".to_string());
        }

        if self.user_agent.is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        self.cache.validate()?;

        Ok(())
    }
}

/// Parsed spec cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecCacheConfig {
    /// Enable the in-process spec cache
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Maximum number of cached specs
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,
    /// Time to live for cached specs in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for SpecCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_cache_max_entries(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

#[allow(dead_code)]
impl SpecCacheConfig {
    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.max_entries != default_cache_max_entries() {
            self.max_entries = other.max_entries;
        }
        if other.ttl_secs != default_cache_ttl() {
            self.ttl_secs = other.ttl_secs;
        }
        self
    }

    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.max_entries == 0 {
                return Err("Cache max entries cannot be 0".to_string());
            }
            if self.ttl_secs == 0 {
                return Err("Cache TTL cannot be 0".to_string());
            }
        }

        Ok(())
    }
}
