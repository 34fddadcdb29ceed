//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod fetcher;
pub mod gateway;
pub mod rendering;
pub mod rpc;
pub mod server;

// Re-export all configuration types
pub use fetcher::*;
pub use gateway::*;
pub use rendering::*;
pub use rpc::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default cap on the number of gadgets in one metadata batch
pub fn default_max_batch_size() -> usize {
    64
}

pub fn default_iframe_base_url() -> String {
    "http://localhost:8080/gadgets/ifr".to_string()
}

pub fn default_container() -> String {
    "default".to_string()
}

pub fn default_fetch_timeout() -> u64 {
    10
}

pub fn default_user_agent() -> String {
    concat!("opengadget-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

pub fn default_cache_enabled() -> bool {
    true
}

pub fn default_cache_max_entries() -> u64 {
    1000
}

pub fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}
