//! # OpenGadget-RS
//!
//! A gadget metadata gateway: clients POST a JSON-RPC batch naming gadget
//! specs, the gateway fetches and parses every spec concurrently, and one
//! aggregate JSON document comes back carrying per-gadget metadata or
//! failure entries.
//!
//! ## Features
//!
//! - **Batch Endpoint**: One POST resolves many gadgets at once
//! - **Failure Isolation**: A broken gadget becomes a failure entry, never a failed batch
//! - **Concurrent Fan-Out**: Each gadget is processed on its own Tokio task
//! - **Spec Caching**: Parsed specs are kept in memory with TTL eviction
//! - **Render URIs**: Iframe URIs carry locale, container, and user prefs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opengadget_rs::{Config, Gateway};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Gateway::new(Config::default())?;
//!
//!     let response = gateway
//!         .rpc()
//!         .process(json!({
//!             "context": {"language": "en", "country": "US"},
//!             "gadgets": [{"url": "http://example.org/gadget.xml", "moduleId": 1}]
//!         }))
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use opengadget_rs::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Serves POST /gadgets/metadata and GET /health
//!     server::run_server().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::Gateway;
pub use utils::error::{GatewayError, Result};

// Export the metadata RPC surface
pub use core::rpc::{
    BatchResponse, GadgetFailure, GadgetMetadata, GadgetResult, RpcError, RpcHandler,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp in seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
