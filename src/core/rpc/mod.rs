//! Gadget metadata JSON-RPC batch endpoint
//!
//! A batch names the gadgets to process and a shared context. Gadgets are
//! processed concurrently and answered in a single aggregate response in
//! which each gadget either has its metadata or a failure entry.

mod handler;
mod parser;
mod projector;
mod types;


// Re-export all public types
pub use handler::RpcHandler;
pub use parser::parse_batch;
pub use projector::project;
pub use types::{
    BatchContext, BatchRequest, BatchResponse, FeatureDetail, GadgetFailure, GadgetMetadata,
    GadgetRequest, GadgetResult, OrderedEnumValue, RpcError, UserPrefMetadata, ViewMetadata,
};
