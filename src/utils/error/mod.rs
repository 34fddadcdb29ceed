//! Error handling utilities
//!
//! This module provides the gateway-wide error type and HTTP error mapping.

pub mod error;

// Re-export commonly used types and functions
pub use error::*;
