//! Utility modules for the OpenGadget gateway
//!
//! This module contains utility functions and types shared across the crate.
//!
//! ## Module Organization
//!
//! - **error**: Error handling and HTTP error mapping

pub mod error;

pub use error::{GatewayError, Result};
