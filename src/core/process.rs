//! Gadget processing trait and outcomes

use crate::core::context::GadgetContext;
use crate::core::spec::GadgetSpec;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Errors raised while resolving a single gadget
#[derive(Error, Debug, Clone)]
pub enum ProcessingError {
    /// Spec retrieval failed
    #[error("Failed to fetch gadget spec from {url}: {message}")]
    Fetch { url: String, message: String },

    /// Spec document did not parse
    #[error("Failed to parse gadget spec from {url}: {message}")]
    Parse { url: String, message: String },

    /// Retrieval exceeded the configured deadline
    #[error("Timed out fetching gadget spec from {url}")]
    Timeout { url: String },

    /// Processor misconfiguration
    #[error("Processor configuration error: {message}")]
    Configuration { message: String },
}

impl ProcessingError {
    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// A successfully processed gadget
///
/// Owned exclusively by the task that produced it; never shared across
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedGadget {
    /// The originating request context
    pub context: GadgetContext,
    /// The parsed specification
    pub spec: GadgetSpec,
}

/// Resolves one gadget context into a processed gadget
///
/// Implementations fetch and parse the spec behind the context's URL.
/// Each invocation consumes its context; a failed resolution is reported
/// per-item and never affects sibling gadgets in the same batch.
/// Per-fetch deadlines are the implementation's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GadgetProcessor: Send + Sync + Debug + 'static {
    /// Resolve the spec for this context
    async fn process(&self, context: GadgetContext) -> Result<ProcessedGadget, ProcessingError>;
}
