//! Scripted processors and URI builders for integration tests

use async_trait::async_trait;
use opengadget_rs::core::context::GadgetContext;
use opengadget_rs::core::process::{GadgetProcessor, ProcessedGadget, ProcessingError};
use opengadget_rs::core::spec::GadgetSpec;
use opengadget_rs::core::uri::{UriBuilder, UriError};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Per-URL behavior for the stub processor
#[derive(Debug, Clone, Default)]
struct StubBehavior {
    delay: Option<Duration>,
    fail_with: Option<String>,
    spec: Option<GadgetSpec>,
}

/// Scripted processor with per-URL delays, failures, and specs
///
/// URLs without scripted behavior answer immediately with a default spec.
/// The call counter observes how many gadgets were dispatched.
#[derive(Debug, Default)]
pub struct StubProcessor {
    behaviors: HashMap<String, StubBehavior>,
    calls: Arc<AtomicUsize>,
}

impl StubProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer this URL with the given spec
    pub fn with_spec(mut self, url: &str, spec: GadgetSpec) -> Self {
        self.behaviors.entry(url.to_string()).or_default().spec = Some(spec);
        self
    }

    /// Sleep this long before answering for the URL
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.behaviors.entry(url.to_string()).or_default().delay = Some(delay);
        self
    }

    /// Fail the URL with a fetch error carrying this message
    pub fn failing(mut self, url: &str, message: &str) -> Self {
        self.behaviors.entry(url.to_string()).or_default().fail_with = Some(message.to_string());
        self
    }

    /// Handle for observing how many gadgets were dispatched
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl GadgetProcessor for StubProcessor {
    async fn process(&self, context: GadgetContext) -> Result<ProcessedGadget, ProcessingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let behavior = self
            .behaviors
            .get(context.url.as_str())
            .cloned()
            .unwrap_or_default();

        if let Some(delay) = behavior.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = behavior.fail_with {
            return Err(ProcessingError::fetch(context.url.to_string(), message));
        }

        Ok(ProcessedGadget {
            context,
            spec: behavior.spec.unwrap_or_default(),
        })
    }
}

/// URI builder answering a fixed host plus the module id
#[derive(Debug)]
pub struct FixedUriBuilder;

impl UriBuilder for FixedUriBuilder {
    fn make_rendering_uri(&self, gadget: &ProcessedGadget) -> Result<String, UriError> {
        Ok(format!(
            "http://render.example.org/ifr?mid={}",
            gadget.context.module_id
        ))
    }
}
