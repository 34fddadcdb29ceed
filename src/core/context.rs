//! Per-gadget request context

use std::collections::BTreeMap;
use url::Url;

/// Language applied when a request does not specify one
pub const DEFAULT_LANGUAGE: &str = "all";
/// Country applied when a request does not specify one
pub const DEFAULT_COUNTRY: &str = "ALL";
/// View applied when a request does not specify one
pub const DEFAULT_VIEW: &str = "default";

/// The merged, concrete context for one gadget in a batch.
///
/// One instance exists per requested gadget. It is created during request
/// decode by layering per-gadget overrides on top of the batch-global
/// context, then moved into exactly one processing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GadgetContext {
    /// Location of the gadget specification
    pub url: Url,
    /// Module instance identifier
    pub module_id: u64,
    /// Locale language
    pub language: String,
    /// Locale country
    pub country: String,
    /// Requested view name
    pub view: String,
    /// Requesting container
    pub container: String,
    /// Render with debug output
    pub debug: bool,
    /// Bypass cached specs
    pub ignore_cache: bool,
    /// User preference values, ordered by name
    pub prefs: BTreeMap<String, String>,
}

impl GadgetContext {
    /// Cache key for the parsed spec behind this context
    pub fn spec_key(&self) -> String {
        self.url.to_string()
    }
}
