//! Metadata RPC wire types
//!
//! Request types deserialize the JSON-RPC batch body; response types
//! serialize the aggregate reply. Response maps use `BTreeMap` so output
//! field order is stable.

use crate::core::spec::{ContentType, DataType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use crate::core::context::{DEFAULT_COUNTRY, DEFAULT_LANGUAGE, DEFAULT_VIEW};

/// Errors that fail an entire metadata batch
#[derive(Error, Debug, Clone)]
pub enum RpcError {
    /// The request body is not a well-formed batch
    #[error("Malformed metadata request: {0}")]
    Decode(String),
    /// A worker task could not be driven to completion
    #[error("Metadata batch orchestration failed: {0}")]
    Orchestration(String),
}

impl RpcError {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create an orchestration error
    pub fn orchestration(message: impl Into<String>) -> Self {
        Self::Orchestration(message.into())
    }
}

/// Top-level metadata batch request
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    /// Shared request context
    pub context: BatchContext,
    /// Gadgets to process
    pub gadgets: Vec<GadgetRequest>,
}

/// Batch-wide context shared by every gadget entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchContext {
    /// Locale language
    pub language: String,
    /// Locale country
    pub country: String,
    /// View to render
    pub view: String,
    /// Container identifier; falls back to the configured default
    pub container: Option<String>,
    /// Request debug output
    pub debug: bool,
    /// Bypass the spec cache
    pub ignore_cache: bool,
}

impl Default for BatchContext {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            view: DEFAULT_VIEW.to_string(),
            container: None,
            debug: false,
            ignore_cache: false,
        }
    }
}

/// One requested gadget
///
/// Per-gadget fields override the batch context when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetRequest {
    /// Gadget spec URL
    pub url: Url,
    /// Module instance identifier
    #[serde(default)]
    pub module_id: u64,
    /// User preference values keyed by pref name
    #[serde(default)]
    pub prefs: BTreeMap<String, String>,
    /// Locale language override
    pub language: Option<String>,
    /// Locale country override
    pub country: Option<String>,
    /// View override
    pub view: Option<String>,
    /// Container override
    pub container: Option<String>,
    /// Debug flag override
    pub debug: Option<bool>,
    /// Cache bypass override
    pub ignore_cache: Option<bool>,
}

/// Aggregate metadata batch response
#[derive(Debug, Serialize, Default)]
pub struct BatchResponse {
    /// One entry per requested gadget, in completion order
    pub gadgets: Vec<GadgetResult>,
}

/// Outcome of one gadget in a batch
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GadgetResult {
    /// The gadget was processed and projected
    Metadata(Box<GadgetMetadata>),
    /// Processing or projection failed for this gadget only
    Failure(GadgetFailure),
}

/// Per-gadget failure entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetFailure {
    /// Gadget spec URL as requested
    pub url: Url,
    /// Module instance identifier as requested
    pub module_id: u64,
    /// Failure messages
    pub errors: Vec<String>,
}

impl GadgetFailure {
    /// Create a failure entry carrying a single message
    pub fn new(url: Url, module_id: u64, message: impl Into<String>) -> Self {
        Self {
            url,
            module_id,
            errors: vec![message.into()],
        }
    }
}

/// Projected metadata for one gadget
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GadgetMetadata {
    /// URI at which the gadget renders
    pub iframe_url: String,
    /// Gadget spec URL as requested
    pub url: Url,
    /// Module instance identifier as requested
    pub module_id: u64,
    /// Gadget title
    pub title: String,
    /// Title link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_url: Option<Url>,
    /// Title shown in gadget directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_title: Option<String>,
    /// Thumbnail image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Url>,
    /// Screenshot image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<Url>,
    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author contact address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    /// Author affiliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_affiliation: Option<String>,
    /// Author location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_location: Option<String>,
    /// Author photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_photo: Option<String>,
    /// Author biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_aboutme: Option<String>,
    /// Author quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_quote: Option<String>,
    /// Author homepage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    /// Directory categories
    pub categories: Vec<String>,
    /// Preferred height in pixels
    pub height: u32,
    /// Preferred width in pixels
    pub width: u32,
    /// Whether usage statistics may be shown
    pub show_stats: bool,
    /// Whether the gadget may be listed in directories
    pub show_in_directory: bool,
    /// Whether only one instance may exist per page
    pub singleton: bool,
    /// Whether the gadget supports scaling
    pub scaling: bool,
    /// Whether the gadget supports scrolling
    pub scrolling: bool,
    /// Views keyed by view name
    pub views: BTreeMap<String, ViewMetadata>,
    /// Declared feature names
    pub features: Vec<String>,
    /// Feature declarations keyed by feature name
    pub feature_details: BTreeMap<String, FeatureDetail>,
    /// User preference declarations keyed by pref name
    pub user_prefs: BTreeMap<String, UserPrefMetadata>,
    /// Link targets keyed by relation
    pub links: BTreeMap<String, Url>,
}

/// Projected view declaration
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewMetadata {
    /// Content type for the view
    #[serde(rename = "type")]
    pub view_type: ContentType,
    /// Whether quirks-mode rendering is requested
    pub quirks: bool,
    /// Preferred height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_height: Option<u32>,
    /// Preferred width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_width: Option<u32>,
    /// Extra view attributes
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// Projected feature declaration
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDetail {
    /// Whether the gadget requires the feature
    pub required: bool,
    /// Feature parameters keyed by name
    pub parameters: BTreeMap<String, Vec<String>>,
}

/// Projected user preference declaration
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefMetadata {
    /// Human-readable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Preference data type
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Default value
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Enum choices as a value-to-display map
    pub enum_values: BTreeMap<String, String>,
    /// Enum choices in declaration order
    pub ordered_enum_values: Vec<OrderedEnumValue>,
}

/// One enum choice in declaration order
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderedEnumValue {
    /// Stored value
    pub value: String,
    /// Display text
    pub display_value: String,
}
