//! Render URI construction

use crate::config::models::RenderingConfig;
use crate::core::process::ProcessedGadget;
use std::fmt::Debug;
use thiserror::Error;
use url::Url;

/// Errors raised while building a render URI
#[derive(Error, Debug, Clone)]
pub enum UriError {
    /// The configured base URL is unusable
    #[error("Invalid iframe base URL: {0}")]
    InvalidBase(String),
}

/// Computes the rendering URI for a processed gadget
///
/// Implementations are side-effect free; a failure here is reported as a
/// per-gadget failure by the caller.
pub trait UriBuilder: Send + Sync + Debug + 'static {
    /// Build the URI at which this gadget renders
    fn make_rendering_uri(&self, gadget: &ProcessedGadget) -> Result<String, UriError>;
}

/// Builds iframe render URIs from a configured base URL
///
/// The base URL is parsed and validated once at construction; afterwards
/// URI building cannot fail.
#[derive(Debug, Clone)]
pub struct IframeUriBuilder {
    base: Url,
}

impl IframeUriBuilder {
    /// Create a builder from rendering configuration
    pub fn new(config: &RenderingConfig) -> Result<Self, UriError> {
        let base = Url::parse(&config.iframe_base_url)
            .map_err(|e| UriError::InvalidBase(e.to_string()))?;
        Ok(Self { base })
    }
}

impl UriBuilder for IframeUriBuilder {
    fn make_rendering_uri(&self, gadget: &ProcessedGadget) -> Result<String, UriError> {
        let context = &gadget.context;
        let mut uri = self.base.clone();

        {
            let mut query = uri.query_pairs_mut();
            query.append_pair("url", context.url.as_str());
            query.append_pair("container", &context.container);
            query.append_pair("mid", &context.module_id.to_string());
            query.append_pair("lang", &context.language);
            query.append_pair("country", &context.country);
            query.append_pair("view", &context.view);
            if context.debug {
                query.append_pair("debug", "1");
            }
            if context.ignore_cache {
                query.append_pair("nocache", "1");
            }
            for (name, value) in &context.prefs {
                query.append_pair(&format!("up_{}", name), value);
            }
        }

        Ok(uri.to_string())
    }
}
