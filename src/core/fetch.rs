//! HTTP gadget spec retrieval with optional caching

use crate::config::models::FetcherConfig;
use crate::core::context::GadgetContext;
use crate::core::process::{GadgetProcessor, ProcessedGadget, ProcessingError};
use crate::core::spec::GadgetSpec;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Fetches gadget specs over HTTP and parses them
///
/// Parsed specs are kept in an in-memory cache keyed by spec URL when
/// caching is enabled. A context with `ignore_cache` set always refetches
/// and refreshes the cached entry.
#[derive(Debug, Clone)]
pub struct HttpGadgetProcessor {
    client: reqwest::Client,
    cache: Option<Cache<String, Arc<GadgetSpec>>>,
}

impl HttpGadgetProcessor {
    /// Create a processor from fetcher configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, ProcessingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ProcessingError::configuration(e.to_string()))?;

        let cache = if config.cache.enabled {
            Some(
                Cache::builder()
                    .max_capacity(config.cache.max_entries)
                    .time_to_live(Duration::from_secs(config.cache.ttl_secs))
                    .build(),
            )
        } else {
            None
        };

        Ok(Self { client, cache })
    }

    async fn fetch_spec(&self, url: &url::Url) -> Result<GadgetSpec, ProcessingError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                ProcessingError::timeout(url.to_string())
            } else {
                ProcessingError::fetch(url.to_string(), e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessingError::fetch(
                url.to_string(),
                format!("unexpected status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProcessingError::fetch(url.to_string(), e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| ProcessingError::parse(url.to_string(), e.to_string()))
    }
}

#[async_trait]
impl GadgetProcessor for HttpGadgetProcessor {
    async fn process(&self, context: GadgetContext) -> Result<ProcessedGadget, ProcessingError> {
        let key = context.spec_key();

        let spec = match &self.cache {
            Some(cache) if !context.ignore_cache => {
                if let Some(cached) = cache.get(&key).await {
                    debug!(url = %context.url, "Gadget spec cache hit");
                    cached
                } else {
                    let fetched = Arc::new(self.fetch_spec(&context.url).await?);
                    cache.insert(key, fetched.clone()).await;
                    fetched
                }
            }
            Some(cache) => {
                // Bypass requested; refresh the entry for later lookups
                let fetched = Arc::new(self.fetch_spec(&context.url).await?);
                cache.insert(key, fetched.clone()).await;
                fetched
            }
            None => Arc::new(self.fetch_spec(&context.url).await?),
        };

        Ok(ProcessedGadget {
            spec: (*spec).clone(),
            context,
        })
    }
}
