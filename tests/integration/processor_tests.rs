//! Spec fetching integration tests
//!
//! These tests run HttpGadgetProcessor against a local mock HTTP server
//! to verify fetching, parsing, error mapping, and cache behavior.

#[cfg(test)]
mod tests {
    use crate::common::SpecFactory;
    use opengadget_rs::config::models::{FetcherConfig, SpecCacheConfig};
    use opengadget_rs::core::context::{
        DEFAULT_COUNTRY, DEFAULT_LANGUAGE, DEFAULT_VIEW, GadgetContext,
    };
    use opengadget_rs::core::fetch::HttpGadgetProcessor;
    use opengadget_rs::core::process::{GadgetProcessor, ProcessingError};
    use std::collections::BTreeMap;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context_for(url: &str) -> GadgetContext {
        GadgetContext {
            url: Url::parse(url).unwrap(),
            module_id: 1,
            language: DEFAULT_LANGUAGE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            view: DEFAULT_VIEW.to_string(),
            container: "default".to_string(),
            debug: false,
            ignore_cache: false,
            prefs: BTreeMap::new(),
        }
    }

    fn uncached_config() -> FetcherConfig {
        FetcherConfig {
            cache: SpecCacheConfig {
                enabled: false,
                ..SpecCacheConfig::default()
            },
            ..FetcherConfig::default()
        }
    }

    // ==================== Fetching and Parsing ====================

    /// A served spec comes back parsed, fetched with the configured user agent
    #[tokio::test]
    async fn test_fetches_and_parses_spec() {
        let server = MockServer::start().await;
        let user_agent = format!("opengadget-rs/{}", env!("CARGO_PKG_VERSION"));
        Mock::given(method("GET"))
            .and(path("/weather.json"))
            .and(header("user-agent", user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(SpecFactory::weather_json()))
            .expect(1)
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&uncached_config()).unwrap();
        let url = format!("{}/weather.json", server.uri());
        let gadget = processor.process(context_for(&url)).await.unwrap();

        assert_eq!(gadget.spec.module_prefs.title, "Weather Report");
        assert_eq!(gadget.spec.user_prefs.len(), 2);
        assert_eq!(gadget.context.module_id, 1);
    }

    /// A non-success status maps to a fetch error naming the status
    #[tokio::test]
    async fn test_error_status_maps_to_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&uncached_config()).unwrap();
        let url = format!("{}/missing.json", server.uri());
        let err = processor.process(context_for(&url)).await.unwrap_err();

        assert!(matches!(err, ProcessingError::Fetch { .. }));
        assert!(err.to_string().contains("unexpected status 404"), "{err}");
    }

    /// A body that is not a spec maps to a parse error
    #[tokio::test]
    async fn test_unparsable_body_maps_to_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<gadget/>"))
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&uncached_config()).unwrap();
        let url = format!("{}/gadget.xml", server.uri());
        let err = processor.process(context_for(&url)).await.unwrap_err();

        assert!(matches!(err, ProcessingError::Parse { .. }));
    }

    /// A slow upstream maps to a timeout error
    #[tokio::test]
    async fn test_slow_upstream_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(SpecFactory::minimal_json())
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;

        let config = FetcherConfig {
            timeout_secs: 1,
            ..uncached_config()
        };
        let processor = HttpGadgetProcessor::new(&config).unwrap();
        let url = format!("{}/slow.json", server.uri());
        let err = processor.process(context_for(&url)).await.unwrap_err();

        assert!(matches!(err, ProcessingError::Timeout { .. }));
    }

    // ==================== Caching ====================

    /// A second request for the same spec is served from cache
    #[tokio::test]
    async fn test_cache_hit_avoids_second_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cached.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(SpecFactory::minimal_json()))
            .expect(1)
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&FetcherConfig::default()).unwrap();
        let url = format!("{}/cached.json", server.uri());

        let first = processor.process(context_for(&url)).await.unwrap();
        let second = processor.process(context_for(&url)).await.unwrap();
        assert_eq!(first.spec, second.spec);
        // The mounted expectation of one request is verified on drop
    }

    /// ignoreCache bypasses the cache and refetches
    #[tokio::test]
    async fn test_ignore_cache_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fresh.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(SpecFactory::minimal_json()))
            .expect(3)
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&FetcherConfig::default()).unwrap();
        let url = format!("{}/fresh.json", server.uri());

        let mut bypass = context_for(&url);
        bypass.ignore_cache = true;

        processor.process(bypass.clone()).await.unwrap();
        processor.process(bypass.clone()).await.unwrap();
        // The bypassing fetches refreshed the cache; a normal request
        // after them must not refetch, so only the bypass below counts
        processor.process(context_for(&url)).await.unwrap();
        processor.process(bypass).await.unwrap();
    }

    /// With caching disabled every request fetches
    #[tokio::test]
    async fn test_disabled_cache_always_fetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plain.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(SpecFactory::minimal_json()))
            .expect(2)
            .mount(&server)
            .await;

        let processor = HttpGadgetProcessor::new(&uncached_config()).unwrap();
        let url = format!("{}/plain.json", server.uri());

        processor.process(context_for(&url)).await.unwrap();
        processor.process(context_for(&url)).await.unwrap();
    }
}
