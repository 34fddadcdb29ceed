//! Configuration integration tests
//!
//! Tests for configuration file loading, environment overrides, and
//! validation across all config sections.

#[cfg(test)]
mod tests {
    use opengadget_rs::config::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    async fn load(yaml: &str) -> opengadget_rs::Result<Config> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        Config::from_file(file.path().to_str().unwrap()).await
    }

    // ==================== File Loading ====================

    /// A full configuration file populates every section
    #[tokio::test]
    async fn test_full_config_file() {
        let config = load(
            r#"
gateway:
  server:
    host: "127.0.0.1"
    port: 9090
    max_body_size: 65536
  rpc:
    max_batch_size: 16
  rendering:
    iframe_base_url: "https://gadgets.example.org/ifr"
    default_container: "portal"
  fetcher:
    timeout_secs: 5
    user_agent: "example-fetcher/1.0"
    cache:
      enabled: true
      max_entries: 50
      ttl_secs: 60
"#,
        )
        .await
        .unwrap();

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 9090);
        assert_eq!(config.server().max_body_size, 65536);
        assert_eq!(config.rpc().max_batch_size, 16);
        assert_eq!(
            config.rendering().iframe_base_url,
            "https://gadgets.example.org/ifr"
        );
        assert_eq!(config.rendering().default_container, "portal");
        assert_eq!(config.fetcher().timeout_secs, 5);
        assert_eq!(config.fetcher().user_agent, "example-fetcher/1.0");
        assert_eq!(config.fetcher().cache.max_entries, 50);
    }

    /// Missing sections fall back to defaults
    #[tokio::test]
    async fn test_partial_config_file_uses_defaults() {
        let config = load(
            r#"
gateway:
  server:
    port: 9191
"#,
        )
        .await
        .unwrap();

        assert_eq!(config.server().port, 9191);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.rpc().max_batch_size, 64);
        assert_eq!(config.rendering().default_container, "default");
        assert!(config.fetcher().cache.enabled);
    }

    /// A config file that fails validation is rejected at load time
    #[tokio::test]
    async fn test_invalid_config_file_rejected() {
        let result = load(
            r#"
gateway:
  rpc:
    max_batch_size: 0
"#,
        )
        .await;
        assert!(result.is_err());
    }

    /// A missing file surfaces as an error, not a default config
    #[tokio::test]
    async fn test_missing_config_file_errors() {
        let result = Config::from_file("/nonexistent/gateway.yaml").await;
        assert!(result.is_err());
    }

    /// Unparsable YAML surfaces as an error
    #[tokio::test]
    async fn test_unparsable_yaml_errors() {
        let result = load("gateway: [not, a, mapping").await;
        assert!(result.is_err());
    }

    // ==================== Environment Overrides ====================

    /// Environment variables override the listening address and iframe base
    ///
    /// This is the only test in this binary touching these variables, so
    /// parallel test threads cannot observe partial state.
    #[tokio::test]
    async fn test_env_overrides() {
        unsafe {
            std::env::set_var("OPENGADGET_HOST", "10.0.0.5");
            std::env::set_var("OPENGADGET_PORT", "8181");
            std::env::set_var("OPENGADGET_IFRAME_BASE_URL", "https://ifr.example.org/render");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server().host, "10.0.0.5");
        assert_eq!(config.server().port, 8181);
        assert_eq!(
            config.rendering().iframe_base_url,
            "https://ifr.example.org/render"
        );

        unsafe {
            std::env::set_var("OPENGADGET_PORT", "not-a-port");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            std::env::remove_var("OPENGADGET_HOST");
            std::env::remove_var("OPENGADGET_PORT");
            std::env::remove_var("OPENGADGET_IFRAME_BASE_URL");
        }
    }

    // ==================== Validation ====================

    /// Section validation failures carry the section context
    #[test]
    fn test_validation_names_offending_section() {
        let mut config = Config::default();
        config.gateway.fetcher.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Fetcher"), "{err}");
    }

    /// Merging keeps explicit overrides and defaults everything else
    #[test]
    fn test_merge_prefers_overrides() {
        let mut overrides = Config::default();
        overrides.gateway.server.port = 9999;
        overrides.gateway.rendering.default_container = "acme".to_string();

        let merged = Config::default().merge(overrides);
        assert_eq!(merged.server().port, 9999);
        assert_eq!(merged.rendering().default_container, "acme");
        assert_eq!(merged.server().host, "0.0.0.0");
    }
}
