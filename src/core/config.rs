//! Configuration management

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Public MyMemory endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net/";

/// Service-side limit on a single `q` value, in bytes
pub const DEFAULT_SPLIT_THRESHOLD: usize = 400;

/// Per-request timeout when neither request nor config set one
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Domains used for generated rate-limit addresses
pub const DEFAULT_EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.com", "pm.me"];

/// Configuration for the MyMemory client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub email_domains: Vec<String>,
    pub timeout_ms: u64,
    pub split_threshold: usize,
    /// Chunk requests allowed in flight at once
    pub max_concurrent: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email_domains: DEFAULT_EMAIL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            max_concurrent: 1,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("MYMEMORY_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(timeout_ms) = lookup("MYMEMORY_TIMEOUT_MS") {
            config.timeout_ms = timeout_ms.parse::<u64>()?;
        }

        if let Some(max_concurrent) = lookup("MYMEMORY_MAX_CONCURRENT") {
            config.max_concurrent = max_concurrent.parse::<usize>()?;
        }

        if let Some(split_threshold) = lookup("MYMEMORY_SPLIT_THRESHOLD") {
            config.split_threshold = split_threshold.parse::<usize>()?;
        }

        if let Some(domains) = lookup("MYMEMORY_EMAIL_DOMAINS") {
            config.email_domains = domains
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
            info!("Loaded {} email domains from environment", config.email_domains.len());
        }

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base_url {:?}: {}", self.base_url, e))?;

        if self.email_domains.is_empty() {
            return Err(anyhow::anyhow!("email_domains must not be empty"));
        }

        if self.max_concurrent == 0 {
            return Err(anyhow::anyhow!("max_concurrent must be greater than 0"));
        }

        if self.split_threshold == 0 {
            return Err(anyhow::anyhow!("split_threshold must be greater than 0"));
        }

        Ok(())
    }

    /// Default per-request timeout
    pub fn timeout(&self) -> Duration {
        if self.timeout_ms == 0 {
            Duration::from_millis(DEFAULT_TIMEOUT_MS)
        } else {
            Duration::from_millis(self.timeout_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.split_threshold, 400);
        assert_eq!(config.max_concurrent, 1);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.email_domains.len(), 4);
    }

    #[test]
    fn test_config_validation_empty_domains() {
        let config = ClientConfig {
            email_domains: vec![],
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_concurrency() {
        let config = ClientConfig {
            max_concurrent: 0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };

        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("MYMEMORY_BASE_URL", "http://localhost:9000/"),
            ("MYMEMORY_MAX_CONCURRENT", "3"),
            ("MYMEMORY_EMAIL_DOMAINS", "example.org, example.net,"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.max_concurrent, 3);
        assert_eq!(config.email_domains, vec!["example.org", "example.net"]);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_from_lookup_rejects_bad_number() {
        let result = ClientConfig::from_lookup(lookup_from(&[("MYMEMORY_TIMEOUT_MS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mymemory.json");

        let config = ClientConfig {
            timeout_ms: 2500,
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        assert_eq!(ClientConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"max_concurrent": 2}"#).unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
