//! Demo configuration
//!
//! Loaded from `.fetch-thunk-demo.toml` in the working directory:
//!
//! ```toml
//! entities = ["orders", "customers", "invoices"]
//! failing = ["invoices"]
//! latency_ms = 250
//!
//! [fetch]
//! silent = false
//! ```

use fetch_thunk::FetchOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CONFIG_FILE: &str = ".fetch-thunk-demo.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Options applied to every fetch
    pub fetch: FetchOptions,
    /// Entities to load
    pub entities: Vec<String>,
    /// Entities whose simulated fetch is rejected
    pub failing: Vec<String>,
    /// Simulated latency of a single fetch
    pub latency_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            entities: vec![
                "orders".to_string(),
                "customers".to_string(),
                "invoices".to_string(),
            ],
            failing: vec!["invoices".to_string()],
            latency_ms: 250,
        }
    }
}

impl DemoConfig {
    /// Load config from the working directory, or use defaults
    pub fn load() -> Self {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded demo config from {}", CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                }
            }
        }

        log::debug!("Using default demo config");
        Self::default()
    }

    pub fn should_fail(&self, entity: &str) -> bool {
        self.failing.iter().any(|name| name == entity)
    }

    /// Simulated latency of the `idx`-th entity
    ///
    /// Latencies are staggered so outcomes arrive in a visible order.
    pub fn latency_for(&self, idx: usize) -> Duration {
        Duration::from_millis(self.latency_ms.saturating_mul(idx as u64 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.entities.len(), 3);
        assert!(config.should_fail("invoices"));
        assert!(!config.should_fail("orders"));
        assert!(!config.fetch.silent);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            entities = ["orders"]
            latency_ms = 10

            [fetch]
            silent = true
        "#;
        let config: DemoConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.entities, vec!["orders".to_string()]);
        assert_eq!(config.latency_ms, 10);
        assert!(config.fetch.silent);
        // failing should use default
        assert!(config.should_fail("invoices"));
    }

    #[test]
    fn test_latency_is_staggered() {
        let config = DemoConfig {
            latency_ms: 100,
            ..DemoConfig::default()
        };
        assert_eq!(config.latency_for(0), Duration::from_millis(100));
        assert_eq!(config.latency_for(2), Duration::from_millis(300));
    }

    #[test]
    fn test_latency_saturates_on_large_values() {
        let config = DemoConfig {
            latency_ms: u64::MAX,
            ..DemoConfig::default()
        };
        assert_eq!(config.latency_for(3), Duration::from_millis(u64::MAX));
    }
}
