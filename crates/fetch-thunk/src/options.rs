//! Fetch options
//!
//! Options can be embedded in an application's TOML configuration:
//!
//! ```toml
//! [fetch]
//! silent = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options controlling how a fetch is dispatched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// Skip the `Request` action, only the outcome is dispatched
    ///
    /// Useful for background refreshes where no loading indicator
    /// should be shown.
    pub silent: bool,
}

impl FetchOptions {
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Parse options from a TOML fragment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse fetch options")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert!(!options.silent);
        assert!(options.with_silent(true).silent);
    }

    #[test]
    fn test_options_deserialize() {
        let options = FetchOptions::from_toml_str("silent = true").unwrap();
        assert!(options.silent);

        // Missing fields fall back to defaults
        let options = FetchOptions::from_toml_str("").unwrap();
        assert_eq!(options, FetchOptions::default());
    }

    #[test]
    fn test_options_invalid_type() {
        let err = FetchOptions::from_toml_str("silent = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse fetch options"));
    }
}
