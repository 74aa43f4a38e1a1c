// src/config/mod.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime tuning for the sieve. Everything here has a sane default; the
/// functional contract of `factorize` does not depend on any of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Extra sieve-window expansions before a retryable failure becomes
    /// terminal.
    pub retry_budget: u32,

    /// Relations collected beyond |factor base|; more margin means more
    /// null-space vectors to try.
    pub relation_margin: usize,

    /// Absolute cap on the number of sieved candidates per attempt.
    pub max_sieve_window: u64,

    /// Witness rounds for the Fermat probable-prime screen.
    pub fermat_rounds: u32,

    /// Worker threads for the parallel stages (default: rayon's choice).
    #[serde(default)]
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            retry_budget: 3,
            relation_margin: 100,
            max_sieve_window: 1 << 22,
            fermat_rounds: 200,
            threads: None,
            log_level: "info".to_string(),
        }
    }
}

impl SieveConfig {
    /// Load configuration with precedence: config file → env vars → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("qsieve.toml")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("retry_budget", 3)?
            .set_default("relation_margin", 100)?
            .set_default("max_sieve_window", 1u64 << 22)?
            .set_default("fermat_rounds", 200)?
            .set_default("log_level", "info")?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: QSIEVE_)
        builder = builder.add_source(Environment::with_prefix("QSIEVE").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SieveConfig::default();
        assert_eq!(config.retry_budget, 3);
        assert_eq!(config.relation_margin, 100);
        assert_eq!(config.max_sieve_window, 1 << 22);
        assert_eq!(config.fermat_rounds, 200);
        assert_eq!(config.threads, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_without_file() {
        let config = SieveConfig::load_from_file("does-not-exist.toml")
            .unwrap_or_else(|_| SieveConfig::default());
        assert_eq!(config.retry_budget, 3);
    }
}
