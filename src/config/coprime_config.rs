// src/config/coprime_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for the coprime factoring driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoprimeConfig {
    /// Number of rayon worker threads; None lets rayon decide.
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Run the two halves of the coprime-base recursion as parallel tasks.
    pub parallel: bool,

    /// Re-multiply every reported factorization before printing it.
    pub verify: bool,
}

impl Default for CoprimeConfig {
    fn default() -> Self {
        CoprimeConfig {
            threads: None, // Use Rayon's default
            log_level: "info".to_string(),
            parallel: false,
            verify: true,
        }
    }
}

impl CoprimeConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("parallel", false)?
            .set_default("verify", true)?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("coprime.toml").exists() {
            builder = builder.add_source(File::with_name("coprime.toml"));
        } else if Path::new("coprime.yaml").exists() {
            builder = builder.add_source(File::with_name("coprime.yaml"));
        }

        // Override with environment variables (prefix: COPRIME_)
        builder = builder.add_source(Environment::with_prefix("COPRIME").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("parallel", false)?
            .set_default("verify", true)?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(Environment::with_prefix("COPRIME").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoprimeConfig::default();
        assert_eq!(config.threads, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.parallel, false);
        assert_eq!(config.verify, true);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = CoprimeConfig::load().unwrap_or_else(|_| CoprimeConfig::default());
        assert_eq!(config.log_level, "info");
    }
}
