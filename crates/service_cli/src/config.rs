//! CLI configuration.
//!
//! Settings come from an optional TOML file, then `TBILL_*` environment
//! variables, then command-line flags, each layer overriding the last.

use std::path::{Path, PathBuf};
use std::time::Duration;

use adapter_feeds::DEFAULT_FEED_BASE_URL;
use serde::Deserialize;
use thiserror::Error;

/// Largest schedule the CLI will print, in days.
pub const MAX_SCHEDULE_DAYS: u32 = 3660;

/// Most fractional digits that carry information for an `f64` rate.
pub const MAX_PRECISION: usize = 17;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Base URL of the daily bill rate feed
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Earlier months to try when the current month has no entries
    #[serde(default = "default_fallback_months")]
    pub fallback_months: u32,

    /// HTTP timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Number of days in the printed schedule
    #[serde(default = "default_schedule_days")]
    pub schedule_days: u32,

    /// Fractional digits for printed rates
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_BASE_URL.to_string()
}

fn default_fallback_months() -> u32 {
    1
}

fn default_schedule_days() -> u32 {
    366
}

fn default_precision() -> usize {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            fallback_months: default_fallback_months(),
            timeout_secs: None,
            schedule_days: default_schedule_days(),
            precision: default_precision(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `TBILL_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TBILL_FEED_URL") {
            self.feed_url = url;
        }

        if let Some(months) = lookup("TBILL_FALLBACK_MONTHS") {
            self.fallback_months = parse_var("TBILL_FALLBACK_MONTHS", &months)?;
        }

        if let Some(secs) = lookup("TBILL_TIMEOUT_SECS") {
            self.timeout_secs = if secs.trim().is_empty() {
                None
            } else {
                Some(parse_var("TBILL_TIMEOUT_SECS", &secs)?)
            };
        }

        if let Some(level) = lookup("TBILL_LOG_LEVEL") {
            self.log_level = level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if !self.feed_url.starts_with("http://") && !self.feed_url.starts_with("https://") {
            errors.push(format!(
                "Invalid feed_url '{}'. Must start with http:// or https://",
                self.feed_url
            ));
        }

        if self.fallback_months > 12 {
            errors.push(format!(
                "fallback_months {} exceeds maximum allowed (12)",
                self.fallback_months
            ));
        }

        if self.timeout_secs == Some(0) {
            errors.push("timeout_secs must be greater than 0".to_string());
        }

        if self.schedule_days == 0 || self.schedule_days > MAX_SCHEDULE_DAYS {
            errors.push(format!(
                "schedule_days must be between 1 and {}, got {}",
                MAX_SCHEDULE_DAYS, self.schedule_days
            ));
        }

        if self.precision > MAX_PRECISION {
            errors.push(format!(
                "precision {} exceeds maximum allowed ({})",
                self.precision, MAX_PRECISION
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// HTTP timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{} has invalid value '{}'", name, value)))
}

/// Configuration failures, reported before any feed request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// Malformed TOML or environment value
    #[error("Parse error: {0}")]
    Parse(String),
    /// Every rule the values break
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_BASE_URL);
        assert_eq!(config.fallback_months, 1);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.schedule_days, 366);
        assert_eq!(config.precision, 16);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml("timeout_secs = 30\nprecision = 4\n").unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.precision, 4);
        assert_eq!(config.schedule_days, 366);
        assert_eq!(config.feed_url, DEFAULT_FEED_BASE_URL);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let result = CliConfig::from_toml("feed_ulr = \"https://example.org\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "schedule_days = \"many\"").unwrap();

        assert!(matches!(
            CliConfig::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_shipped_config_loads_and_validates() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tbill-rates.toml");
        let config = CliConfig::load(&path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                ("TBILL_FEED_URL", "http://localhost:9000/feed"),
                ("TBILL_FALLBACK_MONTHS", "3"),
                ("TBILL_TIMEOUT_SECS", "15"),
                ("TBILL_LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.feed_url, "http://localhost:9000/feed");
        assert_eq!(config.fallback_months, 3);
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_timeout_override_disables_timeout() {
        let config = CliConfig {
            timeout_secs: Some(10),
            ..CliConfig::default()
        }
        .with_overrides(lookup(&[("TBILL_TIMEOUT_SECS", "")]))
        .unwrap();
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_bad_env_value_is_parse_error() {
        let result =
            CliConfig::default().with_overrides(lookup(&[("TBILL_FALLBACK_MONTHS", "two")]));
        match result {
            Err(ConfigError::Parse(msg)) => assert!(msg.contains("TBILL_FALLBACK_MONTHS")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CliConfig {
            feed_url: "ftp://example.org".to_string(),
            fallback_months: 24,
            timeout_secs: Some(0),
            schedule_days: 0,
            precision: 30,
            log_level: "info".to_string(),
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
