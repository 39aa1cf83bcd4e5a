//! Configuration for the qhash CLI.
//!
//! Values are layered, later sources winning:
//! 1. Default values
//! 2. Configuration file (YAML, from `--config` or `QHASH_CONFIG`)
//! 3. Environment variables (`QHASH_` prefix)
//! 4. Command-line flags

use std::path::Path;

use qhash::{HashConfig, SamplingStrategy};
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "QHASH_CONFIG";

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Digest settings
    #[serde(default)]
    pub hash: HashConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        let config: CliConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file, then apply environment
    /// overrides.
    ///
    /// When `config_file` is `None`, the path in `QHASH_CONFIG` is used if set.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_PATH_VAR);
        let path = config_file.or(from_env.as_deref().map(Path::new));

        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = config.merge_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `QHASH_*` variables, read through `lookup`.
    ///
    /// Only variables that are set override; a set variable that does not
    /// parse is an error.
    pub fn merge_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QHASH_OUTPUT_BITS") {
            self.hash.output_bits = v.trim().parse().map_err(|_| {
                ConfigError::ParseError(format!("QHASH_OUTPUT_BITS: not a number: {v}"))
            })?;
        }
        if let Some(v) = lookup("QHASH_SAMPLING") {
            self.hash.sampling = v
                .parse::<SamplingStrategy>()
                .map_err(|e| ConfigError::ParseError(format!("QHASH_SAMPLING: {e}")))?;
        }
        if let Some(v) = lookup("QHASH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QHASH_LOG_FORMAT") {
            self.logging.format = v;
        }
        Ok(self)
    }

    /// Digest settings with command-line overrides applied.
    pub fn hash_with(&self, bits: Option<u32>, sampling: Option<SamplingStrategy>) -> HashConfig {
        HashConfig {
            output_bits: bits.unwrap_or(self.hash.output_bits),
            sampling: sampling.unwrap_or(self.hash.sampling),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hash
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.hash, HashConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "console");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "hash:\n  output_bits: 64\n  sampling: most-probable\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hash.output_bits, 64);
        assert_eq!(config.hash.sampling, SamplingStrategy::MostProbable);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  format: json").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hash, HashConfig::default());
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hash:\n  output_bits: 512").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hash: [unclosed").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default()
            .merge_env_with(env(&[
                ("QHASH_OUTPUT_BITS", "128"),
                ("QHASH_SAMPLING", "most-probable"),
                ("QHASH_LOG_LEVEL", "info"),
            ]))
            .unwrap();
        assert_eq!(config.hash.output_bits, 128);
        assert_eq!(config.hash.sampling, SamplingStrategy::MostProbable);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_env_absent_leaves_values() {
        let mut base = CliConfig::default();
        base.hash.output_bits = 32;
        let config = base.clone().merge_env_with(env(&[])).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_env_parse_errors() {
        let err = CliConfig::default()
            .merge_env_with(env(&[("QHASH_OUTPUT_BITS", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("QHASH_OUTPUT_BITS"));

        let err = CliConfig::default()
            .merge_env_with(env(&[("QHASH_SAMPLING", "coin-flip")]))
            .unwrap_err();
        assert!(err.to_string().contains("QHASH_SAMPLING"));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.hash.output_bits = 64;

        let hash = config.hash_with(None, None);
        assert_eq!(hash.output_bits, 64);
        assert_eq!(hash.sampling, SamplingStrategy::Seeded);

        let hash = config.hash_with(Some(16), Some(SamplingStrategy::MostProbable));
        assert_eq!(hash.output_bits, 16);
        assert_eq!(hash.sampling, SamplingStrategy::MostProbable);
    }

    #[test]
    fn test_validate_invalid_logging() {
        let mut config = CliConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
