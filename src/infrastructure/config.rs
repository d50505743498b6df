//! Configuration management

use crate::run::{ApiVersion, ParseApiVersionError};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "RUNIMAGE_LOG_LEVEL";
/// Environment variable with the runtime API version to check against
pub const ENV_API_VERSION: &str = "RUNIMAGE_API_VERSION";
/// Environment variable selecting the output format
pub const ENV_OUTPUT: &str = "RUNIMAGE_OUTPUT";

/// Format used to print run specifications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML document
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level
    pub log_level: String,
    /// API version of the container runtime, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<ApiVersion>,
    /// Output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            api_version: None,
            output: OutputFormat::Yaml,
        }
    }
}

impl Config {
    /// Loads the configuration from `RUNIMAGE_*` environment variables
    ///
    /// # Errors
    ///
    /// Fails if `RUNIMAGE_API_VERSION` is set but not a valid version.
    pub fn from_env() -> Result<Self, ParseApiVersionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through a variable lookup function
    ///
    /// # Errors
    ///
    /// Fails if the API version variable is set but not a valid version.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ParseApiVersionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.trim().is_empty()) {
            config.log_level = level;
        }
        if let Some(version) = lookup(ENV_API_VERSION).filter(|v| !v.trim().is_empty()) {
            config.api_version = Some(version.parse()?);
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            match OutputFormat::parse_lenient(&output) {
                Some(format) => config.output = format,
                None => tracing::warn!(value = %output, "Unknown output format, using yaml"),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.api_version, None);
        assert_eq!(config.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "debug"),
            (ENV_API_VERSION, "1.41"),
            (ENV_OUTPUT, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_version, Some(ApiVersion::new(1, 41)));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_config_rejects_bad_api_version() {
        assert!(Config::from_lookup(lookup_from(&[(ENV_API_VERSION, "latest")])).is_err());
    }

    #[test]
    fn test_config_ignores_unknown_output() {
        let config = Config::from_lookup(lookup_from(&[(ENV_OUTPUT, "xml")])).unwrap();
        assert_eq!(config.output, OutputFormat::Yaml);
    }
}
