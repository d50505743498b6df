//! Log output configuration for started containers

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How container output is shown or routed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Whether output is followed, enabled when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Prefix for every printed line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Timestamp format for printed lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Color name for printed lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// File the output is written to instead of the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Runtime log driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<LogDriver>,
}

/// Runtime log driver and its options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDriver {
    /// Driver name, e.g. `json-file` or `syslog`
    pub name: String,

    /// Driver options
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub opts: IndexMap<String, String>,
}

impl LogConfig {
    /// Returns true unless output following was switched off
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        assert!(LogConfig::default().is_enabled());
        let disabled = LogConfig {
            enabled: Some(false),
            ..Default::default()
        };
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn test_driver_options_keep_order() {
        let yaml = "driver:\n  name: syslog\n  opts:\n    tag: app\n    address: udp://1.2.3.4:514\n";
        let log: LogConfig = serde_yaml::from_str(yaml).unwrap();
        let driver = log.driver.unwrap();
        assert_eq!(driver.name, "syslog");
        let keys: Vec<_> = driver.opts.keys().cloned().collect();
        assert_eq!(keys, vec!["tag", "address"]);
    }
}
