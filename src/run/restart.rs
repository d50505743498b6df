//! Restart policy for started containers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy name under which the retry count is honoured
pub const ON_FAILURE: &str = "on-failure";

/// Policy used when a configuration does not set one
pub static DEFAULT_RESTART_POLICY: RestartPolicy = RestartPolicy {
    name: None,
    retry: 0,
};

/// Restart policy handed to the container runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartPolicy {
    /// Policy name (`no`, `always`, `unless-stopped`, `on-failure`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Maximum retries, only used by `on-failure`
    #[serde(default)]
    pub retry: u32,
}

impl RestartPolicy {
    /// Creates a policy with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            retry: 0,
        }
    }

    /// Creates an `on-failure` policy with a retry limit
    #[must_use]
    pub fn on_failure(retry: u32) -> Self {
        Self {
            name: Some(ON_FAILURE.to_string()),
            retry,
        }
    }

    /// Returns true if this is the runtime's "no restart" default
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_RESTART_POLICY
    }

    /// Retry count as the runtime applies it
    #[must_use]
    pub fn effective_retry(&self) -> u32 {
        match self.name.as_deref() {
            Some(ON_FAILURE) => self.retry,
            _ => 0,
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.as_deref(), self.effective_retry()) {
            (None, _) => write!(f, "no"),
            (Some(name), 0) => write!(f, "{name}"),
            (Some(name), retry) => write!(f, "{name}:{retry}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        assert!(RestartPolicy::default().is_default());
        assert_eq!(DEFAULT_RESTART_POLICY.to_string(), "no");
        assert!(!RestartPolicy::new("always").is_default());
    }

    #[test]
    fn test_effective_retry() {
        assert_eq!(RestartPolicy::on_failure(3).effective_retry(), 3);

        let always = RestartPolicy {
            name: Some("always".to_string()),
            retry: 5,
        };
        assert_eq!(always.effective_retry(), 0);
        assert_eq!(always.to_string(), "always");
    }

    #[test]
    fn test_display_on_failure() {
        assert_eq!(RestartPolicy::on_failure(2).to_string(), "on-failure:2");
    }
}
