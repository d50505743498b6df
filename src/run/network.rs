//! Networking mode classification
//!
//! The raw `net` token of a run configuration is classified into one of the
//! modes the container runtime understands.

use serde::{Deserialize, Serialize};
use std::fmt;

const CONTAINER_PREFIX: &str = "container:";
const CUSTOM_PREFIX: &str = "custom:";

/// Networking mode derived from a raw network token
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "name")]
pub enum NetworkingMode {
    /// Runtime default, no mode is sent to the runtime
    #[default]
    Default,
    /// Default bridge network
    Bridge,
    /// Host network stack
    Host,
    /// No networking
    None,
    /// Share the network stack of another container
    Container(String),
    /// User-defined network
    Custom(String),
}

impl NetworkingMode {
    /// Classifies a raw network token.
    ///
    /// Absent, empty and `default` tokens are [`NetworkingMode::Default`].
    /// `container:<name>` references another container, `custom:<name>` and
    /// every other unreserved token name a user-defined network.
    #[must_use]
    pub fn parse(net: Option<&str>) -> Self {
        let Some(token) = net.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Default;
        };

        match token {
            "default" => Self::Default,
            "bridge" => Self::Bridge,
            "host" => Self::Host,
            "none" => Self::None,
            _ => {
                if let Some(name) = strip_prefix_ignore_case(token, CONTAINER_PREFIX) {
                    Self::Container(name.to_string())
                } else if let Some(name) = strip_prefix_ignore_case(token, CUSTOM_PREFIX) {
                    if name.is_empty() {
                        Self::Default
                    } else {
                        Self::Custom(name.to_string())
                    }
                } else {
                    Self::Custom(token.to_string())
                }
            }
        }
    }

    /// Returns true for a user-defined network
    #[must_use]
    pub fn is_custom_network(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Returns true for the runtime's built-in modes
    #[must_use]
    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Bridge | Self::Host | Self::None)
    }

    /// Returns true when the runtime default applies
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Name of the referenced container, if any
    #[must_use]
    pub fn container_name(&self) -> Option<&str> {
        match self {
            Self::Container(name) => Some(name),
            _ => None,
        }
    }

    /// Name of the user-defined network, if any
    #[must_use]
    pub fn network_name(&self) -> Option<&str> {
        match self {
            Self::Custom(name) => Some(name),
            _ => None,
        }
    }

    /// Value for the runtime's `NetworkMode` host setting.
    ///
    /// The default mode yields `None` so the runtime applies its own default.
    #[must_use]
    pub fn to_runtime_mode(&self) -> Option<String> {
        match self {
            Self::Default => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for NetworkingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Bridge => write!(f, "bridge"),
            Self::Host => write!(f, "host"),
            Self::None => write!(f, "none"),
            Self::Container(name) => write!(f, "{CONTAINER_PREFIX}{name}"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

fn strip_prefix_ignore_case<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    let head = token.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &token[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        assert_eq!(NetworkingMode::parse(None), NetworkingMode::Default);
        assert_eq!(NetworkingMode::parse(Some("")), NetworkingMode::Default);
        assert_eq!(NetworkingMode::parse(Some("  ")), NetworkingMode::Default);
        assert_eq!(NetworkingMode::parse(Some("default")), NetworkingMode::Default);
    }

    #[test]
    fn test_reserved_modes() {
        assert_eq!(NetworkingMode::parse(Some("bridge")), NetworkingMode::Bridge);
        assert_eq!(NetworkingMode::parse(Some("host")), NetworkingMode::Host);
        assert_eq!(NetworkingMode::parse(Some("none")), NetworkingMode::None);
        assert!(NetworkingMode::parse(Some("host")).is_standard());
    }

    #[test]
    fn test_container_reference() {
        let mode = NetworkingMode::parse(Some("container:foo"));
        assert_eq!(mode, NetworkingMode::Container("foo".to_string()));
        assert_eq!(mode.container_name(), Some("foo"));
        assert!(!mode.is_custom_network());

        let upper = NetworkingMode::parse(Some("Container:db"));
        assert_eq!(upper.container_name(), Some("db"));
    }

    #[test]
    fn test_custom_network() {
        let mode = NetworkingMode::parse(Some("my-custom-net"));
        assert!(mode.is_custom_network());
        assert_eq!(mode.network_name(), Some("my-custom-net"));

        let prefixed = NetworkingMode::parse(Some("custom:backend"));
        assert_eq!(prefixed, NetworkingMode::Custom("backend".to_string()));

        assert_eq!(NetworkingMode::parse(Some("custom:")), NetworkingMode::Default);
    }

    #[test]
    fn test_runtime_mode() {
        assert_eq!(NetworkingMode::Default.to_runtime_mode(), None);
        assert_eq!(NetworkingMode::Host.to_runtime_mode().as_deref(), Some("host"));
        assert_eq!(
            NetworkingMode::parse(Some("container:foo")).to_runtime_mode().as_deref(),
            Some("container:foo")
        );
        assert_eq!(
            NetworkingMode::parse(Some("custom:backend")).to_runtime_mode().as_deref(),
            Some("backend")
        );
    }
}
