//! Container runtime API versions
//!
//! Run configurations report the minimum API version they need, and the
//! caller compares it with what the runtime offers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A `major.minor` runtime API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion {
    major: u32,
    minor: u32,
}

impl ApiVersion {
    /// API level at which user-defined networks became available (Docker 1.9)
    pub const CUSTOM_NETWORKS: Self = Self::new(1, 21);

    /// Creates a version from its components
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Major component
    #[must_use]
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component
    #[must_use]
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Returns true when a runtime speaking `available` can serve a
    /// configuration requiring this version
    #[must_use]
    pub fn is_satisfied_by(&self, available: &ApiVersion) -> bool {
        available >= self
    }
}

/// Error returned when an API version string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid API version '{0}': expected <major>.<minor>")]
pub struct ParseApiVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let invalid = || ParseApiVersionError(s.to_string());
        let (major, minor) = digits.split_once('.').ok_or_else(invalid)?;

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = ParseApiVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_networks_version() {
        assert_eq!(ApiVersion::CUSTOM_NETWORKS.to_string(), "1.21");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1.21".parse::<ApiVersion>().unwrap(), ApiVersion::new(1, 21));
        assert_eq!("v1.43".parse::<ApiVersion>().unwrap(), ApiVersion::new(1, 43));
        assert!("1".parse::<ApiVersion>().is_err());
        assert!("1.x".parse::<ApiVersion>().is_err());
        assert!("".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(ApiVersion::new(1, 9) < ApiVersion::new(1, 21));
        assert!(ApiVersion::new(2, 0) > ApiVersion::new(1, 43));
    }

    #[test]
    fn test_is_satisfied_by() {
        let required = ApiVersion::CUSTOM_NETWORKS;
        assert!(required.is_satisfied_by(&ApiVersion::new(1, 21)));
        assert!(required.is_satisfied_by(&ApiVersion::new(1, 41)));
        assert!(!required.is_satisfied_by(&ApiVersion::new(1, 20)));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&ApiVersion::new(1, 21)).unwrap();
        assert_eq!(json, r#""1.21""#);
        let parsed: ApiVersion = serde_json::from_str(r#""1.24""#).unwrap();
        assert_eq!(parsed, ApiVersion::new(1, 24));
    }
}
