//! Core types for run configurations
//!
//! This module contains small value types shared across the run
//! configuration domain.

#![allow(clippy::must_use_candidate)]

use super::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming scheme applied to started containers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NamingStrategy {
    /// No extra naming, the runtime picks a name
    #[default]
    None,
    /// Use the image alias as container name
    Alias,
}

impl NamingStrategy {
    /// Returns true if containers are named after the image alias
    #[must_use]
    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias)
    }

    /// Parses an optional textual strategy.
    ///
    /// Absent and empty input yield [`NamingStrategy::None`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnumValue`] for any other
    /// unrecognized token.
    pub fn parse_optional(value: Option<&str>) -> ConfigResult<Self> {
        match value {
            None | Some("") => Ok(Self::None),
            Some(token) => token.parse(),
        }
    }
}

impl FromStr for NamingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "alias" => Ok(Self::Alias),
            _ => Err(ConfigError::UnknownEnumValue {
                kind: "naming strategy",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for NamingStrategy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_optional(Some(&value))
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Alias => write!(f, "alias"),
        }
    }
}

/// Parses a flag the lenient way: exactly `true` in any letter case is
/// true, everything else (padded text included) is false.
pub(crate) fn parse_lenient_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Trait for types that can be validated
#[allow(clippy::missing_errors_doc)]
pub trait Validate {
    /// Type of validation error
    type Error;

    /// Validates this type
    fn validate(&self) -> std::result::Result<(), Self::Error>;
}
