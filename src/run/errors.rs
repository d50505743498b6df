//! Error types for run configurations

use thiserror::Error;

/// Result type for run configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or validating a run configuration
///
/// Both kinds are fatal: a container must not be launched from a
/// configuration that produced one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A command or entrypoint has an inconsistent structure
    #[error("Malformed argument list: {reason}")]
    MalformedArgumentList {
        /// Description of the inconsistency.
        reason: String,
    },

    /// A string-valued enum setting matched no known variant
    #[error("Unknown {kind} value: '{value}'")]
    UnknownEnumValue {
        /// Name of the setting being parsed.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedArgumentList {
            reason: reason.into(),
        }
    }
}
