//! Argument lists for container commands and entrypoints
//!
//! An argument list is either a single shell-style string that is tokenized
//! on demand, or an explicit sequence of tokens (the "exec" form).

use super::errors::{ConfigError, ConfigResult};
use super::types::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Command or entrypoint of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArguments", into = "RawArguments")]
pub enum Arguments {
    /// Single string, split with shell quoting rules
    Shell(String),
    /// Explicit tokens passed as-is
    Exec(Vec<String>),
}

impl Arguments {
    /// Creates a shell-form argument list
    #[must_use]
    pub fn shell(command: impl Into<String>) -> Self {
        Self::Shell(command.into())
    }

    /// Creates an exec-form argument list
    #[must_use]
    pub fn exec<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exec(tokens.into_iter().map(Into::into).collect())
    }

    /// Builds an argument list from its two optional forms.
    ///
    /// # Errors
    ///
    /// Exactly one form must be given, otherwise
    /// [`ConfigError::MalformedArgumentList`] is returned.
    pub fn from_forms(shell: Option<String>, exec: Option<Vec<String>>) -> ConfigResult<Self> {
        match (shell, exec) {
            (Some(shell), None) => Ok(Self::Shell(shell)),
            (None, Some(exec)) => Ok(Self::Exec(exec)),
            (Some(_), Some(_)) => Err(ConfigError::malformed(
                "'shell' and 'exec' cannot be specified at the same time",
            )),
            (None, None) => Err(ConfigError::malformed("no 'shell' or 'exec' argument given")),
        }
    }

    /// Returns true for the shell form
    #[must_use]
    pub fn is_shell(&self) -> bool {
        matches!(self, Self::Shell(_))
    }

    /// Returns true for the exec form
    #[must_use]
    pub fn is_exec(&self) -> bool {
        matches!(self, Self::Exec(_))
    }

    /// Returns the tokens this argument list expands to.
    ///
    /// The shell form is split with POSIX shell quoting rules; the exec form
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedArgumentList`] when the shell form
    /// has unbalanced quotes.
    pub fn tokenize(&self) -> ConfigResult<Vec<String>> {
        match self {
            Self::Shell(command) => shell_words::split(command).map_err(|e| {
                ConfigError::malformed(format!("cannot tokenize '{command}': {e}"))
            }),
            Self::Exec(tokens) => Ok(tokens.clone()),
        }
    }
}

impl Validate for Arguments {
    type Error = ConfigError;

    fn validate(&self) -> Result<(), Self::Error> {
        match self {
            Self::Shell(_) => {
                if self.tokenize()?.is_empty() {
                    return Err(ConfigError::malformed("shell command is empty"));
                }
                Ok(())
            }
            Self::Exec(tokens) => {
                if tokens.is_empty() {
                    return Err(ConfigError::malformed("exec argument list is empty"));
                }
                if let Some(index) = tokens.iter().position(String::is_empty) {
                    return Err(ConfigError::malformed(format!(
                        "exec argument at position {index} is empty"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell(command) => write!(f, "{command}"),
            Self::Exec(tokens) => write!(f, "{}", shell_words::join(tokens)),
        }
    }
}

/// Shapes accepted in configuration documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawArguments {
    Shell(String),
    Exec(Vec<String>),
    Forms(ArgumentForms),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArgumentForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shell: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exec: Option<Vec<String>>,
}

impl TryFrom<RawArguments> for Arguments {
    type Error = ConfigError;

    fn try_from(raw: RawArguments) -> Result<Self, Self::Error> {
        match raw {
            RawArguments::Shell(command) => Ok(Self::Shell(command)),
            RawArguments::Exec(tokens) => Ok(Self::Exec(tokens)),
            RawArguments::Forms(forms) => Self::from_forms(forms.shell, forms.exec),
        }
    }
}

impl From<Arguments> for RawArguments {
    fn from(arguments: Arguments) -> Self {
        match arguments {
            Arguments::Shell(command) => Self::Shell(command),
            Arguments::Exec(tokens) => Self::Exec(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shell_tokenize() {
        let args = Arguments::shell(r#"sh -c "echo hello world""#);
        assert_eq!(
            args.tokenize().unwrap(),
            vec!["sh", "-c", "echo hello world"]
        );
    }

    #[test]
    fn test_exec_tokenize_is_verbatim() {
        let args = Arguments::exec(["echo", "a b"]);
        assert_eq!(args.tokenize().unwrap(), vec!["echo", "a b"]);
        assert!(args.is_exec());
    }

    #[test]
    fn test_validate_shell() {
        assert!(Arguments::shell("/bin/sh").validate().is_ok());
        assert!(Arguments::shell("").validate().is_err());
        assert!(Arguments::shell("   ").validate().is_err());
        assert!(Arguments::shell("echo 'unterminated").validate().is_err());
    }

    #[test]
    fn test_validate_exec() {
        assert!(Arguments::exec(["java", "-jar", "app.jar"]).validate().is_ok());
        assert!(Arguments::exec(Vec::<String>::new()).validate().is_err());

        let err = Arguments::exec(["java", ""]).validate().unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_from_forms() {
        assert_eq!(
            Arguments::from_forms(Some("ls".to_string()), None).unwrap(),
            Arguments::shell("ls")
        );
        assert_eq!(
            Arguments::from_forms(None, Some(vec!["ls".to_string()])).unwrap(),
            Arguments::exec(["ls"])
        );
        assert!(matches!(
            Arguments::from_forms(Some("ls".to_string()), Some(vec!["ls".to_string()])),
            Err(ConfigError::MalformedArgumentList { .. })
        ));
        assert!(matches!(
            Arguments::from_forms(None, None),
            Err(ConfigError::MalformedArgumentList { .. })
        ));
    }

    #[test]
    fn test_deserialize_shapes() {
        let shell: Arguments = serde_yaml::from_str("echo hi").unwrap();
        assert_eq!(shell, Arguments::shell("echo hi"));

        let exec: Arguments = serde_yaml::from_str("[echo, hi]").unwrap();
        assert_eq!(exec, Arguments::exec(["echo", "hi"]));

        let forms: Arguments = serde_yaml::from_str("exec: [echo, hi]").unwrap();
        assert_eq!(forms, Arguments::exec(["echo", "hi"]));

        let conflicting = serde_yaml::from_str::<Arguments>("shell: echo\nexec: [echo]");
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(
            serde_json::to_string(&Arguments::shell("echo hi")).unwrap(),
            r#""echo hi""#
        );
        assert_eq!(
            serde_json::to_string(&Arguments::exec(["echo", "hi"])).unwrap(),
            r#"["echo","hi"]"#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Arguments::shell("echo hi").to_string(), "echo hi");
        assert_eq!(Arguments::exec(["echo", "a b"]).to_string(), "echo 'a b'");
    }
}
