//! `runimage check` - Validate a run configuration
//!
//! Loads a YAML or JSON run configuration, validates its command and
//! entrypoint and reports the minimum container runtime API version it
//! needs. When the runtime's API version is known, a configuration the
//! runtime is too old for is rejected.
//!
//! ## Usage
//!
//! ```bash
//! runimage check <run.yaml> [--api-version 1.41]
//! ```

use anyhow::{Context, Result};
use runimage::{ApiVersion, RunSpec, RunSpecBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of checking a run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Checked file
    pub file: PathBuf,
    /// Minimum runtime API version, `None` if any runtime will do
    pub required: Option<ApiVersion>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.required {
            Some(version) => write!(
                f,
                "{}: valid, requires runtime API {version} or newer",
                self.file.display()
            ),
            None => write!(f, "{}: valid, no elevated API requirement", self.file.display()),
        }
    }
}

/// Reads a run configuration document into an immutable specification.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_run_spec(file: &Path) -> Result<RunSpec> {
    let file_str = file.display();
    tracing::debug!("Loading run configuration: {}", file_str);

    if !file.exists() {
        anyhow::bail!("Run configuration not found: {}", file_str);
    }

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read run configuration: {file_str}"))?;

    let is_json = file
        .extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case("json"));

    let builder: RunSpecBuilder = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid run configuration: {file_str}"))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid run configuration: {file_str}"))?
    };

    Ok(builder.build())
}

/// Validates a run configuration file and gates it against `available`.
pub fn check_run_spec(file: &Path, available: Option<ApiVersion>) -> Result<CheckReport> {
    let spec = load_run_spec(file)?;

    let required = spec
        .validate_and_resolve()
        .with_context(|| format!("Run configuration failed validation: {}", file.display()))?;

    if let (Some(required), Some(available)) = (required, available) {
        ensure_supported(required, available)?;
    }

    tracing::info!("Run configuration valid: {}", file.display());
    Ok(CheckReport {
        file: file.to_path_buf(),
        required,
    })
}

/// Fails when a runtime speaking `available` cannot serve `required`.
pub fn ensure_supported(required: ApiVersion, available: ApiVersion) -> Result<()> {
    if !required.is_satisfied_by(&available) {
        anyhow::bail!(
            "Container runtime too old: API {available} available, configuration requires {required}"
        );
    }
    Ok(())
}
