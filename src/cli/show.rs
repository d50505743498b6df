//! `runimage show` - Print a normalized run configuration

use anyhow::{Context, Result};
use runimage::{ApiVersion, OutputFormat, RunSpec};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowDocument<'a> {
    #[serde(flatten)]
    spec: &'a RunSpec,
    network_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_api_version: Option<ApiVersion>,
}

/// Renders `spec` with every default applied, plus its resolved
/// networking mode and API requirement.
pub fn render_run_spec(spec: &RunSpec, format: OutputFormat) -> Result<String> {
    let required = spec
        .validate_and_resolve()
        .context("Run configuration failed validation")?;

    let normalized = spec.normalized();
    let document = ShowDocument {
        spec: &normalized,
        network_mode: spec.networking_mode().to_string(),
        required_api_version: required,
    };

    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&document).context("Failed to render run configuration as YAML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .context("Failed to render run configuration as JSON"),
    }
}
