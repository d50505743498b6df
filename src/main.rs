//! runimage - inspect container run configurations
//!
//! Command-line utilities that load a run configuration document, validate
//! it and report what the container runtime must support to launch it.
//!
//! ## Commands
//!
//! - `runimage check` - Validate a configuration and report its API requirement
//! - `runimage show` - Print the configuration with all defaults applied
//! - `runimage completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Validate and gate against the local runtime
//! runimage check run.yaml --api-version 1.41
//!
//! # Inspect the normalized configuration as JSON
//! runimage show run.yaml --format json
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if std::env::var("RUNIMAGE_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
