//! # Runimage - container run configuration for image build tooling
//!
//! Runimage describes how a build or test tool starts a container from an
//! image it has just built: environment, command, networking, volumes, wait
//! conditions, restart policy and resource limits.
//!
//! The crate turns a sparse, user-authored configuration into an immutable
//! [`RunSpec`], validates its command and entrypoint, and reports the
//! minimum container runtime API version the configuration needs.
//!
//! ## Quick Start
//!
//! ```
//! use runimage::prelude::*;
//!
//! let spec = RunSpec::builder()
//!     .net("my-overlay")
//!     .entrypoint("/bin/sh")
//!     .ports(vec!["tomcat.port:8080".to_string()])
//!     .build();
//!
//! assert_eq!(spec.validate_and_resolve(), Ok(Some(ApiVersion::CUSTOM_NETWORKS)));
//! assert_eq!(spec.naming_strategy(), NamingStrategy::None);
//! ```
//!
//! ## Features
//!
//! - **Immutable specifications**: a [`RunSpecBuilder`] draft is turned into a
//!   [`RunSpec`] exactly once
//! - **Lazy defaults**: unset ports, naming strategy and restart policy fall
//!   back when read, not when stored
//! - **Capability resolution**: custom networks report the runtime API
//!   version they require
//! - **Configuration documents**: builders deserialize from YAML or JSON
//!
//! No containers are started and no files are read here; the launcher,
//! property-file handling and wait polling live with the caller.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod run;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{Config, OutputFormat, init_logging};
pub use run::{
    ApiVersion, Arguments, ConfigError, ConfigResult, LogConfig, NamingStrategy, NetworkingMode,
    RestartPolicy, RunSpec, RunSpecBuilder, Validate, VolumeConfig, WaitConfig,
};

/// Version of the runimage crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
