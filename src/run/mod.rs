//! Run configuration domain types and logic

pub mod api_version;
pub mod arguments;
pub mod errors;
pub mod log;
pub mod network;
pub mod restart;
pub mod run_spec;
pub mod types;
pub mod volume;
pub mod wait;

#[cfg(test)]
mod run_spec_props;

// Re-export public types from submodules
pub use api_version::{ApiVersion, ParseApiVersionError};
pub use arguments::Arguments;
pub use errors::{ConfigError, ConfigResult};
pub use log::{LogConfig, LogDriver};
pub use network::NetworkingMode;
pub use restart::{DEFAULT_RESTART_POLICY, RestartPolicy};
pub use run_spec::{RunSpec, RunSpecBuilder, UNLIMITED_SWAP};
pub use types::{NamingStrategy, Validate};
pub use volume::VolumeConfig;
pub use wait::{ExecHooks, TcpWait, WaitConfig};
