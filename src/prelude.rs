//! Prelude module for common imports

pub use crate::run::api_version::ApiVersion;
pub use crate::run::arguments::Arguments;
pub use crate::run::errors::{ConfigError, ConfigResult};
pub use crate::run::log::{LogConfig, LogDriver};
pub use crate::run::network::NetworkingMode;
pub use crate::run::restart::RestartPolicy;
pub use crate::run::run_spec::{RunSpec, RunSpecBuilder};
pub use crate::run::types::{NamingStrategy, Validate};
pub use crate::run::volume::VolumeConfig;
pub use crate::run::wait::WaitConfig;
