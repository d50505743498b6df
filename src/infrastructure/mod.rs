//! Infrastructure layer
//!
//! Application configuration and logging setup.

mod config;
mod logging;

pub use config::{Config, ENV_API_VERSION, ENV_LOG_LEVEL, ENV_OUTPUT, OutputFormat};
pub use logging::init_logging;
