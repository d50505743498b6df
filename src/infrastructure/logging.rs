//! Logging configuration
//!
//! Initializes tracing for the application. Log lines go to stderr so that
//! printed specifications on stdout stay machine-readable.

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes logging with the specified level.
///
/// Directives in `RUST_LOG` take precedence over `level`.
pub fn init_logging(level: &str) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    fmt()
        .with_env_filter(log_filter(directives.as_deref(), level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .init();
}

fn log_filter(directives: Option<&str>, level: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_without_directives() {
        assert_eq!(log_filter(None, "debug").to_string(), "debug");
        assert_eq!(log_filter(Some("  "), "warn").to_string(), "warn");
    }

    #[test]
    fn test_directives_override_level() {
        let filter = log_filter(Some("runimage=trace"), "info");
        assert_eq!(filter.to_string(), "runimage=trace");
    }
}
