//! Wait conditions applied after a container starts
//!
//! These describe *what* to wait for. Polling URLs, following logs and
//! probing ports happens in the component that launches the container.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Conditions to wait for during and after container startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitConfig {
    /// Maximum time to wait in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,

    /// URL polled until it answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP method used when polling `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Accepted HTTP status, a code or a `min..max` range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Pattern the container log must show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,

    /// Grace period in milliseconds between stop and kill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill: Option<u64>,

    /// Pause in milliseconds after stopping the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutdown: Option<u64>,

    /// Commands executed inside the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecHooks>,

    /// TCP ports that must accept connections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpWait>,
}

/// Commands run inside the container around its lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecHooks {
    /// Run right after the container started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_start: Option<String>,

    /// Run right before the container is stopped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_stop: Option<String>,
}

/// TCP readiness check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpWait {
    /// Host to connect to, the container address when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Ports to probe
    #[serde(default)]
    pub ports: Vec<u16>,
}

impl WaitConfig {
    /// Creates an empty wait configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum wait time
    #[must_use]
    pub fn with_time(mut self, time: Duration) -> Self {
        self.time = Some(u64::try_from(time.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Sets the URL to poll
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the log pattern to wait for
    #[must_use]
    pub fn with_log(mut self, pattern: impl Into<String>) -> Self {
        self.log = Some(pattern.into());
        self
    }

    /// Sets the TCP ports to probe
    #[must_use]
    pub fn with_tcp_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.tcp = Some(TcpWait {
            host: None,
            ports: ports.into_iter().collect(),
        });
        self
    }

    /// Maximum wait time as a duration
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.time.map(Duration::from_millis)
    }

    /// Returns true if any readiness condition is configured
    #[must_use]
    pub fn has_condition(&self) -> bool {
        self.url.is_some()
            || self.log.is_some()
            || self.tcp.as_ref().is_some_and(|tcp| !tcp.ports.is_empty())
            || self.exec.as_ref().is_some_and(|exec| exec.post_start.is_some())
    }
}
