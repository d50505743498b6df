//! Run specification and builder
//!
//! A [`RunSpec`] describes how a container started from a built image is
//! launched. It is assembled with a [`RunSpecBuilder`], either through the
//! fluent setters or by deserializing a configuration document, and is
//! immutable once built.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::api_version::ApiVersion;
use super::arguments::Arguments;
use super::errors::{ConfigError, ConfigResult};
use super::log::LogConfig;
use super::network::NetworkingMode;
use super::restart::{DEFAULT_RESTART_POLICY, RestartPolicy};
use super::types::{NamingStrategy, Validate, parse_lenient_bool};
use super::volume::VolumeConfig;
use super::wait::WaitConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Memory swap value meaning "no swap limit"
pub const UNLIMITED_SWAP: i64 = -1;

/// Parameters for launching a container
///
/// Optional settings stay optional: accessors with a documented fallback
/// ([`ports`](Self::ports), [`naming_strategy`](Self::naming_strategy),
/// [`restart_policy`](Self::restart_policy)) apply it when read, so the
/// stored value still tells whether the user set it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RunSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    env: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    env_property_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cmd: Option<Arguments>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    domainname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    entrypoint: Option<Arguments>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    shm_size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    memory: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    memory_swap: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    port_property_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    net: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    dns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    dns_search: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cap_add: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cap_drop: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    privileged: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    extra_hosts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ports: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    naming_strategy: Option<NamingStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    volumes: Option<VolumeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    links: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    wait: Option<WaitConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    log: Option<LogConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    restart_policy: Option<RestartPolicy>,

    #[serde(default, deserialize_with = "deserialize_skip")]
    skip: bool,
}

impl RunSpec {
    /// Creates a new run specification builder
    pub fn builder() -> RunSpecBuilder {
        RunSpecBuilder::new()
    }

    /// Validates the command and entrypoint, then reports the minimum
    /// runtime API version this specification needs.
    ///
    /// `Ok(None)` means any supported runtime will do. A returned version is
    /// informational: the caller decides whether its runtime is recent
    /// enough.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedArgumentList`] if the entrypoint or
    /// command is structurally invalid.
    pub fn validate_and_resolve(&self) -> ConfigResult<Option<ApiVersion>> {
        self.validate()?;

        let mode = self.networking_mode();
        tracing::debug!(network = %mode, "Resolved networking mode");

        if mode.is_custom_network() {
            let required = ApiVersion::CUSTOM_NETWORKS;
            tracing::info!(
                network = %mode,
                api_version = %required,
                "Custom network requires elevated runtime API version"
            );
            return Ok(Some(required));
        }

        Ok(None)
    }

    /// Environment variables
    pub fn env(&self) -> Option<&IndexMap<String, String>> {
        self.env.as_ref()
    }

    /// Container labels
    pub fn labels(&self) -> Option<&IndexMap<String, String>> {
        self.labels.as_ref()
    }

    /// Property file with additional environment variables
    pub fn env_property_file(&self) -> Option<&Path> {
        self.env_property_file.as_deref()
    }

    /// Command to run
    pub fn cmd(&self) -> Option<&Arguments> {
        self.cmd.as_ref()
    }

    /// Domain name
    pub fn domainname(&self) -> Option<&str> {
        self.domainname.as_deref()
    }

    /// Entrypoint
    pub fn entrypoint(&self) -> Option<&Arguments> {
        self.entrypoint.as_ref()
    }

    /// Hostname
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// User the container process runs as
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Working directory inside the container
    pub fn working_dir(&self) -> Option<&str> {
        self.working_dir.as_deref()
    }

    /// Size of `/dev/shm` in bytes
    pub fn shm_size(&self) -> Option<i64> {
        self.shm_size
    }

    /// Memory limit in bytes
    pub fn memory(&self) -> Option<i64> {
        self.memory
    }

    /// Memory plus swap limit in bytes, [`UNLIMITED_SWAP`] for no limit
    pub fn memory_swap(&self) -> Option<i64> {
        self.memory_swap
    }

    /// Returns true when swap was explicitly left unlimited
    pub fn is_swap_unlimited(&self) -> bool {
        self.memory_swap == Some(UNLIMITED_SWAP)
    }

    /// File the dynamically mapped ports are written to
    pub fn port_property_file(&self) -> Option<&Path> {
        self.port_property_file.as_deref()
    }

    /// Raw network token as configured
    pub fn net(&self) -> Option<&str> {
        self.net.as_deref()
    }

    /// Networking mode classified from the network token
    pub fn networking_mode(&self) -> NetworkingMode {
        NetworkingMode::parse(self.net.as_deref())
    }

    /// DNS servers
    pub fn dns(&self) -> Option<&[String]> {
        self.dns.as_deref()
    }

    /// DNS search domains
    pub fn dns_search(&self) -> Option<&[String]> {
        self.dns_search.as_deref()
    }

    /// Added kernel capabilities
    pub fn cap_add(&self) -> Option<&[String]> {
        self.cap_add.as_deref()
    }

    /// Dropped kernel capabilities
    pub fn cap_drop(&self) -> Option<&[String]> {
        self.cap_drop.as_deref()
    }

    /// Privileged mode, unset leaves the runtime default
    pub fn privileged(&self) -> Option<bool> {
        self.privileged
    }

    /// Extra `/etc/hosts` entries
    pub fn extra_hosts(&self) -> Option<&[String]> {
        self.extra_hosts.as_deref()
    }

    /// Port mappings in configuration order, empty when unset
    pub fn ports(&self) -> &[String] {
        self.ports.as_deref().unwrap_or_default()
    }

    /// Returns true if port mappings were configured
    pub fn is_ports_set(&self) -> bool {
        self.ports.is_some()
    }

    /// Container naming strategy, [`NamingStrategy::None`] when unset
    pub fn naming_strategy(&self) -> NamingStrategy {
        self.naming_strategy.unwrap_or_default()
    }

    /// Returns true if a naming strategy was configured
    pub fn is_naming_strategy_set(&self) -> bool {
        self.naming_strategy.is_some()
    }

    /// Volume configuration
    pub fn volumes(&self) -> Option<&VolumeConfig> {
        self.volumes.as_ref()
    }

    /// Links to other containers
    pub fn links(&self) -> Option<&[String]> {
        self.links.as_deref()
    }

    /// Wait conditions
    pub fn wait(&self) -> Option<&WaitConfig> {
        self.wait.as_ref()
    }

    /// Log configuration
    pub fn log(&self) -> Option<&LogConfig> {
        self.log.as_ref()
    }

    /// Restart policy, the default policy when unset
    pub fn restart_policy(&self) -> &RestartPolicy {
        self.restart_policy.as_ref().unwrap_or(&DEFAULT_RESTART_POLICY)
    }

    /// Returns true if a restart policy was configured
    pub fn is_restart_policy_set(&self) -> bool {
        self.restart_policy.is_some()
    }

    /// Whether starting this container is skipped
    pub fn skip(&self) -> bool {
        self.skip
    }

    /// Returns a copy with every accessor fallback written out.
    ///
    /// Meant for display; the copy no longer tells set and unset apart.
    pub fn normalized(&self) -> Self {
        Self {
            ports: Some(self.ports().to_vec()),
            naming_strategy: Some(self.naming_strategy()),
            restart_policy: Some(self.restart_policy().clone()),
            ..self.clone()
        }
    }
}

impl Validate for RunSpec {
    type Error = ConfigError;

    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(entrypoint) = &self.entrypoint {
            tracing::debug!(entrypoint = %entrypoint, "Validating entrypoint");
            entrypoint.validate()?;
        }
        if let Some(cmd) = &self.cmd {
            tracing::debug!(cmd = %cmd, "Validating command");
            cmd.validate()?;
        }
        Ok(())
    }
}

fn deserialize_skip<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => lenient_skip(&text),
        Some(Flag::Other(_)) => {
            tracing::warn!("Non-textual skip flag, treating as false");
            false
        }
    })
}

fn lenient_skip(text: &str) -> bool {
    let value = parse_lenient_bool(text);
    if !value && !text.eq_ignore_ascii_case("false") {
        tracing::warn!(value = %text, "Unrecognized skip flag, treating as false");
    }
    value
}

/// Builder for creating run specifications
///
/// Every setter takes an optional value; passing `None` leaves the setting
/// unset. Call [`build`](Self::build) to obtain the immutable [`RunSpec`].
/// The builder is consumed by `build`; clone it first to build several
/// specifications from one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RunSpecBuilder {
    spec: RunSpec,
}

impl RunSpecBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets environment variables
    pub fn env(mut self, env: impl Into<Option<IndexMap<String, String>>>) -> Self {
        self.spec.env = env.into();
        self
    }

    /// Sets labels
    pub fn labels(mut self, labels: impl Into<Option<IndexMap<String, String>>>) -> Self {
        self.spec.labels = labels.into();
        self
    }

    /// Sets the environment property file
    pub fn env_property_file<'a>(mut self, path: impl Into<Option<&'a str>>) -> Self {
        self.spec.env_property_file = path.into().map(PathBuf::from);
        self
    }

    /// Sets the command from a shell-style string
    pub fn cmd<'a>(mut self, cmd: impl Into<Option<&'a str>>) -> Self {
        if let Some(cmd) = cmd.into() {
            self.spec.cmd = Some(Arguments::shell(cmd));
        }
        self
    }

    /// Sets the command from an argument list
    pub fn cmd_args(mut self, cmd: impl Into<Option<Arguments>>) -> Self {
        if let Some(cmd) = cmd.into() {
            self.spec.cmd = Some(cmd);
        }
        self
    }

    /// Sets the domain name
    pub fn domainname<'a>(mut self, domainname: impl Into<Option<&'a str>>) -> Self {
        self.spec.domainname = domainname.into().map(str::to_owned);
        self
    }

    /// Sets the entrypoint from a shell-style string
    pub fn entrypoint<'a>(mut self, entrypoint: impl Into<Option<&'a str>>) -> Self {
        if let Some(entrypoint) = entrypoint.into() {
            self.spec.entrypoint = Some(Arguments::shell(entrypoint));
        }
        self
    }

    /// Sets the entrypoint from an argument list
    pub fn entrypoint_args(mut self, entrypoint: impl Into<Option<Arguments>>) -> Self {
        if let Some(entrypoint) = entrypoint.into() {
            self.spec.entrypoint = Some(entrypoint);
        }
        self
    }

    /// Sets the hostname
    pub fn hostname<'a>(mut self, hostname: impl Into<Option<&'a str>>) -> Self {
        self.spec.hostname = hostname.into().map(str::to_owned);
        self
    }

    /// Sets the port property file
    pub fn port_property_file<'a>(mut self, path: impl Into<Option<&'a str>>) -> Self {
        self.spec.port_property_file = path.into().map(PathBuf::from);
        self
    }

    /// Sets the working directory
    pub fn working_dir<'a>(mut self, working_dir: impl Into<Option<&'a str>>) -> Self {
        self.spec.working_dir = working_dir.into().map(str::to_owned);
        self
    }

    /// Sets the user
    pub fn user<'a>(mut self, user: impl Into<Option<&'a str>>) -> Self {
        self.spec.user = user.into().map(str::to_owned);
        self
    }

    /// Sets the size of `/dev/shm` in bytes
    pub fn shm_size(mut self, shm_size: impl Into<Option<i64>>) -> Self {
        self.spec.shm_size = shm_size.into();
        self
    }

    /// Sets the memory limit in bytes
    pub fn memory(mut self, memory: impl Into<Option<i64>>) -> Self {
        self.spec.memory = memory.into();
        self
    }

    /// Sets the memory plus swap limit in bytes
    pub fn memory_swap(mut self, memory_swap: impl Into<Option<i64>>) -> Self {
        self.spec.memory_swap = memory_swap.into();
        self
    }

    /// Sets added capabilities
    pub fn cap_add(mut self, cap_add: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.cap_add = cap_add.into();
        self
    }

    /// Sets dropped capabilities
    pub fn cap_drop(mut self, cap_drop: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.cap_drop = cap_drop.into();
        self
    }

    /// Sets the raw network token
    pub fn net<'a>(mut self, net: impl Into<Option<&'a str>>) -> Self {
        self.spec.net = net.into().map(str::to_owned);
        self
    }

    /// Sets DNS servers
    pub fn dns(mut self, dns: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.dns = dns.into();
        self
    }

    /// Sets DNS search domains
    pub fn dns_search(mut self, dns_search: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.dns_search = dns_search.into();
        self
    }

    /// Sets extra hosts
    pub fn extra_hosts(mut self, extra_hosts: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.extra_hosts = extra_hosts.into();
        self
    }

    /// Sets port mappings
    pub fn ports(mut self, ports: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.ports = ports.into();
        self
    }

    /// Sets the volume configuration
    pub fn volumes(mut self, volumes: impl Into<Option<VolumeConfig>>) -> Self {
        self.spec.volumes = volumes.into();
        self
    }

    /// Sets container links
    pub fn links(mut self, links: impl Into<Option<Vec<String>>>) -> Self {
        self.spec.links = links.into();
        self
    }

    /// Sets wait conditions
    pub fn wait(mut self, wait: impl Into<Option<WaitConfig>>) -> Self {
        self.spec.wait = wait.into();
        self
    }

    /// Sets the log configuration
    pub fn log(mut self, log: impl Into<Option<LogConfig>>) -> Self {
        self.spec.log = log.into();
        self
    }

    /// Sets the naming strategy by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnumValue`] for a name that is neither
    /// `none` nor `alias`.
    pub fn naming_strategy<'a>(
        mut self,
        naming_strategy: impl Into<Option<&'a str>>,
    ) -> ConfigResult<Self> {
        self.spec.naming_strategy = Some(NamingStrategy::parse_optional(naming_strategy.into())?);
        Ok(self)
    }

    /// Sets privileged mode
    pub fn privileged(mut self, privileged: impl Into<Option<bool>>) -> Self {
        self.spec.privileged = privileged.into();
        self
    }

    /// Sets the restart policy
    pub fn restart_policy(mut self, restart_policy: impl Into<Option<RestartPolicy>>) -> Self {
        self.spec.restart_policy = restart_policy.into();
        self
    }

    /// Sets the skip flag from text; anything but `true` means false
    pub fn skip<'a>(mut self, skip: impl Into<Option<&'a str>>) -> Self {
        if let Some(skip) = skip.into() {
            self.spec.skip = lenient_skip(skip);
        }
        self
    }

    /// Builds the run specification
    pub fn build(self) -> RunSpec {
        self.spec
    }
}
