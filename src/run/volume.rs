//! Volume configuration

use serde::{Deserialize, Serialize};

/// Volumes mounted into the container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Images whose started containers provide volumes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<String>,

    /// Bind mounts in `host:container[:mode]` form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind: Vec<String>,
}

impl VolumeConfig {
    /// Creates an empty volume configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image to mount volumes from
    #[must_use]
    pub fn from_image(mut self, image: impl Into<String>) -> Self {
        self.from.push(image.into());
        self
    }

    /// Adds a bind mount
    #[must_use]
    pub fn bind(mut self, mount: impl Into<String>) -> Self {
        self.bind.push(mount.into());
        self
    }

    /// Returns true when nothing is mounted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.bind.is_empty()
    }
}
