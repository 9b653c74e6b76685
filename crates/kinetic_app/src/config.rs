//! App configuration
//!
//! Loaded from `kinetic.toml`. Every field has a default, so an empty file
//! (or no file at all) is a valid configuration.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = "kinetic.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub animation: AnimationSection,
    pub logging: LoggingSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Route opened at launch
    pub initial_route: String,
    /// Shown in the settings footer
    pub version: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            initial_route: "/".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    /// Frame rate used when stepping the clock by whole frames
    pub target_fps: u32,
    /// Longest single integration step (ms)
    pub max_step_ms: f32,
}

impl AnimationSection {
    /// Length of one frame in milliseconds
    pub fn frame_ms(&self) -> f64 {
        1000.0 / f64::from(self.target_fps.max(1))
    }
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_step_ms: 8.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
