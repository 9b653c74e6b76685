//! Error types for kinetic_app

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the app
#[derive(Error, Debug)]
pub enum AppError {
    /// Route name that no screen is registered for
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// Icon name outside the bundled icon set
    #[error("unknown icon: {0}")]
    UnknownIcon(String),

    /// Pointer event aimed at an element the current screen does not have
    #[error("{screen} has no interactive element '{key}'")]
    UnknownElement { screen: &'static str, key: String },

    /// Toggle key the current screen does not own
    #[error("{screen} has no toggle '{key}'")]
    UnknownToggle { screen: &'static str, key: String },

    /// Failed to read the config file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::AppConfig`]
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for kinetic_app operations
pub type Result<T> = std::result::Result<T, AppError>;
