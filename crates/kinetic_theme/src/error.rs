//! Error types for kinetic_theme

use thiserror::Error;

/// Errors raised while reading or writing token files
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to parse theme TOML: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("failed to write theme TOML: {0}")]
    WriteToml(#[from] toml::ser::Error),

    #[error("failed to write theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for kinetic_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
