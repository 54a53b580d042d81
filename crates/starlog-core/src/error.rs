//! Error types for Starlog

use thiserror::Error;

/// Result type alias using StarlogError
pub type Result<T> = std::result::Result<T, StarlogError>;

/// Main error type for Starlog operations
#[derive(Debug, Error)]
pub enum StarlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Overrides file not found
    #[error("Configuration file not found at {0}")]
    NotFound(std::path::PathBuf),

    /// A type token listed in the section ordering has no entry in the
    /// type table
    #[error("unmatched commit type \"{0}\" in section ordering")]
    UnknownOrderType(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Unsupported overrides file format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

impl StarlogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
