//! Error types for loading and saving the parameter file.

use thiserror::Error;

/// Errors that can occur while reading or writing the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read configuration file: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the configuration file.
    #[error("failed to write configuration file: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse the TOML configuration.
    #[error("failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration to TOML.
    #[error("failed to serialize configuration to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
