//! Error types for configuration loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file path was set.
    #[error("configuration file path is empty")]
    EmptyPath,

    /// The configuration file could not be opened or read.
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not well-formed JSON.
    #[error("failed to parse JSON from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not an array of JSON objects.
    #[error("config root is not an array of JSON objects")]
    InvalidRootShape,

    /// An element that must be an object is something else.
    #[error("invalid format for object in configuration file")]
    InvalidFormat,

    /// A leaf value is neither a string nor an integer.
    #[error("invalid value type for key '{key}': expected string or integer")]
    InvalidValueType { key: String },

    /// A lookup into a map or section found no entry.
    #[error("key '{key}' not found in configuration")]
    MissingKey { key: String },

    /// A registered target-key handler reported a failure.
    #[error("handler for key '{key}' failed: {message}")]
    Handler { key: String, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
