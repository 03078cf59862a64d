//! Core error types for dinonest-core.
//!
//! This module defines the error hierarchy using thiserror. Domain-level
//! misses (unknown goal id, invalid creation input) are deliberately not
//! errors -- the store treats them as silent no-ops -- so the variants here
//! cover persistence, configuration, and authentication failures only.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dinonest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication-related errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Store persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create or resolve the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store file
    #[error("Failed to write store file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the store state
    #[error("Failed to serialize store state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be prepared
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The backend rejected the login; carries the backend's message
    #[error("Login failed (HTTP {status}): {message}")]
    LoginFailed { status: u16, message: String },

    /// Request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OS credential store failure
    #[error("Credential store error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Stored session data could not be encoded or decoded
    #[error("Session data error: {0}")]
    Session(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
