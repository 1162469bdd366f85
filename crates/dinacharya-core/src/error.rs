//! Core error types for dinacharya-core.
//!
//! This module defines the error hierarchy using thiserror. The engines
//! themselves only produce [`ValidationError`] and [`ScheduleError`];
//! [`ConfigError`] belongs to the TOML configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dinacharya-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Schedule generation errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
///
/// `InvalidValue` is what callers see for malformed input such as a bad
/// wake time or an unknown constitution tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Schedule generation errors.
///
/// Generation is all-or-nothing: whenever one of these is returned no
/// slots were produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Malformed wake time or unknown constitution
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Study load is above what the overflow policy will schedule
    #[error("Study load of {requested} min exceeds the {capacity} min the overflow policy allows")]
    StudyOverflow { requested: u32, capacity: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
