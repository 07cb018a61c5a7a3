//! Core error types for winboost-core.
//!
//! The store itself never fails: unknown or inapplicable actions are no-ops.
//! Errors only surface at the edges, when loading configuration or when a
//! caller validates user input before dispatching.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for winboost-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No usable config directory
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

/// Validation errors raised at the caller boundary, before a dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The task name was blank after trimming.
    #[error("Task name is required")]
    EmptyTaskName,

    /// The reward name was blank after trimming.
    #[error("Reward name is required")]
    EmptyRewardName,

    /// Energy level outside 1..=10.
    #[error("Energy level must be between 1 and 10, got {0}")]
    EnergyOutOfRange(i64),

    /// A quantity that must be strictly positive was not.
    #[error("'{field}' must be greater than zero")]
    NotPositive { field: &'static str },

    /// An enum-valued field received a name it does not know.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
