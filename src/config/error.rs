//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Rate '{0}' must be a number between 0 and 1,000,000")]
    InvalidRate(&'static str),

    #[error("Utilization thresholds must satisfy over < under <= 100")]
    InvalidUtilizationBounds,

    #[error("Reserved capacity group size must be at least 1")]
    InvalidGroupSize,

    #[error("Archive threshold must be a non-negative number of GB")]
    InvalidArchiveThreshold,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
