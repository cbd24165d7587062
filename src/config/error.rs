//! Configuration error types

use thiserror::Error;

use crate::domain::footprint::FactorLoadError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Emission factors could not be loaded: {0}")]
    FactorLoad(#[from] FactorLoadError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Recommendation limit must be between 1 and {max}, got {actual}")]
    InvalidRecommendationLimit { max: usize, actual: usize },

    #[error("Emission factor file path is empty")]
    EmptyFactorsPath,
}
