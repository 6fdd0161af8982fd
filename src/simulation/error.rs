//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.
//! Missing devices and failed security log writes are not errors.

use crate::facility::{FacilityError, RecordError};
use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Addressing a floor or room failed
    #[error("Facility error: {0}")]
    FacilityError(#[from] FacilityError),

    /// Building record could not be read or written
    #[error("Building record error: {0}")]
    RecordError(#[from] RecordError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::FacilityError(_) => "Facility",
            SimulationError::RecordError(_) => "Building Record",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
