//! Core types and identifiers for the building security simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! - **Identifiers**: UUID-based unique identifiers for buildings, rooms, sensors and devices
//! - **Enums**: Sensor and device kinds, temperature bands, fire severity, log formats
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use building_security_simulator::types::*;
//!
//! let sensor_id = SensorId::new();
//! assert!(sensor_id.to_string().starts_with("SNS_"));
//!
//! let config = SimulationConfig {
//!     floors: 2,
//!     ticks: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::*;
pub use enums::*;
pub use identifiers::*;
