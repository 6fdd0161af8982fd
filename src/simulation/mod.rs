//! Simulation orchestration and control
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: Builds the building and drives ticks, fires and markers
//! - **ReadingSource**: Where sensors get their readings (random, fixed, scripted)
//! - **actuation**: The per-room policy turning triggered sensors into device actions and events
//! - **SimulationStatistics**: Collects and reports run metrics
//! - **SimulationError**: Error handling for simulation operations
//! - **LoggingConfig**: Diagnostic tracing setup
//!
//! # Usage Example
//!
//! ```rust
//! use building_security_simulator::events::MemoryEventSink;
//! use building_security_simulator::simulation::*;
//! use building_security_simulator::types::*;
//!
//! let config = SimulationConfig { floors: 2, ticks: 3, seed: Some(7), ..Default::default() };
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//!
//! let mut source = RandomReadingSource::with_seed(7);
//! let mut sink = MemoryEventSink::new();
//! let stats = orchestrator.run_session(&mut source, &mut sink).unwrap();
//! assert_eq!(stats.ticks_run, 3);
//! ```

pub mod actuation;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod reading_source;
pub mod statistics;

// Re-export all public types for convenience
pub use actuation::ActuationReport;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use reading_source::*;
pub use statistics::*;
