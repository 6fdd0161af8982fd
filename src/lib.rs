//! Building Security Simulator
//!
//! Models a building of floors and rooms fitted with sensors (temperature,
//! light, movement) and devices (lamp, camera, vent), and simulates how each
//! room reacts when its sensors trigger.
//!
//! # Overview
//!
//! A simulation tick walks Building → Floor → Room. Every sensor in a room gets
//! a reading from a [`ReadingSource`](simulation::ReadingSource), compares it
//! against its thresholds, and the room's actuation policy then drives the
//! devices and writes security events to an
//! [`EventSink`](events::EventSink).
//!
//! ## Key Features
//!
//! - **Two-band temperature response**: Lamp and camera snapshot above T1, lamp off and water on above T2
//! - **Movement and light response**: Brief lamp or camera activation when the device is idle
//! - **Equipment auto-provisioning**: Sensor and device counts derived from room area and doors
//! - **Fire injection**: Force a chosen room's temperature sensors to a mild or severe reading
//! - **Deterministic runs**: Seedable layout generation and readings, scripted sources for tests
//! - **Append-only security log**: Text or JSON lines; write failures never stop the simulation
//!
//! ## Quick Start
//!
//! ```rust
//! use building_security_simulator::*;
//! use building_security_simulator::events::MemoryEventSink;
//! use building_security_simulator::simulation::FixedReadingSource;
//!
//! let config = SimulationConfig { floors: 2, seed: Some(1), ..Default::default() };
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//!
//! orchestrator.start_fire(1, 1, FireSeverity::Severe)?;
//! let mut sink = MemoryEventSink::new();
//! let report = orchestrator.run_tick(&mut FixedReadingSource::quiet(), &mut sink);
//!
//! assert!(report.actuation.critical_heat_responses > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`equipment`]: Sensors, devices and their capability traits
//! - [`facility`]: Rooms, floors, buildings, provisioning and generation
//! - [`events`]: Security events and sinks
//! - [`simulation`]: Reading sources, actuation policy, orchestration and statistics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Equipment  │    │   Events    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Sensors     │    │ SecurityEvt │
//! │ Enums       │    │ Devices     │    │ EventSink   │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Facility   │    │ Simulation  │    │ Simulation  │
//! │             │    │             │    │             │
//! │ Building    │◄───┤ Actuation   │◄───┤ Orchestrator│
//! │ Floor, Room │    │ Reading Src │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod equipment;
pub mod events;
pub mod facility;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    BuildingId,
    ConfigValidationError,
    // Enums
    DeviceType,
    // Identifiers
    DeviceId,
    FireConfig,
    FireSeverity,
    OutputFormat,
    RoomId,
    SensorId,
    SensorThresholds,
    SensorType,
    // Configuration
    SimulationConfig,
    TemperatureBand,
};

// Equipment
pub use equipment::{Actuator, Device, Reading, Sensor, SensorKind, TriggerRule};

// Facility types and functionality
pub use facility::{
    Building, BuildingGenerator, BuildingRecord, EquipmentPlan, FacilityContext, FacilityError,
    Floor, RecordError, Room, RoomCollection, RoomGeometry,
};

// Event types and functionality
pub use events::{EventSink, EventSite, FileEventSink, SecurityEvent, SecurityEventKind};

// Simulation types and functionality
pub use simulation::{
    ReadingSource, SimulationError, SimulationOrchestrator, SimulationResult, SimulationStatistics,
};
