//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator and main simulation control logic.

use crate::events::{EventSink, SecurityEvent};
use crate::facility::{Building, BuildingGenerator, BuildingRecord, BuildingTickReport, FacilityContext};
use crate::sim_event;
use crate::simulation::reading_source::ReadingSource;
use crate::simulation::{SimulationResult, SimulationStatistics};
use crate::types::{defaults, FireConfig, FireSeverity, SimulationConfig};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Marker written before the random ticks
pub const RANDOM_FIRE_MARKER: &str = "=== RANDOM FIRE GENERATION ===";
/// Marker written before the tick that follows a user specified fire
pub const USER_FIRE_MARKER: &str = "=== USER SPECIFIED FIRE GENERATION ===";

/// Coordinates the building, the statistics and the simulation flow
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// The simulated building
    building: Building,
    /// Creation bookkeeping for generated facilities
    context: FacilityContext,
    /// Run statistics
    statistics: SimulationStatistics,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator
    ///
    /// Validates the configuration, applies a building record if one is
    /// configured, and generates the building.
    #[instrument(skip(config), fields(floors = config.floors, ticks = config.ticks))]
    pub fn new(mut config: SimulationConfig) -> SimulationResult<Self> {
        Self::load_building_record(&mut config)?;
        config.validate()?;

        if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
        } else {
            debug!("Using entropy-based random seed");
        }

        let mut context = FacilityContext::new();
        let building =
            BuildingGenerator::from_optional_seed(config.seed).generate_building(&config, &mut context);

        Ok(Self::assemble(config, building, context))
    }

    /// Take name, floor count and area from the configured building record
    ///
    /// Does nothing when no record is configured.
    pub fn load_building_record(config: &mut SimulationConfig) -> SimulationResult<()> {
        if let Some(path) = &config.building_record {
            let record = BuildingRecord::read_from_file(path)?;
            info!(path = %path, name = %record.name, floors = record.floors, "Building record loaded");
            config.building_name = record.name;
            config.floors = record.floors;
            config.building_area = record.area;
        }
        Ok(())
    }

    /// Create an orchestrator around an already built building
    pub fn with_building(config: SimulationConfig, building: Building) -> Self {
        let mut context = FacilityContext::new();
        context.register_building(&building);
        Self::assemble(config, building, context)
    }

    fn assemble(config: SimulationConfig, building: Building, context: FacilityContext) -> Self {
        let statistics = SimulationStatistics::new(&building);
        info!(
            "Orchestrator initialized with {} floors, {} rooms, {} sensors, {} devices",
            statistics.total_floors,
            statistics.total_rooms,
            statistics.total_sensors,
            statistics.total_devices
        );
        Self { config, building, context, statistics }
    }

    /// The configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The simulated building
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// The simulated building, mutably
    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }

    /// Facility creation counts
    pub fn context(&self) -> &FacilityContext {
        &self.context
    }

    /// Get the run statistics
    pub fn get_statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Get a mutable reference to the statistics
    pub fn get_statistics_mut(&mut self) -> &mut SimulationStatistics {
        &mut self.statistics
    }

    /// One pass over every room
    pub fn run_tick(
        &mut self,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> BuildingTickReport {
        let report = self.building.simulate_all_rooms(source, sink);
        self.statistics.record_tick(&report);
        sim_event!(
            debug,
            "Tick complete",
            tick = self.statistics.ticks_run,
            triggered = report.actuation.sensors_triggered,
            events = report.actuation.event_count(),
        );
        report
    }

    /// Run `ticks` passes
    pub fn run(
        &mut self,
        ticks: usize,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> BuildingTickReport {
        let mut total = BuildingTickReport::default();
        for _ in 0..ticks {
            let report = self.run_tick(source, sink);
            total.rooms_simulated += report.rooms_simulated;
            total.actuation.absorb(report.actuation);
        }
        total
    }

    /// Write a section marker to the security log
    pub fn mark(&mut self, sink: &mut dyn EventSink, text: &str) {
        let event = SecurityEvent::marker(text);
        sink.log(&event);
        self.statistics.record_event(event.kind);
    }

    /// Force every temperature sensor to `value`
    pub fn reset_temperatures(&mut self, value: f64) -> usize {
        let forced = self.building.force_all_temperatures(value);
        debug!(value, sensors = forced, "Temperatures reset");
        forced
    }

    /// Start a fire in one room
    pub fn start_fire(
        &mut self,
        floor: usize,
        room: usize,
        severity: FireSeverity,
    ) -> SimulationResult<usize> {
        let forced = self.building.start_fire(floor, room, severity)?;
        self.statistics.record_fire();
        Ok(forced)
    }

    /// Reset temperatures, start the fire, mark the log and run one pass
    pub fn run_user_fire(
        &mut self,
        fire: &FireConfig,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> SimulationResult<BuildingTickReport> {
        self.reset_temperatures(defaults::RESET_TEMPERATURE);
        self.start_fire(fire.floor, fire.room, fire.severity)?;
        self.mark(sink, USER_FIRE_MARKER);
        Ok(self.run_tick(source, sink))
    }

    /// The full configured session
    ///
    /// Marks the log, runs the configured number of random ticks and then the
    /// user specified fire, if any.
    pub fn run_session(
        &mut self,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> SimulationResult<&SimulationStatistics> {
        let started = Instant::now();
        sim_event!(info, "Simulation started", building = self.building.name.as_str(), ticks = self.config.ticks);

        self.mark(sink, RANDOM_FIRE_MARKER);
        self.run(self.config.ticks, source, sink);

        if let Some(fire) = self.config.fire {
            self.run_user_fire(&fire, source, sink)?;
        }

        self.statistics.set_simulation_duration(started.elapsed());
        sim_event!(
            info,
            "Simulation finished",
            ticks = self.statistics.ticks_run,
            events = self.statistics.total_events(),
        );
        Ok(&self.statistics)
    }

    /// Save name, floor count and area of the building
    pub fn save_record<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        self.building.record().write_to_file(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Building record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{MemoryEventSink, SecurityEventKind};
    use crate::simulation::reading_source::FixedReadingSource;
    use crate::simulation::SimulationError;

    fn config() -> SimulationConfig {
        SimulationConfig { floors: 2, ticks: 3, seed: Some(42), ..Default::default() }
    }

    #[test]
    fn test_new_generates_building() {
        let orchestrator = SimulationOrchestrator::new(config()).unwrap();
        assert_eq!(orchestrator.building().floors().len(), 2);
        assert_eq!(orchestrator.context().building_count(), 1);
        assert_eq!(orchestrator.get_statistics().total_rooms, orchestrator.building().room_count());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = SimulationOrchestrator::new(SimulationConfig { floors: 0, ..config() });
        assert!(matches!(result, Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_quiet_session_only_writes_markers() {
        let mut orchestrator = SimulationOrchestrator::new(config()).unwrap();
        let mut sink = MemoryEventSink::new();

        let stats = orchestrator.run_session(&mut FixedReadingSource::quiet(), &mut sink).unwrap();

        assert_eq!(stats.ticks_run, 3);
        assert_eq!(sink.messages(), vec![RANDOM_FIRE_MARKER]);
    }

    #[test]
    fn test_session_with_user_fire() {
        let fire = FireConfig { floor: 1, room: 1, severity: FireSeverity::Severe };
        let mut orchestrator =
            SimulationOrchestrator::new(SimulationConfig { fire: Some(fire), ..config() }).unwrap();
        let mut sink = MemoryEventSink::new();

        let stats = orchestrator.run_session(&mut FixedReadingSource::quiet(), &mut sink).unwrap();

        assert_eq!(stats.ticks_run, 4);
        assert_eq!(stats.fires_started, 1);

        let sensors_on_fire = orchestrator
            .building()
            .room(1, 1)
            .unwrap()
            .sensors()
            .iter()
            .filter(|s| s.as_temperature().is_some())
            .count();
        let kinds = sink.kinds();
        let messages = sink.messages();
        assert_eq!(messages[0], RANDOM_FIRE_MARKER);
        assert_eq!(messages[1], USER_FIRE_MARKER);
        assert_eq!(kinds.len(), 2 + 2 * sensors_on_fire);
        for pair in kinds[2..].chunks(2) {
            assert_eq!(
                pair,
                &[SecurityEventKind::CriticalHeatDetected, SecurityEventKind::WaterFlowStarted]
            );
        }
        assert!(messages[2..].iter().all(|m| m.contains("Floor #1, Room 'R_1_1'")));
    }

    #[test]
    fn test_fire_outside_building_fails() {
        let mut orchestrator = SimulationOrchestrator::new(config()).unwrap();
        let result = orchestrator.start_fire(9, 1, FireSeverity::Mild);
        assert!(matches!(result, Err(SimulationError::FacilityError(_))));
        assert_eq!(orchestrator.get_statistics().fires_started, 0);
    }
}
