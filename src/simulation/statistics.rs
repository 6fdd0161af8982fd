//! Statistics collection and reporting
//!
//! This module contains statistics collection and reporting functionality.

use crate::events::SecurityEventKind;
use crate::facility::{Building, BuildingTickReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Counters for one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStatistics {
    // Infrastructure stats
    /// Floors in the building
    pub total_floors: usize,
    /// Rooms in the building
    pub total_rooms: usize,
    /// Sensors installed
    pub total_sensors: usize,
    /// Devices installed
    pub total_devices: usize,

    // Run stats
    /// Building passes completed
    pub ticks_run: usize,
    /// Room simulations performed across all ticks
    pub rooms_simulated: usize,
    /// Triggered sensors seen by the actuation policy
    pub sensors_triggered: usize,
    /// Lower temperature band responses
    pub heat_responses: usize,
    /// Upper temperature band responses
    pub critical_heat_responses: usize,
    /// Movement responses that switched a lamp
    pub movement_responses: usize,
    /// Light responses that took a snapshot
    pub light_responses: usize,
    /// Fires injected
    pub fires_started: usize,
    /// Security log lines that could not be written
    pub sink_write_failures: usize,
    events_by_kind: HashMap<SecurityEventKind, usize>,

    // Simulation metadata
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the run
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Fresh statistics for `building`
    pub fn new(building: &Building) -> Self {
        Self {
            total_floors: building.floors().len(),
            total_rooms: building.room_count(),
            total_sensors: building.sensor_count(),
            total_devices: building.device_count(),
            ticks_run: 0,
            rooms_simulated: 0,
            sensors_triggered: 0,
            heat_responses: 0,
            critical_heat_responses: 0,
            movement_responses: 0,
            light_responses: 0,
            fires_started: 0,
            sink_write_failures: 0,
            events_by_kind: HashMap::new(),
            started_at: Utc::now(),
            simulation_duration: Duration::ZERO,
        }
    }

    /// Fold in the result of one building pass
    pub fn record_tick(&mut self, report: &BuildingTickReport) {
        let actuation = &report.actuation;
        self.ticks_run += 1;
        self.rooms_simulated += report.rooms_simulated;
        self.sensors_triggered += actuation.sensors_triggered;
        self.heat_responses += actuation.heat_responses;
        self.critical_heat_responses += actuation.critical_heat_responses;
        self.movement_responses += actuation.movement_responses;
        self.light_responses += actuation.light_responses;
        for kind in &actuation.events {
            self.record_event(*kind);
        }
    }

    /// Count one emitted event
    pub fn record_event(&mut self, kind: SecurityEventKind) {
        *self.events_by_kind.entry(kind).or_insert(0) += 1;
    }

    /// Count an injected fire
    pub fn record_fire(&mut self) {
        self.fires_started += 1;
    }

    /// Set the number of lost security log lines
    pub fn set_sink_write_failures(&mut self, failures: usize) {
        self.sink_write_failures = failures;
    }

    /// Set the wall-clock duration
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Events of one kind
    pub fn event_count(&self, kind: SecurityEventKind) -> usize {
        self.events_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Events of all kinds
    pub fn total_events(&self) -> usize {
        self.events_by_kind.values().sum()
    }

    /// Average events per building pass
    pub fn average_events_per_tick(&self) -> f64 {
        if self.ticks_run > 0 {
            self.total_events() as f64 / self.ticks_run as f64
        } else {
            0.0
        }
    }

    /// Average triggered sensors per room simulation
    pub fn triggers_per_room(&self) -> f64 {
        if self.rooms_simulated > 0 {
            self.sensors_triggered as f64 / self.rooms_simulated as f64
        } else {
            0.0
        }
    }

    /// Generate a comprehensive summary report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");
        report.push_str(&format!(
            "Simulation Duration: {:.2} seconds\n",
            self.simulation_duration.as_secs_f64()
        ));
        report.push_str(&format!("Ticks Run: {}\n\n", self.ticks_run));

        report.push_str("Infrastructure Overview:\n");
        report.push_str(&format!("  - Floors: {}\n", self.total_floors));
        report.push_str(&format!("  - Rooms: {}\n", self.total_rooms));
        report.push_str(&format!("  - Sensors: {}\n", self.total_sensors));
        report.push_str(&format!("  - Devices: {}\n\n", self.total_devices));

        report.push_str("Responses:\n");
        report.push_str(&format!("  - Sensors Triggered: {}\n", self.sensors_triggered));
        report.push_str(&format!("  - Heat (T1): {}\n", self.heat_responses));
        report.push_str(&format!("  - Critical Heat (T2): {}\n", self.critical_heat_responses));
        report.push_str(&format!("  - Movement: {}\n", self.movement_responses));
        report.push_str(&format!("  - Light: {}\n", self.light_responses));
        report.push_str(&format!("  - Fires Started: {}\n\n", self.fires_started));

        report.push_str("Security Events:\n");
        report.push_str(&format!(
            "  - Total: {} (avg {:.1}/tick)\n",
            self.total_events(),
            self.average_events_per_tick()
        ));
        for kind in SecurityEventKind::ALL {
            let count = self.event_count(kind);
            if count > 0 {
                report.push_str(&format!("  - {}: {}\n", kind, count));
            }
        }
        if self.sink_write_failures > 0 {
            report.push_str(&format!("  - Lost (write failures): {}\n", self.sink_write_failures));
        }

        report
    }

    /// Single-line summary
    pub fn compact_summary(&self) -> String {
        format!(
            "Ticks: {}, Rooms: {}, Triggers: {}, Events: {}",
            self.ticks_run,
            self.total_rooms,
            self.sensors_triggered,
            self.total_events()
        )
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::actuation::ActuationReport;

    fn tick(events: Vec<SecurityEventKind>) -> BuildingTickReport {
        BuildingTickReport {
            rooms_simulated: 3,
            actuation: ActuationReport {
                sensors_triggered: 1,
                heat_responses: 1,
                events,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_record_ticks() {
        let mut stats = SimulationStatistics::new(&Building::new("HQ", 0));
        stats.record_tick(&tick(vec![
            SecurityEventKind::HeatDetected,
            SecurityEventKind::SnapshotTaken,
        ]));
        stats.record_tick(&tick(vec![SecurityEventKind::HeatDetected]));

        assert_eq!(stats.ticks_run, 2);
        assert_eq!(stats.rooms_simulated, 6);
        assert_eq!(stats.heat_responses, 2);
        assert_eq!(stats.event_count(SecurityEventKind::HeatDetected), 2);
        assert_eq!(stats.event_count(SecurityEventKind::LightSnapshot), 0);
        assert_eq!(stats.total_events(), 3);
        assert_eq!(stats.average_events_per_tick(), 1.5);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = SimulationStatistics::new(&Building::new("HQ", 0));
        assert_eq!(stats.average_events_per_tick(), 0.0);
        assert_eq!(stats.triggers_per_room(), 0.0);
        assert_eq!(stats.compact_summary(), "Ticks: 0, Rooms: 0, Triggers: 0, Events: 0");
    }

    #[test]
    fn test_summary_report_lists_nonzero_kinds() {
        let mut stats = SimulationStatistics::new(&Building::new("HQ", 0));
        stats.record_event(SecurityEventKind::WaterFlowStarted);
        stats.set_sink_write_failures(2);

        let report = stats.to_string();
        assert!(report.contains("Water Flow Started: 1"));
        assert!(!report.contains("Light Snapshot"));
        assert!(report.contains("Lost (write failures): 2"));
    }
}
