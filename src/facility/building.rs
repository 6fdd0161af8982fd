//! Buildings and whole-building operations
//!
//! A building owns its floors, floors own their rooms. Simulation visits them
//! depth-first in insertion order.

use crate::events::EventSink;
use crate::facility::floor::Floor;
use crate::facility::record::BuildingRecord;
use crate::facility::room::Room;
use crate::simulation::actuation::ActuationReport;
use crate::simulation::reading_source::ReadingSource;
use crate::types::{BuildingId, FireSeverity};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Errors addressing parts of a building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacilityError {
    /// Floor number outside 1..=floors
    #[error("Floor #{floor} does not exist (building has {floors} floors)")]
    FloorOutOfRange {
        /// Requested floor
        floor: usize,
        /// Floors present
        floors: usize,
    },

    /// Room number outside 1..=rooms on that floor
    #[error("Room #{room} does not exist on floor #{floor} (floor has {rooms} rooms)")]
    RoomOutOfRange {
        /// Floor searched
        floor: usize,
        /// Requested room
        room: usize,
        /// Rooms present on the floor
        rooms: usize,
    },
}

/// Result of one pass over every room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingTickReport {
    /// Rooms visited
    pub rooms_simulated: usize,
    /// Combined actuation results
    pub actuation: ActuationReport,
}

/// A multi-floor building
#[derive(Debug, Clone)]
pub struct Building {
    /// Unique identifier for the building
    pub id: BuildingId,
    /// Building name, used in event messages
    pub name: String,
    /// Declared number of floors
    pub floors_count: usize,
    /// Area in square metres, if known
    pub area: Option<f64>,
    floors: Vec<Floor>,
}

impl Building {
    /// Create a building with no floors attached yet
    pub fn new(name: impl Into<String>, floors_count: usize) -> Self {
        Self { id: BuildingId::new(), name: name.into(), floors_count, area: None, floors: Vec::new() }
    }

    /// Set the area
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Attach a floor
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.push(floor);
        self.floors_count = self.floors_count.max(self.floors.len());
    }

    /// Floors in order
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Floor by 1-based number
    pub fn floor(&self, number: usize) -> Option<&Floor> {
        number.checked_sub(1).and_then(|i| self.floors.get(i))
    }

    /// Floor by 1-based number, mutably
    pub fn floor_mut(&mut self, number: usize) -> Option<&mut Floor> {
        number.checked_sub(1).and_then(|i| self.floors.get_mut(i))
    }

    /// Room by 1-based floor and room numbers
    pub fn room(&self, floor: usize, room: usize) -> Result<&Room, FacilityError> {
        let floors = self.floors.len();
        let target = self.floor(floor).ok_or(FacilityError::FloorOutOfRange { floor, floors })?;
        let rooms = target.room_count();
        target.room(room).ok_or(FacilityError::RoomOutOfRange { floor, room, rooms })
    }

    /// Room by 1-based floor and room numbers, mutably
    pub fn room_mut(&mut self, floor: usize, room: usize) -> Result<&mut Room, FacilityError> {
        let floors = self.floors.len();
        let target =
            self.floor_mut(floor).ok_or(FacilityError::FloorOutOfRange { floor, floors })?;
        let rooms = target.room_count();
        target.room_mut(room).ok_or(FacilityError::RoomOutOfRange { floor, room, rooms })
    }

    /// Iterate over every room, floor by floor
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.floors.iter().flat_map(|f| f.rooms().iter())
    }

    /// Total rooms
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(Floor::room_count).sum()
    }

    /// Total sensors
    pub fn sensor_count(&self) -> usize {
        self.rooms().map(|r| r.sensors().len()).sum()
    }

    /// Total devices
    pub fn device_count(&self) -> usize {
        self.rooms().map(|r| r.devices().len()).sum()
    }

    /// Simulate every room once, depth-first
    pub fn simulate_all_rooms(
        &mut self,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> BuildingTickReport {
        let mut report = BuildingTickReport::default();
        for floor in &mut self.floors {
            let number = floor.number;
            for room in floor.rooms_mut().iter_mut() {
                let room_report = room.simulate(&self.name, number, source, sink);
                report.rooms_simulated += 1;
                report.actuation.absorb(room_report);
            }
        }
        debug!(
            building = %self.name,
            rooms = report.rooms_simulated,
            events = report.actuation.event_count(),
            "Building pass complete"
        );
        report
    }

    /// Force the temperature sensors of one room to a fire reading
    ///
    /// Returns the number of sensors forced.
    pub fn start_fire(
        &mut self,
        floor: usize,
        room: usize,
        severity: FireSeverity,
    ) -> Result<usize, FacilityError> {
        let building = self.name.clone();
        let target = self.room_mut(floor, room)?;
        let forced = target.force_temperature(severity.forced_temperature());
        info!(
            building = %building,
            floor = floor,
            room = %target.name,
            severity = %severity,
            sensors = forced,
            "Fire started"
        );
        Ok(forced)
    }

    /// Force every temperature sensor in the building to `value`
    pub fn force_all_temperatures(&mut self, value: f64) -> usize {
        self.floors
            .iter_mut()
            .flat_map(|f| f.rooms_mut().iter_mut())
            .map(|r| r.force_temperature(value))
            .sum()
    }

    /// Return every temperature sensor to its reading source
    pub fn clear_all_forced_temperatures(&mut self) {
        for room in self.floors.iter_mut().flat_map(|f| f.rooms_mut().iter_mut()) {
            room.clear_forced_temperatures();
        }
    }

    /// Snapshot of name, floor count and area
    pub fn record(&self) -> BuildingRecord {
        BuildingRecord::new(self.name.clone(), self.floors_count, self.area)
    }

    /// Take name, floor count and area from a record
    pub fn apply_record(&mut self, record: &BuildingRecord) {
        self.name = record.name.clone();
        self.floors_count = record.floors;
        self.area = record.area;
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Building '{}' => Floors: {}, Area: {} m^2",
            self.name,
            self.floors_count,
            self.area.unwrap_or(0.0)
        )
    }
}
