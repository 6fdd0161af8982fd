//! Random building generation
//!
//! Builds floors of randomly sized rooms and provisions each room with the
//! standard equipment. The last room of a floor with more than two rooms is a
//! corridor.

use crate::facility::building::Building;
use crate::facility::context::FacilityContext;
use crate::facility::floor::Floor;
use crate::facility::room::{Room, RoomGeometry};
use crate::types::{SensorThresholds, SimulationConfig};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// Base ceiling height; floor `n` is `BASE_FLOOR_HEIGHT + n` metres tall
pub const BASE_FLOOR_HEIGHT: f64 = 3.0;

/// Generator for buildings with provisioned rooms
pub struct BuildingGenerator {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for BuildingGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildingGenerator").finish()
    }
}

impl BuildingGenerator {
    /// Create a new building generator
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()) }
    }

    /// Create a new building generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)) }
    }

    /// Seeded when a seed is given, otherwise from the thread RNG
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate a building as described by `config`
    pub fn generate_building(
        &mut self,
        config: &SimulationConfig,
        context: &mut FacilityContext,
    ) -> Building {
        let thresholds = config.sensor_thresholds();
        let mut building = Building::new(config.building_name.clone(), config.floors);
        building.area = config.building_area;

        for number in 1..=config.floors {
            let floor = self.generate_floor(number, config, &thresholds);
            building.add_floor(floor);
        }

        context.register_building(&building);
        info!(
            building = %building.name,
            floors = building.floors().len(),
            rooms = building.room_count(),
            sensors = building.sensor_count(),
            devices = building.device_count(),
            "Building generated"
        );
        building
    }

    /// Generate one floor with its rooms
    pub fn generate_floor(
        &mut self,
        number: usize,
        config: &SimulationConfig,
        thresholds: &SensorThresholds,
    ) -> Floor {
        let (min_rooms, max_rooms) = config.rooms_per_floor();
        let room_count = self.rng.gen_range(min_rooms..=max_rooms);
        let mut floor = Floor::new(number, BASE_FLOOR_HEIGHT + number as f64);

        for r in 1..=room_count {
            let is_corridor = r == room_count && room_count > 2;
            let geometry = self.generate_geometry(config, is_corridor);
            let mut room = Room::new(format!("R_{}_{}", number, r), geometry);
            room.auto_install_equipment(thresholds);
            debug!(floor = number, room = %room.name, area = room.area(), corridor = is_corridor, "Room generated");
            floor.add_room(room);
        }

        floor
    }

    /// Random room geometry within the configured bounds
    pub fn generate_geometry(&mut self, config: &SimulationConfig, is_corridor: bool) -> RoomGeometry {
        let dimension = config.min_room_dimension..=config.max_room_dimension;
        RoomGeometry {
            width: self.rng.gen_range(dimension.clone()) as f64,
            length: self.rng.gen_range(dimension) as f64,
            windows: self.rng.gen_range(0..=config.max_windows),
            doors: self.rng.gen_range(1..=config.max_doors.max(1)),
            volume_usage: self.rng.gen_range(0..100u32) as f64,
            is_corridor,
        }
    }
}

impl Default for BuildingGenerator {
    fn default() -> Self {
        Self::new()
    }
}
