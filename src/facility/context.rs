//! Facility creation bookkeeping

use crate::facility::building::Building;
use serde::Serialize;

/// Counts what has been created through it
///
/// Owned by whoever builds facilities; there is no process-wide counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FacilityContext {
    buildings: usize,
    rooms: usize,
    sensors: usize,
    devices: usize,
}

impl FacilityContext {
    /// Start counting from zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a building and everything in it
    pub fn register_building(&mut self, building: &Building) {
        self.buildings += 1;
        self.rooms += building.room_count();
        self.sensors += building.sensor_count();
        self.devices += building.device_count();
    }

    /// Buildings created
    pub fn building_count(&self) -> usize {
        self.buildings
    }

    /// Rooms created
    pub fn room_count(&self) -> usize {
        self.rooms
    }

    /// Sensors installed
    pub fn sensor_count(&self) -> usize {
        self.sensors
    }

    /// Devices installed
    pub fn device_count(&self) -> usize {
        self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::Sensor;
    use crate::facility::{Floor, Room, RoomGeometry};

    #[test]
    fn test_counts_accumulate_per_context() {
        let mut building = Building::new("HQ", 1);
        let mut floor = Floor::new(1, 4.0);
        let mut room = Room::new("R_1_1", RoomGeometry::new(3.0, 3.0));
        room.add_sensor(Sensor::movement("m"));
        floor.add_room(room);
        building.add_floor(floor);

        let mut context = FacilityContext::new();
        context.register_building(&building);
        context.register_building(&Building::new("Shed", 0));

        assert_eq!(context.building_count(), 2);
        assert_eq!(context.room_count(), 1);
        assert_eq!(context.sensor_count(), 1);
        assert_eq!(context.device_count(), 0);

        assert_eq!(FacilityContext::new().building_count(), 0);
    }
}
