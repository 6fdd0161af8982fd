//! Equipment auto-provisioning
//!
//! Quantities follow from room area and door count:
//!
//! | Equipment            | Quantity                                  |
//! |----------------------|-------------------------------------------|
//! | Temperature sensors  | ceil(area / 9)                            |
//! | Vents                | ceil(area / 4)                            |
//! | Cameras              | max(ceil(area / 16), max(doors, 1))       |
//! | Light sensors        | one per camera                            |
//! | Movement sensors     | one per door                              |
//!
//! Corridors instead pair one camera, light sensor and movement sensor with
//! every door. No lamp is ever provisioned.

use crate::equipment::{Device, Sensor};
use crate::facility::room::{Room, RoomGeometry};
use crate::types::SensorThresholds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Square metres covered by one temperature sensor
pub const AREA_PER_TEMPERATURE_SENSOR: f64 = 9.0;
/// Square metres covered by one vent
pub const AREA_PER_VENT: f64 = 4.0;
/// Square metres covered by one camera
pub const AREA_PER_CAMERA: f64 = 16.0;

fn per_area(area: f64, coverage: f64) -> usize {
    if area > 0.0 {
        (area / coverage).ceil() as usize
    } else {
        0
    }
}

/// How much equipment a room gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPlan {
    /// Temperature sensors
    pub temperature_sensors: usize,
    /// Vents
    pub vents: usize,
    /// Cameras, each with its own light sensor
    pub cameras: usize,
    /// Movement sensors, one per door
    pub movement_sensors: usize,
    /// Whether corridor naming and door pairing apply
    pub corridor: bool,
}

impl EquipmentPlan {
    /// Work out the equipment for a geometry
    pub fn for_geometry(geometry: &RoomGeometry) -> Self {
        let area = geometry.area();
        let doors = geometry.doors as usize;
        let cameras = if geometry.is_corridor {
            doors
        } else {
            per_area(area, AREA_PER_CAMERA).max(doors.max(1))
        };

        Self {
            temperature_sensors: per_area(area, AREA_PER_TEMPERATURE_SENSOR),
            vents: per_area(area, AREA_PER_VENT),
            cameras,
            movement_sensors: doors,
            corridor: geometry.is_corridor,
        }
    }

    /// Total sensors the plan installs
    pub fn sensor_count(&self) -> usize {
        self.temperature_sensors + self.cameras + self.movement_sensors
    }

    /// Total devices the plan installs
    pub fn device_count(&self) -> usize {
        self.vents + self.cameras
    }

    /// Add the planned equipment to `room`
    pub fn install(&self, room: &mut Room, thresholds: &SensorThresholds) {
        let temperature = |name: String| match thresholds.temperature_high {
            Some(high) => Sensor::temperature_banded(name, thresholds.temperature, high),
            None => Sensor::temperature(name, thresholds.temperature),
        };

        if self.corridor {
            for i in 1..=self.temperature_sensors {
                room.add_sensor(temperature(format!("Corr_Temp_{}", i)));
            }
            for i in 1..=self.vents {
                room.add_device(Device::vent(format!("Corr_Vent_{}", i)));
            }
            for i in 1..=self.cameras {
                room.add_device(Device::camera(format!("Corr_Camera_Door_{}", i)));
                room.add_sensor(Sensor::light(format!("Corr_LightSensor_Door_{}", i), thresholds.light));
                room.add_sensor(Sensor::movement(format!("Corr_MoveSensor_Door_{}", i)));
            }
        } else {
            for i in 1..=self.temperature_sensors {
                room.add_sensor(temperature(format!("TempSensor_{}", i)));
            }
            for i in 1..=self.vents {
                room.add_device(Device::vent(format!("Vent_{}", i)));
            }
            for i in 1..=self.cameras {
                let camera = Device::camera(format!("Camera_{}", i));
                room.add_sensor(Sensor::light(format!("LightSensor_for_{}", camera.name), thresholds.light));
                room.add_device(camera);
            }
            for i in 1..=self.movement_sensors {
                room.add_sensor(Sensor::movement(format!("MoveSensor_door_{}", i)));
            }
        }

        debug!(
            room = %room.name,
            sensors = self.sensor_count(),
            devices = self.device_count(),
            corridor = self.corridor,
            "Equipment installed"
        );
    }
}
