//! Rooms and their equipment
//!
//! A room owns its sensors and devices in insertion order, which is also the
//! order the actuation policy scans them in.

use crate::equipment::{Device, Sensor};
use crate::events::{EventSink, EventSite};
use crate::facility::provisioning::EquipmentPlan;
use crate::simulation::actuation::{self, ActuationReport};
use crate::simulation::reading_source::ReadingSource;
use crate::types::{DeviceId, DeviceType, RoomId, SensorId, SensorThresholds};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Physical layout of a room
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomGeometry {
    /// Width in metres
    pub width: f64,
    /// Length in metres
    pub length: f64,
    /// Number of windows
    pub windows: u32,
    /// Number of doors
    pub doors: u32,
    /// How much of the room volume is in use, 0-99
    pub volume_usage: f64,
    /// Corridors get door-paired cameras
    pub is_corridor: bool,
}

impl RoomGeometry {
    /// Plain rectangle with no doors or windows
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length, ..Default::default() }
    }

    /// Set the door count
    pub fn with_doors(mut self, doors: u32) -> Self {
        self.doors = doors;
        self
    }

    /// Set the window count
    pub fn with_windows(mut self, windows: u32) -> Self {
        self.windows = windows;
        self
    }

    /// Mark as corridor
    pub fn corridor(mut self) -> Self {
        self.is_corridor = true;
        self
    }

    /// Floor area in square metres
    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// A room with its sensors and devices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// Room name, used in event messages
    pub name: String,
    /// Physical layout
    pub geometry: RoomGeometry,
    sensors: Vec<Sensor>,
    devices: Vec<Device>,
}

impl Room {
    /// Create an empty room
    pub fn new(name: impl Into<String>, geometry: RoomGeometry) -> Self {
        Self {
            id: RoomId::new(),
            name: name.into(),
            geometry,
            sensors: Vec::new(),
            devices: Vec::new(),
        }
    }

    /// Append a sensor
    pub fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.push(sensor);
    }

    /// Remove a sensor by id, keeping the order of the rest
    pub fn remove_sensor(&mut self, sensor_id: SensorId) -> Option<Sensor> {
        let pos = self.sensors.iter().position(|s| s.id == sensor_id)?;
        Some(self.sensors.remove(pos))
    }

    /// Append a device
    pub fn add_device(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Remove a device by id, keeping the order of the rest
    pub fn remove_device(&mut self, device_id: DeviceId) -> Option<Device> {
        let pos = self.devices.iter().position(|d| d.id == device_id)?;
        Some(self.devices.remove(pos))
    }

    /// Sensors in scan order
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Devices in insertion order
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Find a sensor by name
    pub fn sensor(&self, name: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.name == name)
    }

    /// First device of the given kind
    pub fn find_device(&self, device_type: DeviceType) -> Option<&Device> {
        self.devices.iter().find(|d| d.is(device_type))
    }

    /// First device of the given kind, mutably
    pub fn find_device_mut(&mut self, device_type: DeviceType) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.is(device_type))
    }

    /// Floor area in square metres
    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    /// Order two rooms by area
    pub fn compare_area(&self, other: &Room) -> Ordering {
        self.area().total_cmp(&other.area())
    }

    /// A new, unequipped room spanning both rooms side by side
    ///
    /// Widths add up, the longer length wins, names are joined with `_`.
    pub fn merged_with(&self, other: &Room) -> Room {
        let geometry = RoomGeometry {
            width: self.geometry.width + other.geometry.width,
            length: self.geometry.length.max(other.geometry.length),
            windows: self.geometry.windows + other.geometry.windows,
            doors: self.geometry.doors + other.geometry.doors,
            volume_usage: 0.0,
            is_corridor: false,
        };
        Room::new(format!("{}_{}", self.name, other.name), geometry)
    }

    /// Acquire and evaluate a reading for every sensor
    ///
    /// Returns the number of triggered sensors.
    pub fn check_all_sensors(&mut self, source: &mut dyn ReadingSource) -> usize {
        let mut triggered = 0;
        for sensor in &mut self.sensors {
            if sensor.check(&self.name, source) {
                triggered += 1;
            }
        }
        triggered
    }

    /// One simulation step: check all sensors, then run the actuation policy
    pub fn simulate(
        &mut self,
        building: &str,
        floor: usize,
        source: &mut dyn ReadingSource,
        sink: &mut dyn EventSink,
    ) -> ActuationReport {
        self.check_all_sensors(source);
        let site = EventSite::new(building, floor, self.name.clone());
        actuation::apply(&self.sensors, &mut self.devices, &site, sink)
    }

    /// Force every temperature sensor to report `value`
    ///
    /// Returns the number of sensors affected.
    pub fn force_temperature(&mut self, value: f64) -> usize {
        let mut forced = 0;
        for sensor in &mut self.sensors {
            if sensor.force_temperature(value) {
                forced += 1;
            }
        }
        forced
    }

    /// Return every temperature sensor to its reading source
    pub fn clear_forced_temperatures(&mut self) {
        for sensor in &mut self.sensors {
            sensor.clear_forced_reading();
        }
    }

    /// Install the standard equipment for this room's geometry
    pub fn auto_install_equipment(&mut self, thresholds: &SensorThresholds) -> EquipmentPlan {
        let plan = EquipmentPlan::for_geometry(&self.geometry);
        plan.install(self, thresholds);
        plan
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.geometry;
        writeln!(
            f,
            "Room '{}' => Width={}, Length={}, Windows={}, Doors={}, Corridor={}",
            self.name, g.width, g.length, g.windows, g.doors, g.is_corridor
        )?;
        writeln!(f, " Sensors:")?;
        for sensor in &self.sensors {
            writeln!(f, "  {}", sensor)?;
        }
        writeln!(f, " Devices:")?;
        for device in &self.devices {
            writeln!(f, "  {}", device)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::Actuator;
    use crate::events::{MemoryEventSink, SecurityEventKind};
    use crate::simulation::reading_source::FixedReadingSource;

    fn office() -> Room {
        Room::new("R_1_1", RoomGeometry::new(4.0, 5.0).with_doors(1))
    }

    #[test]
    fn test_add_and_remove_keep_order() {
        let mut room = office();
        let a = Sensor::movement("a");
        let b = Sensor::movement("b");
        let c = Sensor::movement("c");
        let b_id = b.id;
        room.add_sensor(a);
        room.add_sensor(b);
        room.add_sensor(c);

        let removed = room.remove_sensor(b_id).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<&str> = room.sensors().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(room.remove_sensor(b_id).is_none());

        let lamp = Device::lamp("lamp");
        let lamp_id = lamp.id;
        room.add_device(lamp);
        assert!(room.remove_device(lamp_id).is_some());
        assert!(room.devices().is_empty());
    }

    #[test]
    fn test_find_device_returns_first_of_kind() {
        let mut room = office();
        room.add_device(Device::vent("vent"));
        room.add_device(Device::lamp("lamp_1"));
        room.add_device(Device::lamp("lamp_2"));

        assert_eq!(room.find_device(DeviceType::Lamp).unwrap().name, "lamp_1");
        assert!(room.find_device(DeviceType::Camera).is_none());

        room.find_device_mut(DeviceType::Lamp).unwrap().activate();
        assert!(room.devices()[1].is_enabled());
        assert!(!room.devices()[2].is_enabled());
    }

    #[test]
    fn test_area_comparison_and_merge() {
        let small = Room::new("A", RoomGeometry::new(3.0, 3.0).with_doors(1));
        let large = Room::new("B", RoomGeometry::new(4.0, 6.0).with_windows(2));

        assert_eq!(small.compare_area(&large), Ordering::Less);
        assert_eq!(large.compare_area(&small), Ordering::Greater);
        assert_eq!(small.compare_area(&small.clone()), Ordering::Equal);

        let merged = small.merged_with(&large);
        assert_eq!(merged.name, "A_B");
        assert_eq!(merged.geometry.width, 7.0);
        assert_eq!(merged.geometry.length, 6.0);
        assert_eq!(merged.area(), 42.0);
        assert!(merged.sensors().is_empty());
    }

    #[test]
    fn test_simulate_with_quiet_readings() {
        let mut room = office();
        room.add_sensor(Sensor::temperature_banded("t", 30.0, 60.0));
        room.add_sensor(Sensor::movement("m"));
        room.add_device(Device::lamp("lamp"));
        let mut sink = MemoryEventSink::new();

        let report = room.simulate("HQ", 1, &mut FixedReadingSource::quiet(), &mut sink);

        assert_eq!(report.sensors_triggered, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_forced_temperature_overrides_source() {
        let mut room = office();
        room.add_sensor(Sensor::temperature_banded("t", 30.0, 60.0));
        room.add_sensor(Sensor::light("l", 50.0));
        room.add_device(Device::vent("vent"));

        assert_eq!(room.force_temperature(65.0), 1);
        let mut sink = MemoryEventSink::new();
        room.simulate("HQ", 2, &mut FixedReadingSource::quiet(), &mut sink);

        assert_eq!(
            sink.kinds(),
            vec![SecurityEventKind::CriticalHeatDetected, SecurityEventKind::WaterFlowStarted]
        );
        assert!(sink.messages()[0].contains("Floor #2, Room 'R_1_1'"));

        room.clear_forced_temperatures();
        sink.clear();
        room.simulate("HQ", 2, &mut FixedReadingSource::quiet(), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_force_temperature_counts_temperature_sensors() {
        let mut room = office();
        room.add_sensor(Sensor::temperature("t1", 30.0));
        room.add_sensor(Sensor::movement("m"));
        room.add_sensor(Sensor::temperature_banded("t2", 30.0, 60.0));

        assert_eq!(room.force_temperature(35.0), 2);
        assert_eq!(room.check_all_sensors(&mut FixedReadingSource::quiet()), 2);
    }

    #[test]
    fn test_check_all_sensors_counts_triggers() {
        let mut room = office();
        room.add_sensor(Sensor::light("l", 50.0));
        room.add_sensor(Sensor::movement("m"));
        room.add_sensor(Sensor::temperature("t", 30.0));

        let triggered = room.check_all_sensors(&mut FixedReadingSource::new(10.0, 70.0, true));
        assert_eq!(triggered, 2);
        assert!(room.sensor("l").unwrap().is_triggered());
        assert!(!room.sensor("t").unwrap().is_triggered());
    }

    #[test]
    fn test_display_lists_equipment() {
        let mut room = office();
        room.add_sensor(Sensor::movement("m"));
        room.add_device(Device::camera("cam"));

        let text = room.to_string();
        assert!(text.starts_with("Room 'R_1_1' => Width=4, Length=5, Windows=0, Doors=1, Corridor=false"));
        assert!(text.contains("  Sensor: m, Triggered: false"));
        assert!(text.contains("  Device: cam, Enabled: false"));
    }
}
