//! Tests for equipment auto-provisioning

use building_security_simulator::facility::{EquipmentPlan, Room, RoomGeometry};
use building_security_simulator::types::{DeviceType, SensorThresholds, SensorType};

fn sensors_of(room: &Room, sensor_type: SensorType) -> usize {
    room.sensors().iter().filter(|s| s.sensor_type() == sensor_type).count()
}

fn devices_of(room: &Room, device_type: DeviceType) -> usize {
    room.devices().iter().filter(|d| d.is(device_type)).count()
}

/// A 6x6 office gets 4 temperature sensors, 9 vents and 3 cameras
#[test]
fn test_area_36_office() {
    for doors in [1, 2, 3] {
        let mut room = Room::new("Office", RoomGeometry::new(6.0, 6.0).with_doors(doors));
        room.auto_install_equipment(&SensorThresholds::default());

        assert_eq!(sensors_of(&room, SensorType::Temperature), 4);
        assert_eq!(devices_of(&room, DeviceType::Vent), 9);
        assert_eq!(devices_of(&room, DeviceType::Camera), 3);
        assert_eq!(sensors_of(&room, SensorType::Light), 3);
        assert_eq!(sensors_of(&room, SensorType::Movement), doors as usize);
        assert_eq!(devices_of(&room, DeviceType::Lamp), 0);
    }
}

/// More doors than area-based cameras raises the camera count
#[test]
fn test_doors_win_over_area() {
    let plan = EquipmentPlan::for_geometry(&RoomGeometry::new(6.0, 6.0).with_doors(5));
    assert_eq!(plan.cameras, 5);
    assert_eq!(plan.movement_sensors, 5);
}

/// Corridors pair one camera, light sensor and movement sensor with each door
#[test]
fn test_corridor_provisioning() {
    let mut room = Room::new("R_2_3", RoomGeometry::new(6.0, 6.0).with_doors(1).corridor());
    room.auto_install_equipment(&SensorThresholds::default());

    assert_eq!(sensors_of(&room, SensorType::Temperature), 4);
    assert_eq!(devices_of(&room, DeviceType::Vent), 9);
    assert_eq!(devices_of(&room, DeviceType::Camera), 1);
    assert_eq!(sensors_of(&room, SensorType::Light), 1);
    assert_eq!(sensors_of(&room, SensorType::Movement), 1);

    assert!(room.sensor("Corr_Temp_4").is_some());
    assert!(room.sensor("Corr_LightSensor_Door_1").is_some());
    assert!(room.sensor("Corr_MoveSensor_Door_1").is_some());
    assert_eq!(room.find_device(DeviceType::Camera).unwrap().name, "Corr_Camera_Door_1");
    assert_eq!(room.find_device(DeviceType::Vent).unwrap().name, "Corr_Vent_1");
}

/// Installed temperature sensors carry both thresholds
#[test]
fn test_installed_sensor_thresholds() {
    let mut room = Room::new("Office", RoomGeometry::new(3.0, 3.0).with_doors(1));
    room.auto_install_equipment(&SensorThresholds::default());

    let sensor = room.sensor("TempSensor_1").unwrap();
    assert_eq!(sensor.describe(), "TemperatureSensor: TempSensor_1, T1=30, T2=60");
}
