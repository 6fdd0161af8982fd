//! Tests for building record persistence and its use as a configuration source

use building_security_simulator::facility::{Building, BuildingRecord, RecordError};
use building_security_simulator::simulation::{SimulationError, SimulationOrchestrator};
use building_security_simulator::types::SimulationConfig;
use std::fs;
use tempfile::TempDir;

/// A saved record reads back unchanged
#[test]
fn test_record_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("building_info.txt");

    let building = Building::new("Warehouse", 2).with_area(640.0);
    building.record().write_to_file(&path).unwrap();

    let loaded = BuildingRecord::read_from_file(&path).unwrap();
    assert_eq!(loaded.name, "Warehouse");
    assert_eq!(loaded.floors, 2);
    assert_eq!(loaded.area, Some(640.0));
}

/// A loaded record decides name, floor count and area of the generated building
#[test]
fn test_record_drives_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");
    fs::write(&path, "Tower\n4\n2000\n").unwrap();

    let config = SimulationConfig {
        building_record: Some(path.display().to_string()),
        seed: Some(5),
        ..Default::default()
    };
    let orchestrator = SimulationOrchestrator::new(config).unwrap();

    let building = orchestrator.building();
    assert_eq!(building.name, "Tower");
    assert_eq!(building.floors().len(), 4);
    assert_eq!(building.to_string(), "Building 'Tower' => Floors: 4, Area: 2000 m^2");
}

/// Invalid records are rejected before any building is generated
#[test]
fn test_invalid_record_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");
    fs::write(&path, "Tower\nmany\n").unwrap();

    let config =
        SimulationConfig { building_record: Some(path.display().to_string()), ..Default::default() };
    let result = SimulationOrchestrator::new(config);

    assert!(matches!(
        result,
        Err(SimulationError::RecordError(RecordError::InvalidFloors(_)))
    ));
}

/// A record with zero floors fails configuration validation
#[test]
fn test_zero_floor_record_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");
    fs::write(&path, "Shed\n0\n").unwrap();

    let config =
        SimulationConfig { building_record: Some(path.display().to_string()), ..Default::default() };
    assert!(matches!(
        SimulationOrchestrator::new(config),
        Err(SimulationError::ConfigurationError(_))
    ));
}

/// Saving through the orchestrator writes the building's record
#[test]
fn test_orchestrator_saves_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.txt");

    let config = SimulationConfig {
        building_name: "Annex".to_string(),
        floors: 1,
        seed: Some(1),
        ..Default::default()
    };
    let orchestrator = SimulationOrchestrator::new(config).unwrap();
    orchestrator.save_record(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Annex\n1\n");
}

/// Names that would not read back unchanged are refused on both ends
#[test]
fn test_unstorable_names_are_refused() {
    let dir = TempDir::new().unwrap();

    for (i, name) in ["", "  Padded  ", "Two\nLines"].into_iter().enumerate() {
        let config = SimulationConfig { building_name: name.to_string(), ..Default::default() };
        assert!(config.validate().is_err(), "{:?} passed validation", name);

        let path = dir.path().join(format!("record_{}.txt", i));
        let result = BuildingRecord::new(name, 2, None).write_to_file(&path);
        assert!(matches!(result, Err(RecordError::InvalidName(_))));
        assert!(!path.exists());
    }
}

/// Every name that passes validation survives a write and read
#[test]
fn test_valid_names_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");

    for name in ["Big Complex", "Tower-7", "Ünïcode Hall"] {
        let config = SimulationConfig { building_name: name.to_string(), ..Default::default() };
        assert!(config.validate().is_ok());

        BuildingRecord::new(name, 3, Some(12.5)).write_to_file(&path).unwrap();
        let loaded = BuildingRecord::read_from_file(&path).unwrap();
        assert_eq!(loaded, BuildingRecord::new(name, 3, Some(12.5)));
    }
}

/// A hand-built building with an unstorable name cannot be saved
#[test]
fn test_orchestrator_refuses_unstorable_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.txt");

    let orchestrator =
        SimulationOrchestrator::with_building(SimulationConfig::default(), Building::new(" Annex", 1));
    let result = orchestrator.save_record(&path);

    assert!(matches!(
        result,
        Err(SimulationError::RecordError(RecordError::InvalidName(_)))
    ));
}

/// The record is applied to the configuration before it is validated
#[test]
fn test_record_applies_before_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");
    fs::write(&path, "Depot\n6\n900\n").unwrap();

    let mut config = SimulationConfig {
        building_record: Some(path.display().to_string()),
        floors: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    SimulationOrchestrator::load_building_record(&mut config).unwrap();

    assert_eq!(config.building_name, "Depot");
    assert_eq!(config.floors, 6);
    assert_eq!(config.building_area, Some(900.0));
    assert!(config.validate().is_ok());
}

/// Without a record the configuration is left alone
#[test]
fn test_no_record_leaves_config_unchanged() {
    let mut config = SimulationConfig { building_name: "Kept".to_string(), ..Default::default() };
    SimulationOrchestrator::load_building_record(&mut config).unwrap();
    assert_eq!(config.building_name, "Kept");
    assert_eq!(config.floors, 3);
}
