//! Enumeration types for the building security simulator
//!
//! This module contains the tag enums shared across the simulator: sensor and
//! device kinds, temperature bands, fire severities and event log formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of sensors that can be mounted in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    /// Two-band temperature sensor
    Temperature,
    /// Ambient light level sensor
    Light,
    /// Motion detector
    Movement,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorType::Temperature => write!(f, "Temperature"),
            SensorType::Light => write!(f, "Light"),
            SensorType::Movement => write!(f, "Movement"),
        }
    }
}

impl FromStr for SensorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" | "temp" => Ok(SensorType::Temperature),
            "light" => Ok(SensorType::Light),
            "movement" | "motion" => Ok(SensorType::Movement),
            _ => Err(format!("Unknown sensor type: {}", s)),
        }
    }
}

/// Kinds of actuated devices in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Room lighting
    Lamp,
    /// Security camera taking snapshots
    Camera,
    /// Ventilation and water outlet used on critical heat
    Vent,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::Lamp => write!(f, "Lamp"),
            DeviceType::Camera => write!(f, "Camera"),
            DeviceType::Vent => write!(f, "Vent"),
        }
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lamp" => Ok(DeviceType::Lamp),
            "camera" | "cam" => Ok(DeviceType::Camera),
            "vent" => Ok(DeviceType::Vent),
            _ => Err(format!("Unknown device type: {}", s)),
        }
    }
}

/// Band a temperature reading falls into relative to a sensor's thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    /// Below the lower threshold, nothing to do
    Normal,
    /// At or above T1 and below T2 (or no T2 configured)
    Low,
    /// At or above T2
    High,
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureBand::Normal => write!(f, "Normal"),
            TemperatureBand::Low => write!(f, "Low Band"),
            TemperatureBand::High => write!(f, "High Band"),
        }
    }
}

/// Severity of an injected fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireSeverity {
    /// Forces a reading just above the default T1
    Mild,
    /// Forces a reading above the default T2
    Severe,
}

impl FireSeverity {
    /// Temperature forced onto every temperature sensor of the burning room
    pub fn forced_temperature(&self) -> f64 {
        match self {
            FireSeverity::Mild => 35.0,
            FireSeverity::Severe => 65.0,
        }
    }
}

impl fmt::Display for FireSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireSeverity::Mild => write!(f, "mild"),
            FireSeverity::Severe => write!(f, "severe"),
        }
    }
}

impl FromStr for FireSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(FireSeverity::Mild),
            "severe" => Ok(FireSeverity::Severe),
            _ => Err(format!("Unknown fire severity: {}", s)),
        }
    }
}

/// Line format used by the security event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `[timestamp] message` lines
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_type_from_str() {
        assert_eq!("Temperature".parse::<SensorType>().unwrap(), SensorType::Temperature);
        assert_eq!("motion".parse::<SensorType>().unwrap(), SensorType::Movement);
        assert!("smoke".parse::<SensorType>().is_err());
    }

    #[test]
    fn test_device_type_display_roundtrip() {
        for device_type in [DeviceType::Lamp, DeviceType::Camera, DeviceType::Vent] {
            let parsed: DeviceType = device_type.to_string().parse().unwrap();
            assert_eq!(parsed, device_type);
        }
    }

    #[test]
    fn test_fire_severity_temperatures() {
        assert_eq!(FireSeverity::Mild.forced_temperature(), 35.0);
        assert_eq!(FireSeverity::Severe.forced_temperature(), 65.0);
        assert_eq!("SEVERE".parse::<FireSeverity>().unwrap(), FireSeverity::Severe);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
