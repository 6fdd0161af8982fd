//! Sensors and trigger evaluation
//!
//! A sensor is a named [`SensorKind`] plus the trigger flag written by its last
//! evaluation. Getting a reading ([`Sensor::acquire`]) is kept apart from
//! comparing it against thresholds ([`TriggerRule::is_triggered`]); the latter
//! is pure.

use crate::simulation::reading_source::{ReadingSource, SensorProbe};
use crate::types::{SensorId, SensorType, TemperatureBand};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sampled value, tagged by the kind of sensor it is meant for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reading {
    /// Temperature in degrees Celsius
    Temperature(f64),
    /// Light level on a 0-100 scale
    Light(f64),
    /// Whether motion was seen
    Movement(bool),
}

impl Reading {
    /// Kind of sensor this reading belongs to
    pub fn sensor_type(&self) -> SensorType {
        match self {
            Reading::Temperature(_) => SensorType::Temperature,
            Reading::Light(_) => SensorType::Light,
            Reading::Movement(_) => SensorType::Movement,
        }
    }

    /// The temperature value, if this is a temperature reading
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Reading::Temperature(value) => Some(*value),
            _ => None,
        }
    }
}

/// Capability of deciding trigger state from a reading
///
/// Readings of the wrong kind never trigger.
pub trait TriggerRule {
    /// Whether `reading` puts the sensor into the triggered state
    fn is_triggered(&self, reading: &Reading) -> bool;
}

/// Two-band temperature sensor parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSensor {
    /// Lower threshold (T1)
    pub lower_threshold: f64,
    /// Upper threshold (T2), only meaningful when greater than T1
    pub upper_threshold: Option<f64>,
    forced_reading: Option<f64>,
}

impl TemperatureSensor {
    /// Sensor with a single threshold
    pub fn new(lower_threshold: f64) -> Self {
        Self { lower_threshold, upper_threshold: None, forced_reading: None }
    }

    /// Sensor with a lower and an upper threshold
    pub fn with_upper(lower_threshold: f64, upper_threshold: f64) -> Self {
        Self { lower_threshold, upper_threshold: Some(upper_threshold), forced_reading: None }
    }

    /// The upper threshold when it actually defines a higher band
    pub fn upper_band(&self) -> Option<f64> {
        self.upper_threshold.filter(|upper| *upper > self.lower_threshold)
    }

    /// Classify a temperature against T1 and T2
    pub fn band(&self, value: f64) -> TemperatureBand {
        if value >= self.lower_threshold {
            match self.upper_band() {
                Some(upper) if value >= upper => TemperatureBand::High,
                _ => TemperatureBand::Low,
            }
        } else {
            TemperatureBand::Normal
        }
    }

    /// Reading forced by fire injection, if any
    pub fn forced_reading(&self) -> Option<f64> {
        self.forced_reading
    }
}

impl TriggerRule for TemperatureSensor {
    fn is_triggered(&self, reading: &Reading) -> bool {
        match reading {
            Reading::Temperature(value) => self.band(*value) != TemperatureBand::Normal,
            _ => false,
        }
    }
}

/// Light level sensor parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSensor {
    /// Level at or above which the sensor triggers
    pub threshold: f64,
}

impl TriggerRule for LightSensor {
    fn is_triggered(&self, reading: &Reading) -> bool {
        matches!(reading, Reading::Light(level) if *level >= self.threshold)
    }
}

/// Motion detector; has no parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSensor;

impl TriggerRule for MovementSensor {
    fn is_triggered(&self, reading: &Reading) -> bool {
        matches!(reading, Reading::Movement(true))
    }
}

/// Kind-specific part of a sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SensorKind {
    /// Temperature sensor
    Temperature(TemperatureSensor),
    /// Light sensor
    Light(LightSensor),
    /// Movement sensor
    Movement(MovementSensor),
}

impl SensorKind {
    /// Tag of this kind
    pub fn sensor_type(&self) -> SensorType {
        match self {
            SensorKind::Temperature(_) => SensorType::Temperature,
            SensorKind::Light(_) => SensorType::Light,
            SensorKind::Movement(_) => SensorType::Movement,
        }
    }
}

impl TriggerRule for SensorKind {
    fn is_triggered(&self, reading: &Reading) -> bool {
        match self {
            SensorKind::Temperature(sensor) => sensor.is_triggered(reading),
            SensorKind::Light(sensor) => sensor.is_triggered(reading),
            SensorKind::Movement(sensor) => sensor.is_triggered(reading),
        }
    }
}

/// A sensor mounted in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique identifier for the sensor
    pub id: SensorId,
    /// Human-readable name of the sensor
    pub name: String,
    /// Kind-specific parameters
    pub kind: SensorKind,
    triggered: bool,
    last_reading: Option<Reading>,
}

impl Sensor {
    /// Create a sensor from its kind
    pub fn new(name: impl Into<String>, kind: SensorKind) -> Self {
        Self { id: SensorId::new(), name: name.into(), kind, triggered: false, last_reading: None }
    }

    /// Temperature sensor with a single threshold
    pub fn temperature(name: impl Into<String>, threshold: f64) -> Self {
        Self::new(name, SensorKind::Temperature(TemperatureSensor::new(threshold)))
    }

    /// Temperature sensor with T1 and T2
    pub fn temperature_banded(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self::new(name, SensorKind::Temperature(TemperatureSensor::with_upper(lower, upper)))
    }

    /// Light sensor
    pub fn light(name: impl Into<String>, threshold: f64) -> Self {
        Self::new(name, SensorKind::Light(LightSensor { threshold }))
    }

    /// Movement sensor
    pub fn movement(name: impl Into<String>) -> Self {
        Self::new(name, SensorKind::Movement(MovementSensor))
    }

    /// Kind tag of the sensor
    pub fn sensor_type(&self) -> SensorType {
        self.kind.sensor_type()
    }

    /// Trigger state set by the last evaluation
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Reading used by the last evaluation
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Temperature parameters, if this is a temperature sensor
    pub fn as_temperature(&self) -> Option<&TemperatureSensor> {
        match &self.kind {
            SensorKind::Temperature(sensor) => Some(sensor),
            _ => None,
        }
    }

    /// Obtain a reading for this sensor
    ///
    /// A forced temperature takes precedence over the source.
    pub fn acquire(&self, room: &str, source: &mut dyn ReadingSource) -> Reading {
        let probe = SensorProbe { room, sensor: &self.name, sensor_type: self.sensor_type() };
        match &self.kind {
            SensorKind::Temperature(sensor) => Reading::Temperature(
                sensor.forced_reading.unwrap_or_else(|| source.temperature(&probe)),
            ),
            SensorKind::Light(_) => Reading::Light(source.light_level(&probe)),
            SensorKind::Movement(_) => Reading::Movement(source.movement(&probe)),
        }
    }

    /// Evaluate a reading and record the resulting trigger state
    pub fn evaluate(&mut self, reading: Reading) -> bool {
        self.triggered = self.kind.is_triggered(&reading);
        self.last_reading = Some(reading);
        self.triggered
    }

    /// Acquire a reading and evaluate it
    pub fn check(&mut self, room: &str, source: &mut dyn ReadingSource) -> bool {
        let reading = self.acquire(room, source);
        self.evaluate(reading)
    }

    /// Force the next temperature readings to `value`
    ///
    /// Returns false for sensors that do not measure temperature. The trigger
    /// flag is cleared until the next evaluation.
    pub fn force_temperature(&mut self, value: f64) -> bool {
        match &mut self.kind {
            SensorKind::Temperature(sensor) => {
                sensor.forced_reading = Some(value);
                self.triggered = false;
                true
            }
            _ => false,
        }
    }

    /// Drop a forced temperature, going back to the reading source
    pub fn clear_forced_reading(&mut self) {
        if let SensorKind::Temperature(sensor) = &mut self.kind {
            sensor.forced_reading = None;
        }
    }

    /// Kind-specific description line
    pub fn describe(&self) -> String {
        match &self.kind {
            SensorKind::Temperature(sensor) => match sensor.upper_threshold {
                Some(upper) => format!(
                    "TemperatureSensor: {}, T1={}, T2={}",
                    self.name, sensor.lower_threshold, upper
                ),
                None => format!("TemperatureSensor: {}, T1={}", self.name, sensor.lower_threshold),
            },
            SensorKind::Light(sensor) => {
                format!("LightSensor: {}, Threshold={}", self.name, sensor.threshold)
            }
            SensorKind::Movement(_) => format!("MovementSensor: {}", self.name),
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sensor: {}, Triggered: {}", self.name, self.triggered)
    }
}
