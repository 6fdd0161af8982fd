//! Reading sources
//!
//! Sensors never sample values on their own: every reading comes from a
//! [`ReadingSource`] handed into the tick. Production runs use
//! [`RandomReadingSource`]; tests use the fixed and scripted sources for
//! deterministic outcomes.

use crate::types::{defaults, SensorType};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

/// Identifies the sensor a reading is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorProbe<'a> {
    /// Name of the room the sensor is mounted in
    pub room: &'a str,
    /// Name of the sensor
    pub sensor: &'a str,
    /// Kind of the sensor
    pub sensor_type: SensorType,
}

/// Supplier of sensor readings
pub trait ReadingSource {
    /// Temperature in degrees Celsius
    fn temperature(&mut self, probe: &SensorProbe<'_>) -> f64;

    /// Light level on a 0-100 scale
    fn light_level(&mut self, probe: &SensorProbe<'_>) -> f64;

    /// Whether the sensor sees movement
    fn movement(&mut self, probe: &SensorProbe<'_>) -> bool;
}

/// Random readings for every sensor
///
/// Temperature is uniform in [0, 100), light an integer in 0..=100, movement
/// true with the configured probability.
#[derive(Debug)]
pub struct RandomReadingSource {
    rng: StdRng,
    movement_probability: f64,
}

impl RandomReadingSource {
    /// Create a source seeded from entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy(), movement_probability: defaults::MOVEMENT_PROBABILITY }
    }

    /// Create a reproducible source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            movement_probability: defaults::MOVEMENT_PROBABILITY,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Override the movement probability (clamped to 0.0-1.0)
    pub fn with_movement_probability(mut self, probability: f64) -> Self {
        self.movement_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Default for RandomReadingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for RandomReadingSource {
    fn temperature(&mut self, _probe: &SensorProbe<'_>) -> f64 {
        self.rng.gen::<f64>() * 100.0
    }

    fn light_level(&mut self, _probe: &SensorProbe<'_>) -> f64 {
        f64::from(self.rng.gen_range(0..=100u32))
    }

    fn movement(&mut self, _probe: &SensorProbe<'_>) -> bool {
        self.rng.gen_bool(self.movement_probability)
    }
}

/// Same readings for every sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedReadingSource {
    /// Temperature returned for every temperature sensor
    pub temperature: f64,
    /// Level returned for every light sensor
    pub light_level: f64,
    /// Value returned for every movement sensor
    pub movement: bool,
}

impl FixedReadingSource {
    /// Create a fixed source
    pub fn new(temperature: f64, light_level: f64, movement: bool) -> Self {
        Self { temperature, light_level, movement }
    }

    /// Readings that trigger nothing with the default thresholds
    pub fn quiet() -> Self {
        Self::new(defaults::RESET_TEMPERATURE, 0.0, false)
    }
}

impl ReadingSource for FixedReadingSource {
    fn temperature(&mut self, _probe: &SensorProbe<'_>) -> f64 {
        self.temperature
    }

    fn light_level(&mut self, _probe: &SensorProbe<'_>) -> f64 {
        self.light_level
    }

    fn movement(&mut self, _probe: &SensorProbe<'_>) -> bool {
        self.movement
    }
}

/// Per-sensor overrides on top of a fixed fallback
///
/// Overrides are keyed by sensor name and apply in every room.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedReadingSource {
    fallback: FixedReadingSource,
    temperatures: HashMap<String, f64>,
    light_levels: HashMap<String, f64>,
    movements: HashMap<String, bool>,
}

impl ScriptedReadingSource {
    /// Create a scripted source answering `fallback` for unscripted sensors
    pub fn new(fallback: FixedReadingSource) -> Self {
        Self {
            fallback,
            temperatures: HashMap::new(),
            light_levels: HashMap::new(),
            movements: HashMap::new(),
        }
    }

    /// Script the temperature of one sensor
    pub fn with_temperature(mut self, sensor: impl Into<String>, value: f64) -> Self {
        self.temperatures.insert(sensor.into(), value);
        self
    }

    /// Script the light level of one sensor
    pub fn with_light_level(mut self, sensor: impl Into<String>, value: f64) -> Self {
        self.light_levels.insert(sensor.into(), value);
        self
    }

    /// Script the movement state of one sensor
    pub fn with_movement(mut self, sensor: impl Into<String>, value: bool) -> Self {
        self.movements.insert(sensor.into(), value);
        self
    }
}

impl ReadingSource for ScriptedReadingSource {
    fn temperature(&mut self, probe: &SensorProbe<'_>) -> f64 {
        self.temperatures.get(probe.sensor).copied().unwrap_or(self.fallback.temperature)
    }

    fn light_level(&mut self, probe: &SensorProbe<'_>) -> f64 {
        self.light_levels.get(probe.sensor).copied().unwrap_or(self.fallback.light_level)
    }

    fn movement(&mut self, probe: &SensorProbe<'_>) -> bool {
        self.movements.get(probe.sensor).copied().unwrap_or(self.fallback.movement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(sensor: &str, sensor_type: SensorType) -> SensorProbe<'_> {
        SensorProbe { room: "R_1_1", sensor, sensor_type }
    }

    #[test]
    fn test_random_source_ranges() {
        let mut source = RandomReadingSource::with_seed(42);
        let temp_probe = probe("TempSensor_1", SensorType::Temperature);
        let light_probe = probe("LightSensor_for_Camera_1", SensorType::Light);

        for _ in 0..1000 {
            let t = source.temperature(&temp_probe);
            assert!((0.0..100.0).contains(&t));

            let l = source.light_level(&light_probe);
            assert!((0.0..=100.0).contains(&l));
            assert_eq!(l.fract(), 0.0);
        }
    }

    #[test]
    fn test_random_source_is_reproducible() {
        let temp_probe = probe("TempSensor_1", SensorType::Temperature);
        let mut a = RandomReadingSource::with_seed(7);
        let mut b = RandomReadingSource::with_seed(7);

        for _ in 0..20 {
            assert_eq!(a.temperature(&temp_probe), b.temperature(&temp_probe));
        }
    }

    #[test]
    fn test_movement_probability_extremes() {
        let move_probe = probe("MoveSensor_door_1", SensorType::Movement);

        let mut never = RandomReadingSource::with_seed(1).with_movement_probability(0.0);
        let mut always = RandomReadingSource::with_seed(1).with_movement_probability(1.0);

        for _ in 0..100 {
            assert!(!never.movement(&move_probe));
            assert!(always.movement(&move_probe));
        }
    }

    #[test]
    fn test_scripted_source_overrides() {
        let mut source = ScriptedReadingSource::new(FixedReadingSource::quiet())
            .with_temperature("TempSensor_2", 70.0)
            .with_movement("MoveSensor_door_1", true);

        assert_eq!(source.temperature(&probe("TempSensor_1", SensorType::Temperature)), 20.0);
        assert_eq!(source.temperature(&probe("TempSensor_2", SensorType::Temperature)), 70.0);
        assert!(source.movement(&probe("MoveSensor_door_1", SensorType::Movement)));
        assert!(!source.movement(&probe("MoveSensor_door_2", SensorType::Movement)));
    }
}
