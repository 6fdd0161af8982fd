//! Sensors and actuated devices installed in rooms
//!
//! - **Sensor**: temperature, light and movement sensors behind the [`TriggerRule`] capability
//! - **Device**: lamps, cameras and vents behind the [`Actuator`] capability

pub mod device;
pub mod sensor;

pub use device::{Actuator, Device};
pub use sensor::{
    LightSensor, MovementSensor, Reading, Sensor, SensorKind, TemperatureSensor, TriggerRule,
};
