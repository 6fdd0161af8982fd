//! Actuated devices
//!
//! Lamps, cameras and vents share one representation tagged by [`DeviceType`].
//! State changes go through the [`Actuator`] capability only.

use crate::types::{DeviceId, DeviceType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability of switching a device on and off
///
/// Both transitions are idempotent and cannot fail.
pub trait Actuator {
    /// Switch the device on
    fn activate(&mut self);

    /// Switch the device off
    fn deactivate(&mut self);

    /// Whether the device is currently on
    fn is_enabled(&self) -> bool;
}

/// A device installed in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique identifier for the device
    pub id: DeviceId,
    /// Human-readable name of the device
    pub name: String,
    /// Kind of device
    pub device_type: DeviceType,
    enabled: bool,
}

impl Device {
    /// Create a new device, initially off
    pub fn new(name: impl Into<String>, device_type: DeviceType) -> Self {
        Self { id: DeviceId::new(), name: name.into(), device_type, enabled: false }
    }

    /// Create a lamp
    pub fn lamp(name: impl Into<String>) -> Self {
        Self::new(name, DeviceType::Lamp)
    }

    /// Create a camera
    pub fn camera(name: impl Into<String>) -> Self {
        Self::new(name, DeviceType::Camera)
    }

    /// Create a vent
    pub fn vent(name: impl Into<String>) -> Self {
        Self::new(name, DeviceType::Vent)
    }

    /// Check if this device is of the given kind
    pub fn is(&self, device_type: DeviceType) -> bool {
        self.device_type == device_type
    }
}

impl Actuator for Device {
    fn activate(&mut self) {
        self.enabled = true;
    }

    fn deactivate(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Device: {}, Enabled: {}", self.name, self.enabled)
    }
}
