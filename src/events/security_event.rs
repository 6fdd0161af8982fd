//! Security event data structures
//!
//! Events emitted by the room actuation policy, together with the site (building,
//! floor, room) they happened in and their log line rendering.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Where in the building an event happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSite {
    /// Building name
    pub building: String,
    /// Floor number
    pub floor: usize,
    /// Room name
    pub room: String,
}

impl EventSite {
    /// Create a new site
    pub fn new(building: impl Into<String>, floor: usize, room: impl Into<String>) -> Self {
        Self { building: building.into(), floor, room: room.into() }
    }
}

impl fmt::Display for EventSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bldg '{}', Floor #{}, Room '{}'", self.building, self.floor, self.room)
    }
}

/// Kinds of security events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecurityEventKind {
    /// Temperature reached the lower band
    HeatDetected,
    /// Camera snapshot during the lower-band response
    SnapshotTaken,
    /// Temperature reached the upper band
    CriticalHeatDetected,
    /// Vent opened to let water through
    WaterFlowStarted,
    /// Lamp switched on after movement
    MovementLampOn,
    /// Lamp switched back off after movement
    MovementLampOff,
    /// Camera snapshot after a light trigger
    LightSnapshot,
    /// Free-form section marker written by the operator console
    Marker,
}

impl SecurityEventKind {
    /// All kinds, in reporting order
    pub const ALL: [SecurityEventKind; 8] = [
        SecurityEventKind::HeatDetected,
        SecurityEventKind::SnapshotTaken,
        SecurityEventKind::CriticalHeatDetected,
        SecurityEventKind::WaterFlowStarted,
        SecurityEventKind::MovementLampOn,
        SecurityEventKind::MovementLampOff,
        SecurityEventKind::LightSnapshot,
        SecurityEventKind::Marker,
    ];

    /// Log message for this kind at `site`
    pub fn message(&self, site: &EventSite) -> String {
        match self {
            SecurityEventKind::HeatDetected => {
                format!("Temperature above T1 in {}. Lamp ON briefly, camera snapshot...", site)
            }
            SecurityEventKind::SnapshotTaken => format!("Snapshot taken in {}.", site),
            SecurityEventKind::CriticalHeatDetected => {
                format!("Temperature above T2 in {}. Lamp OFF, water ON briefly.", site)
            }
            SecurityEventKind::WaterFlowStarted => format!("Water flow started in {}.", site),
            SecurityEventKind::MovementLampOn => {
                format!("Movement detected in {}; lamp ON briefly.", site)
            }
            SecurityEventKind::MovementLampOff => format!("Lamp OFF again in {}.", site),
            SecurityEventKind::LightSnapshot => {
                format!("Light sensor triggered in {}; camera on, snapshot taken.", site)
            }
            SecurityEventKind::Marker => format!("Marker in {}.", site),
        }
    }
}

impl fmt::Display for SecurityEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityEventKind::HeatDetected => write!(f, "Heat Detected"),
            SecurityEventKind::SnapshotTaken => write!(f, "Snapshot Taken"),
            SecurityEventKind::CriticalHeatDetected => write!(f, "Critical Heat Detected"),
            SecurityEventKind::WaterFlowStarted => write!(f, "Water Flow Started"),
            SecurityEventKind::MovementLampOn => write!(f, "Movement Lamp On"),
            SecurityEventKind::MovementLampOff => write!(f, "Movement Lamp Off"),
            SecurityEventKind::LightSnapshot => write!(f, "Light Snapshot"),
            SecurityEventKind::Marker => write!(f, "Marker"),
        }
    }
}

/// A single entry of the security event log
#[derive(Debug, Clone, Serialize)]
pub struct SecurityEvent {
    /// When the event was emitted
    pub timestamp: DateTime<Local>,
    /// Where it happened; markers have no site
    pub site: Option<EventSite>,
    /// What happened
    pub kind: SecurityEventKind,
    /// Human-readable log message
    pub message: String,
}

impl SecurityEvent {
    /// Event of `kind` at `site`, stamped now
    pub fn at_site(kind: SecurityEventKind, site: &EventSite) -> Self {
        Self {
            timestamp: Local::now(),
            site: Some(site.clone()),
            kind,
            message: kind.message(site),
        }
    }

    /// Section marker, stamped now
    pub fn marker(text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            site: None,
            kind: SecurityEventKind::Marker,
            message: text.into(),
        }
    }

    /// `[yyyy-MM-dd HH:mm:ss] message`
    pub fn to_log_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"), self.message)
    }
}

impl fmt::Display for SecurityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_log_line())
    }
}
