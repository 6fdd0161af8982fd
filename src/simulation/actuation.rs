//! Per-room actuation policy
//!
//! Given a room's evaluated sensors and its devices, drive lamp, camera and vent
//! and emit security events. Sensors are visited in insertion order and each
//! triggered sensor's branch completes before the next one starts.
//!
//! Only the first device of each kind is addressed. Missing devices are skipped
//! silently.

use crate::equipment::{Actuator, Device, Sensor};
use crate::events::{EventSink, EventSite, SecurityEvent, SecurityEventKind};
use crate::types::{DeviceType, SensorType, TemperatureBand};
use tracing::trace;

/// What a single application of the policy did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActuationReport {
    /// Triggered sensors seen
    pub sensors_triggered: usize,
    /// Lower temperature band responses
    pub heat_responses: usize,
    /// Upper temperature band responses
    pub critical_heat_responses: usize,
    /// Movement responses that switched the lamp
    pub movement_responses: usize,
    /// Light responses that took a snapshot
    pub light_responses: usize,
    /// Kinds of the events emitted, in order
    pub events: Vec<SecurityEventKind>,
}

impl ActuationReport {
    /// Number of events emitted
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Fold another report into this one
    pub fn absorb(&mut self, other: ActuationReport) {
        self.sensors_triggered += other.sensors_triggered;
        self.heat_responses += other.heat_responses;
        self.critical_heat_responses += other.critical_heat_responses;
        self.movement_responses += other.movement_responses;
        self.light_responses += other.light_responses;
        self.events.extend(other.events);
    }
}

fn first_of(devices: &[Device], device_type: DeviceType) -> Option<usize> {
    devices.iter().position(|d| d.is(device_type))
}

struct Emitter<'a> {
    site: &'a EventSite,
    sink: &'a mut dyn EventSink,
    report: &'a mut ActuationReport,
}

impl Emitter<'_> {
    fn emit(&mut self, kind: SecurityEventKind) {
        self.sink.log(&SecurityEvent::at_site(kind, self.site));
        self.report.events.push(kind);
    }
}

/// Run the actuation policy once over `sensors` and `devices`
///
/// The sensors must already have been evaluated for this tick; only their
/// trigger flags and last readings are consulted.
pub fn apply(
    sensors: &[Sensor],
    devices: &mut [Device],
    site: &EventSite,
    sink: &mut dyn EventSink,
) -> ActuationReport {
    let mut report = ActuationReport::default();
    let lamp = first_of(devices, DeviceType::Lamp);
    let camera = first_of(devices, DeviceType::Camera);
    let vent = first_of(devices, DeviceType::Vent);

    for sensor in sensors.iter().filter(|s| s.is_triggered()) {
        report.sensors_triggered += 1;
        trace!(room = %site.room, sensor = %sensor.name, "Handling triggered sensor");

        match sensor.sensor_type() {
            SensorType::Temperature => {
                let band = match (sensor.as_temperature(), sensor.last_reading()) {
                    (Some(params), Some(reading)) => reading
                        .temperature()
                        .map(|value| params.band(value))
                        .unwrap_or(TemperatureBand::Normal),
                    _ => TemperatureBand::Normal,
                };
                let mut emitter = Emitter { site, sink: &mut *sink, report: &mut report };
                match band {
                    TemperatureBand::Low => {
                        emitter.report.heat_responses += 1;
                        heat_response(devices, lamp, camera, &mut emitter)
                    }
                    TemperatureBand::High => {
                        emitter.report.critical_heat_responses += 1;
                        critical_heat_response(devices, lamp, vent, &mut emitter)
                    }
                    TemperatureBand::Normal => {}
                }
            }
            SensorType::Movement => {
                if let Some(i) = lamp.filter(|&i| !devices[i].is_enabled()) {
                    let mut emitter = Emitter { site, sink: &mut *sink, report: &mut report };
                    devices[i].activate();
                    emitter.emit(SecurityEventKind::MovementLampOn);
                    devices[i].deactivate();
                    emitter.emit(SecurityEventKind::MovementLampOff);
                    report.movement_responses += 1;
                }
            }
            SensorType::Light => {
                if let Some(i) = camera.filter(|&i| !devices[i].is_enabled()) {
                    let mut emitter = Emitter { site, sink: &mut *sink, report: &mut report };
                    devices[i].activate();
                    emitter.emit(SecurityEventKind::LightSnapshot);
                    devices[i].deactivate();
                    report.light_responses += 1;
                }
            }
        }
    }

    report
}

/// Lamp and camera on for a snapshot; the lamp goes back off only if it was off
fn heat_response(
    devices: &mut [Device],
    lamp: Option<usize>,
    camera: Option<usize>,
    emitter: &mut Emitter<'_>,
) {
    emitter.emit(SecurityEventKind::HeatDetected);

    let lamp_was_on = lamp.map(|i| devices[i].is_enabled()).unwrap_or(false);
    if let Some(i) = lamp {
        devices[i].activate();
    }
    if let Some(i) = camera {
        devices[i].activate();
    }
    emitter.emit(SecurityEventKind::SnapshotTaken);

    if let Some(i) = lamp {
        if !lamp_was_on {
            devices[i].deactivate();
        }
    }
    // The camera is switched off even if it was on before
    if let Some(i) = camera {
        devices[i].deactivate();
    }
}

/// Lamp off, vent open briefly
fn critical_heat_response(
    devices: &mut [Device],
    lamp: Option<usize>,
    vent: Option<usize>,
    emitter: &mut Emitter<'_>,
) {
    emitter.emit(SecurityEventKind::CriticalHeatDetected);

    if let Some(i) = lamp {
        devices[i].deactivate();
    }
    if let Some(i) = vent {
        devices[i].activate();
    }
    emitter.emit(SecurityEventKind::WaterFlowStarted);
    if let Some(i) = vent {
        devices[i].deactivate();
    }
}
