//! Configuration structures for the building security simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the shape of the generated building and the simulation run.
//! Configuration is layered: built-in defaults, then an optional JSON file, then
//! command line flags.

use super::{FireSeverity, OutputFormat};
use crate::facility::is_storable_name;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default sensor thresholds and fire handling values
pub mod defaults {
    /// Lower temperature threshold (T1)
    pub const TEMPERATURE_THRESHOLD: f64 = 30.0;

    /// Upper temperature threshold (T2)
    pub const TEMPERATURE_THRESHOLD_HIGH: f64 = 60.0;

    /// Light level threshold, on a 0-100 scale
    pub const LIGHT_THRESHOLD: f64 = 50.0;

    /// Probability that a movement sensor reports motion on a tick
    pub const MOVEMENT_PROBABILITY: f64 = 0.3;

    /// Temperature forced onto every room before a user specified fire
    pub const RESET_TEMPERATURE: f64 = 20.0;

    /// Security event log written by default
    pub const EVENT_LOG: &str = "SecurityLog.txt";
}

/// Thresholds applied to sensors installed by auto-provisioning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorThresholds {
    /// Lower temperature threshold (T1)
    pub temperature: f64,
    /// Upper temperature threshold (T2), meaningful only when above T1
    pub temperature_high: Option<f64>,
    /// Light level threshold
    pub light: f64,
}

impl Default for SensorThresholds {
    fn default() -> Self {
        Self {
            temperature: defaults::TEMPERATURE_THRESHOLD,
            temperature_high: Some(defaults::TEMPERATURE_THRESHOLD_HIGH),
            light: defaults::LIGHT_THRESHOLD,
        }
    }
}

/// Where and how hard to start an injected fire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireConfig {
    /// 1-based floor number
    pub floor: usize,
    /// 1-based room number on that floor
    pub room: usize,
    /// Fire severity
    pub severity: FireSeverity,
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "building-security-simulator",
    version = "0.1.0",
    about = "Building Security Simulator - Runs per-room sensor and actuator simulation",
    long_about = "Builds a multi-floor building, installs sensors and devices in every room, and runs simulation ticks that react to temperature, light and movement. Security events are appended to a log file.

EXAMPLES:
    # Run with default settings
    building-security-simulator

    # Use a configuration file
    building-security-simulator --config config.json

    # Reproducible run with five ticks
    building-security-simulator --seed 42 --ticks 5

    # Start a severe fire in floor 2, room 1 after the random run
    building-security-simulator --fire-floor 2 --fire-room 1 --fire-severity severe

    # Generate configuration template
    building-security-simulator --print-config > my-config.json

    # Validate configuration without running
    building-security-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Name of the simulated building
    #[arg(long, help = "Building name")]
    pub building_name: Option<String>,

    /// Number of floors to generate
    #[arg(
        long,
        help = "Number of floors",
        long_help = "Number of floors to generate. Must be greater than 0. Default: 3"
    )]
    pub floors: Option<usize>,

    /// Total building area in square metres
    #[arg(long, help = "Total building area in m^2 (>= 0)")]
    pub building_area: Option<f64>,

    /// Minimum number of rooms per floor
    #[arg(long, help = "Minimum rooms per floor")]
    pub min_rooms_per_floor: Option<usize>,

    /// Maximum number of rooms per floor
    #[arg(long, help = "Maximum rooms per floor")]
    pub max_rooms_per_floor: Option<usize>,

    /// Lower temperature threshold (T1)
    #[arg(long, help = "Lower temperature threshold T1")]
    pub temperature_threshold: Option<f64>,

    /// Upper temperature threshold (T2)
    #[arg(long, help = "Upper temperature threshold T2 (must exceed T1)")]
    pub temperature_threshold_high: Option<f64>,

    /// Light level threshold
    #[arg(long, help = "Light level threshold (0-100)")]
    pub light_threshold: Option<f64>,

    /// Probability of movement per sensor and tick
    #[arg(long, help = "Movement probability per tick (0.0-1.0)")]
    pub movement_probability: Option<f64>,

    /// Number of simulation ticks for the random run
    #[arg(
        long,
        help = "Number of simulation ticks",
        long_help = "Number of simulation ticks to run with random readings. Must be greater than 0. Default: 1"
    )]
    pub ticks: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Security event log path
    #[arg(long, help = "Security event log path (appended to)")]
    pub event_log: Option<String>,

    /// Output format for the security event log
    #[arg(
        long,
        help = "Event log format (text or json)",
        long_help = "Line format of the security event log. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Building record to load name, floors and area from
    #[arg(long, help = "Load building name/floors/area from a record file")]
    pub building_record: Option<String>,

    /// Path to save the building record to
    #[arg(long, help = "Save building name/floors/area to a record file")]
    pub save_record: Option<String>,

    /// Floor to start a fire on
    #[arg(long, help = "Floor number (1-based) for a user specified fire")]
    pub fire_floor: Option<usize>,

    /// Room to start a fire in
    #[arg(long, help = "Room number (1-based) for a user specified fire")]
    pub fire_room: Option<usize>,

    /// Fire severity
    #[arg(long, help = "Fire severity (mild or severe)")]
    pub fire_severity: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Name of the simulated building
    pub building_name: Option<String>,
    /// Number of floors to generate
    pub floors: Option<usize>,
    /// Total building area in square metres
    pub building_area: Option<f64>,
    /// Minimum number of rooms per floor
    pub min_rooms_per_floor: Option<usize>,
    /// Maximum number of rooms per floor
    pub max_rooms_per_floor: Option<usize>,
    /// Smallest generated room side, in metres
    pub min_room_dimension: Option<u32>,
    /// Largest generated room side, in metres
    pub max_room_dimension: Option<u32>,
    /// Most doors a generated room gets
    pub max_doors: Option<u32>,
    /// Most windows a generated room gets
    pub max_windows: Option<u32>,
    /// Lower temperature threshold (T1)
    pub temperature_threshold: Option<f64>,
    /// Upper temperature threshold (T2)
    pub temperature_threshold_high: Option<f64>,
    /// Light level threshold
    pub light_threshold: Option<f64>,
    /// Probability of movement per sensor and tick
    pub movement_probability: Option<f64>,
    /// Number of simulation ticks
    pub ticks: Option<usize>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Security event log path
    pub event_log: Option<String>,
    /// Output format for the security event log
    pub output_format: Option<String>,
    /// Building record to load
    pub building_record: Option<String>,
    /// Path to save the building record to
    pub save_record: Option<String>,
    /// User specified fire
    pub fire: Option<FireConfig>,
}

/// Configuration for the building security simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Name of the simulated building
    pub building_name: String,

    /// Number of floors to generate
    pub floors: usize,

    /// Total building area in square metres
    pub building_area: Option<f64>,

    /// Minimum number of rooms per floor
    pub min_rooms_per_floor: usize,

    /// Maximum number of rooms per floor
    pub max_rooms_per_floor: usize,

    /// Smallest generated room side, in metres
    pub min_room_dimension: u32,

    /// Largest generated room side, in metres
    pub max_room_dimension: u32,

    /// Most doors a generated room gets (at least one is always fitted)
    pub max_doors: u32,

    /// Most windows a generated room gets
    pub max_windows: u32,

    /// Lower temperature threshold (T1)
    pub temperature_threshold: f64,

    /// Upper temperature threshold (T2)
    pub temperature_threshold_high: Option<f64>,

    /// Light level threshold
    pub light_threshold: f64,

    /// Probability of movement per sensor and tick (0.0-1.0)
    pub movement_probability: f64,

    /// Number of simulation ticks for the random run
    pub ticks: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Security event log path
    pub event_log: String,

    /// Output format for the security event log
    pub output_format: String,

    /// Building record to load name, floors and area from
    pub building_record: Option<String>,

    /// Path to save the building record to
    pub save_record: Option<String>,

    /// User specified fire, run after the random ticks
    pub fire: Option<FireConfig>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// A command line value could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Building name is empty, spans lines or has surrounding whitespace
    #[error("Invalid building name {0:?}: must be non-empty, single-line and without surrounding whitespace")]
    InvalidBuildingName(String),

    /// Floor count is invalid
    #[error("Floor count must be greater than 0, got {0}")]
    InvalidFloorCount(usize),

    /// Tick count is invalid
    #[error("Tick count must be greater than 0, got {0}")]
    InvalidTickCount(usize),

    /// Room range is invalid
    #[error("Invalid room range: min ({0}) must be <= max ({1}) and both > 0")]
    InvalidRoomRange(usize, usize),

    /// Room dimension range is invalid
    #[error("Invalid room dimension range: min ({0}) must be <= max ({1}) and both > 0")]
    InvalidDimensionRange(u32, u32),

    /// Building area is negative or not a number
    #[error("Building area must be a non-negative number, got {0}")]
    InvalidArea(f64),

    /// A threshold is not a finite number or out of range
    #[error("Invalid threshold for {field}: {value}")]
    InvalidThreshold {
        /// Name of the offending field
        field: String,
        /// The invalid value
        value: f64,
    },

    /// T2 is not above T1
    #[error("Upper temperature threshold ({high}) must be greater than lower threshold ({low})")]
    InvalidThresholdOrder {
        /// Lower threshold (T1)
        low: f64,
        /// Upper threshold (T2)
        high: f64,
    },

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with invalid probability
        field: String,
        /// The invalid probability value
        value: f64,
    },

    /// Output format cannot be parsed
    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),

    /// Fire location uses a zero index
    #[error("Fire floor and room are 1-based, got floor {floor}, room {room}")]
    InvalidFireLocation {
        /// Requested floor
        floor: usize,
        /// Requested room
        room: usize,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            building_name: "Big Complex".to_string(),
            floors: 3,
            building_area: None,
            min_rooms_per_floor: 1,
            max_rooms_per_floor: 3,
            min_room_dimension: 3,
            max_room_dimension: 9,
            max_doors: 2,
            max_windows: 3,
            temperature_threshold: defaults::TEMPERATURE_THRESHOLD,
            temperature_threshold_high: Some(defaults::TEMPERATURE_THRESHOLD_HIGH),
            light_threshold: defaults::LIGHT_THRESHOLD,
            movement_probability: defaults::MOVEMENT_PROBABILITY,
            ticks: 1,
            seed: None,
            event_log: defaults::EVENT_LOG.to_string(),
            output_format: "text".to_string(),
            building_record: None,
            save_record: None,
            fire: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            building_name: file.building_name.unwrap_or(defaults.building_name),
            floors: file.floors.unwrap_or(defaults.floors),
            building_area: file.building_area.or(defaults.building_area),
            min_rooms_per_floor: file.min_rooms_per_floor.unwrap_or(defaults.min_rooms_per_floor),
            max_rooms_per_floor: file.max_rooms_per_floor.unwrap_or(defaults.max_rooms_per_floor),
            min_room_dimension: file.min_room_dimension.unwrap_or(defaults.min_room_dimension),
            max_room_dimension: file.max_room_dimension.unwrap_or(defaults.max_room_dimension),
            max_doors: file.max_doors.unwrap_or(defaults.max_doors),
            max_windows: file.max_windows.unwrap_or(defaults.max_windows),
            temperature_threshold: file
                .temperature_threshold
                .unwrap_or(defaults.temperature_threshold),
            temperature_threshold_high: file
                .temperature_threshold_high
                .or(defaults.temperature_threshold_high),
            light_threshold: file.light_threshold.unwrap_or(defaults.light_threshold),
            movement_probability: file
                .movement_probability
                .unwrap_or(defaults.movement_probability),
            ticks: file.ticks.unwrap_or(defaults.ticks),
            seed: file.seed.or(defaults.seed),
            event_log: file.event_log.unwrap_or(defaults.event_log),
            output_format: file.output_format.unwrap_or(defaults.output_format),
            building_record: file.building_record.or(defaults.building_record),
            save_record: file.save_record.or(defaults.save_record),
            fire: file.fire.or(defaults.fire),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(value) = args.building_name {
            config.building_name = value;
        }
        if let Some(value) = args.floors {
            config.floors = value;
        }
        if let Some(value) = args.building_area {
            config.building_area = Some(value);
        }
        if let Some(value) = args.min_rooms_per_floor {
            config.min_rooms_per_floor = value;
        }
        if let Some(value) = args.max_rooms_per_floor {
            config.max_rooms_per_floor = value;
        }
        if let Some(value) = args.temperature_threshold {
            config.temperature_threshold = value;
        }
        if let Some(value) = args.temperature_threshold_high {
            config.temperature_threshold_high = Some(value);
        }
        if let Some(value) = args.light_threshold {
            config.light_threshold = value;
        }
        if let Some(value) = args.movement_probability {
            config.movement_probability = value;
        }
        if let Some(value) = args.ticks {
            config.ticks = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.event_log {
            config.event_log = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.building_record {
            config.building_record = Some(value);
        }
        if let Some(value) = args.save_record {
            config.save_record = Some(value);
        }

        match (args.fire_floor, args.fire_room) {
            (Some(floor), Some(room)) => {
                let severity = match args.fire_severity.as_deref() {
                    Some(raw) => raw.parse::<FireSeverity>().map_err(ConfigError::InvalidArgument)?,
                    None => FireSeverity::Mild,
                };
                config.fire = Some(FireConfig { floor, room, severity });
            }
            (None, None) => {
                if args.fire_severity.is_some() {
                    return Err(ConfigError::InvalidArgument(
                        "--fire-severity requires --fire-floor and --fire-room".to_string(),
                    ));
                }
            }
            _ => {
                return Err(ConfigError::InvalidArgument(
                    "--fire-floor and --fire-room must be given together".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !is_storable_name(&self.building_name) {
            return Err(ConfigValidationError::InvalidBuildingName(self.building_name.clone()));
        }

        if self.floors == 0 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floors));
        }

        if self.ticks == 0 {
            return Err(ConfigValidationError::InvalidTickCount(self.ticks));
        }

        if self.min_rooms_per_floor == 0 || self.min_rooms_per_floor > self.max_rooms_per_floor {
            return Err(ConfigValidationError::InvalidRoomRange(
                self.min_rooms_per_floor,
                self.max_rooms_per_floor,
            ));
        }

        if self.min_room_dimension == 0 || self.min_room_dimension > self.max_room_dimension {
            return Err(ConfigValidationError::InvalidDimensionRange(
                self.min_room_dimension,
                self.max_room_dimension,
            ));
        }

        if let Some(area) = self.building_area {
            if !area.is_finite() || area < 0.0 {
                return Err(ConfigValidationError::InvalidArea(area));
            }
        }

        self.validate_finite("temperature_threshold", self.temperature_threshold)?;
        if let Some(high) = self.temperature_threshold_high {
            self.validate_finite("temperature_threshold_high", high)?;
            if high <= self.temperature_threshold {
                return Err(ConfigValidationError::InvalidThresholdOrder {
                    low: self.temperature_threshold,
                    high,
                });
            }
        }

        if !(0.0..=100.0).contains(&self.light_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "light_threshold".to_string(),
                value: self.light_threshold,
            });
        }

        if !(0.0..=1.0).contains(&self.movement_probability) {
            return Err(ConfigValidationError::InvalidProbability {
                field: "movement_probability".to_string(),
                value: self.movement_probability,
            });
        }

        self.get_output_format().map_err(|_| {
            ConfigValidationError::InvalidOutputFormat(self.output_format.clone())
        })?;

        if let Some(fire) = &self.fire {
            if fire.floor == 0 || fire.room == 0 {
                return Err(ConfigValidationError::InvalidFireLocation {
                    floor: fire.floor,
                    room: fire.room,
                });
            }
        }

        Ok(())
    }

    fn validate_finite(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !value.is_finite() {
            return Err(ConfigValidationError::InvalidThreshold { field: field.to_string(), value });
        }
        Ok(())
    }

    /// Get the room count range as a tuple
    pub fn rooms_per_floor(&self) -> (usize, usize) {
        (self.min_rooms_per_floor, self.max_rooms_per_floor)
    }

    /// Thresholds handed to auto-provisioning
    pub fn sensor_thresholds(&self) -> SensorThresholds {
        SensorThresholds {
            temperature: self.temperature_threshold,
            temperature_high: self.temperature_threshold_high,
            light: self.light_threshold,
        }
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
