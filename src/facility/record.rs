//! Building record persistence
//!
//! A record is a small line-oriented text file:
//!
//! ```text
//! Big Complex
//! 3
//! 1250.5
//! ```
//!
//! holding the building name, the floor count and, optionally, the area.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors reading or writing a building record
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record file does not exist
    #[error("Building record not found: {0}")]
    NotFound(String),

    /// Reading or writing failed
    #[error("Building record I/O error for {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// First line is blank or missing
    #[error("Building record has no name")]
    EmptyName,

    /// Name would not read back unchanged
    #[error("Building name {0:?} cannot be stored in a record")]
    InvalidName(String),

    /// Floor count is missing or not a non-negative integer
    #[error("Invalid floor count in building record: '{0}'")]
    InvalidFloors(String),

    /// Area is not a non-negative number
    #[error("Invalid area in building record: '{0}'")]
    InvalidArea(String),
}

/// Whether `name` survives a write and read of a record unchanged
///
/// The name must be non-empty, hold no line break and carry no surrounding
/// whitespace.
pub fn is_storable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['\n', '\r']) && name.trim() == name
}

/// Name, floor count and area of a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// Building name
    pub name: String,
    /// Number of floors
    pub floors: usize,
    /// Area in square metres
    pub area: Option<f64>,
}

impl BuildingRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, floors: usize, area: Option<f64>) -> Self {
        Self { name: name.into(), floors, area }
    }

    /// Render the record as file content
    pub fn to_text(&self) -> String {
        match self.area {
            Some(area) => format!("{}\n{}\n{}\n", self.name, self.floors, area),
            None => format!("{}\n{}\n", self.name, self.floors),
        }
    }

    /// Parse file content
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let mut lines = text.lines().map(str::trim);

        let name = match lines.next() {
            Some(line) if !line.is_empty() => line.to_string(),
            _ => return Err(RecordError::EmptyName),
        };

        let floors_line = lines.next().unwrap_or("");
        let floors = floors_line
            .parse::<usize>()
            .map_err(|_| RecordError::InvalidFloors(floors_line.to_string()))?;

        let area = match lines.next().filter(|line| !line.is_empty()) {
            Some(line) => match line.parse::<f64>() {
                Ok(area) if area.is_finite() && area >= 0.0 => Some(area),
                _ => return Err(RecordError::InvalidArea(line.to_string())),
            },
            None => None,
        };

        Ok(Self { name, floors, area })
    }

    /// Write the record, replacing any existing file
    ///
    /// Names that would not read back unchanged are refused.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordError> {
        if !is_storable_name(&self.name) {
            return Err(RecordError::InvalidName(self.name.clone()));
        }
        let path = path.as_ref();
        fs::write(path, self.to_text())
            .map_err(|source| RecordError::Io { path: path.display().to_string(), source })
    }

    /// Read a record from a file
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecordError::NotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)
            .map_err(|source| RecordError::Io { path: path.display().to_string(), source })?;
        Self::parse(&text)
    }
}
