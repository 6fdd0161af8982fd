//! Buildings, floors, rooms and their equipment layout
//!
//! # Overview
//!
//! - **Building**: Floors plus whole-building operations (simulation pass, fire injection)
//! - **Floor**: Numbered storey holding a [`RoomCollection`]
//! - **Room**: Geometry, sensors and devices; runs the actuation policy
//! - **RoomCollection**: Rooms by position and by name
//! - **EquipmentPlan**: Sensor and device quantities derived from room geometry
//! - **BuildingGenerator**: Random, seedable building layouts
//! - **FacilityContext**: Counts what a generator created
//! - **BuildingRecord**: Name, floor count and area persisted as text
//!
//! # Usage Example
//!
//! ```rust
//! use building_security_simulator::facility::*;
//! use building_security_simulator::types::*;
//!
//! let mut room = Room::new("R_1_1", RoomGeometry::new(6.0, 6.0).with_doors(2));
//! room.auto_install_equipment(&SensorThresholds::default());
//! assert_eq!(room.devices().len(), 9 + 3);
//!
//! let mut floor = Floor::new(1, 4.0);
//! floor.add_room(room);
//! let mut building = Building::new("Big Complex", 1);
//! building.add_floor(floor);
//! assert_eq!(building.room_count(), 1);
//! ```

pub mod building;
pub mod collection;
pub mod context;
pub mod floor;
pub mod generator;
pub mod provisioning;
pub mod record;
pub mod room;

// Re-export all public types for convenience
pub use building::{Building, BuildingTickReport, FacilityError};
pub use collection::RoomCollection;
pub use context::FacilityContext;
pub use floor::Floor;
pub use generator::BuildingGenerator;
pub use provisioning::EquipmentPlan;
pub use record::{is_storable_name, BuildingRecord, RecordError};
pub use room::{Room, RoomGeometry};
