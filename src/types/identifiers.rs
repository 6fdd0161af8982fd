//! Unique identifier types for the building security simulator
//!
//! UUID-backed identifiers for buildings, rooms, sensors and devices. Each one
//! renders with a short kind prefix so that log lines and JSON output stay
//! readable, and still accepts a bare UUID when deserializing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Prefix used in the string form of this identifier
            pub const PREFIX: &'static str = $prefix;
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0.simple())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                let raw = s.strip_prefix($prefix).unwrap_or(&s);
                let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
                Ok($name(uuid))
            }
        }
    };
}

prefixed_id!(
    /// Unique identifier for a building
    BuildingId,
    "BLD_"
);

prefixed_id!(
    /// Unique identifier for a room within a floor
    RoomId,
    "ROOM_"
);

prefixed_id!(
    /// Unique identifier for a sensor mounted in a room
    SensorId,
    "SNS_"
);

prefixed_id!(
    /// Unique identifier for an actuated device in a room
    DeviceId,
    "DEV_"
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(BuildingId::new(), BuildingId::new());
        assert_ne!(RoomId::new(), RoomId::default());
        assert_ne!(SensorId::new(), SensorId::new());
        assert_ne!(DeviceId::new(), DeviceId::new());
    }

    #[test]
    fn test_id_display_prefixes() {
        let sensor = SensorId::new().to_string();
        assert!(sensor.starts_with("SNS_"));
        // SNS_ + 32 hex chars
        assert_eq!(sensor.len(), 36);

        assert!(DeviceId::new().to_string().starts_with("DEV_"));
        assert!(RoomId::new().to_string().starts_with("ROOM_"));
        assert!(BuildingId::new().to_string().starts_with("BLD_"));
    }

    #[test]
    fn test_id_serialization() {
        let device_id = DeviceId::new();
        let json = serde_json::to_string(&device_id).unwrap();
        assert!(json.contains("DEV_"));
        let back: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(device_id, back);
    }

    #[test]
    fn test_raw_uuid_is_accepted() {
        let raw = Uuid::new_v4();
        let room_id: RoomId = serde_json::from_str(&format!("\"{}\"", raw)).unwrap();
        assert_eq!(room_id.0, raw);
    }

    #[test]
    fn test_ids_in_hash_set() {
        let a = SensorId::new();
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(SensorId(a.0));
        set.insert(SensorId::new());
        assert_eq!(set.len(), 2);
    }
}
