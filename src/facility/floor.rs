//! Floors

use crate::facility::collection::RoomCollection;
use crate::facility::room::Room;
use std::fmt;

/// One storey of a building
#[derive(Debug, Clone, Default)]
pub struct Floor {
    /// 1-based floor number
    pub number: usize,
    /// Ceiling height in metres
    pub height: f64,
    rooms: RoomCollection,
}

impl Floor {
    /// Create an empty floor
    pub fn new(number: usize, height: f64) -> Self {
        Self { number, height, rooms: RoomCollection::new() }
    }

    /// Append a room
    pub fn add_room(&mut self, room: Room) {
        self.rooms.add(room);
    }

    /// Room by 1-based number
    pub fn room(&self, number: usize) -> Option<&Room> {
        number.checked_sub(1).and_then(|i| self.rooms.get(i))
    }

    /// Room by 1-based number, mutably
    pub fn room_mut(&mut self, number: usize) -> Option<&mut Room> {
        number.checked_sub(1).and_then(|i| self.rooms.get_mut(i))
    }

    /// Rooms on this floor, in order
    pub fn rooms(&self) -> &RoomCollection {
        &self.rooms
    }

    /// Rooms on this floor, mutably
    pub fn rooms_mut(&mut self) -> &mut RoomCollection {
        &mut self.rooms
    }

    /// Number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor #{}, Height={}", self.number, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::room::RoomGeometry;

    #[test]
    fn test_rooms_are_one_based() {
        let mut floor = Floor::new(2, 5.0);
        floor.add_room(Room::new("R_2_1", RoomGeometry::new(3.0, 3.0)));
        floor.add_room(Room::new("R_2_2", RoomGeometry::new(4.0, 3.0)));

        assert!(floor.room(0).is_none());
        assert_eq!(floor.room(1).unwrap().name, "R_2_1");
        assert_eq!(floor.room(2).unwrap().name, "R_2_2");
        assert!(floor.room(3).is_none());
        assert_eq!(floor.room_count(), 2);
        assert_eq!(floor.rooms().get_by_name("R_2_2").unwrap().area(), 12.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Floor::new(1, 4.0).to_string(), "Floor #1, Height=4");
    }
}
