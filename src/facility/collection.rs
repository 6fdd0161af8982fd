//! Ordered room collection with a name index

use crate::facility::room::Room;
use std::collections::HashMap;

/// Rooms addressable by position and by name
///
/// Adding a room whose name is already present keeps both rooms in order; the
/// name then resolves to the most recently added one.
#[derive(Debug, Clone, Default)]
pub struct RoomCollection {
    rooms: Vec<Room>,
    by_name: HashMap<String, usize>,
}

impl RoomCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a room
    pub fn add(&mut self, room: Room) {
        if !room.name.is_empty() {
            self.by_name.insert(room.name.clone(), self.rooms.len());
        }
        self.rooms.push(room);
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if there are no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room at a 0-based position
    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Room at a 0-based position, mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }

    /// Room by name
    pub fn get_by_name(&self, name: &str) -> Option<&Room> {
        self.position_of(name).map(|i| &self.rooms[i])
    }

    /// Replace the room at `index`, returning the previous one
    ///
    /// Out-of-range positions leave the collection unchanged and hand the room
    /// back as `Err`.
    pub fn set(&mut self, index: usize, room: Room) -> Result<Room, Room> {
        match self.rooms.get_mut(index) {
            Some(slot) => {
                let previous = std::mem::replace(slot, room);
                self.reindex();
                Ok(previous)
            }
            None => Err(room),
        }
    }

    /// Replace the room with the same name, or append it
    ///
    /// Returns the replaced room, if any.
    pub fn upsert_by_name(&mut self, room: Room) -> Option<Room> {
        match self.position_of(&room.name) {
            Some(index) => {
                let previous = std::mem::replace(&mut self.rooms[index], room);
                Some(previous)
            }
            None => {
                self.add(room);
                None
            }
        }
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    /// Iterate mutably in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Room> {
        self.rooms.iter_mut()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        match self.by_name.get(name) {
            Some(&i) if self.rooms.get(i).is_some_and(|r| r.name == name) => Some(i),
            // Index went stale through a rename via `iter_mut`/`get_mut`
            _ => self.rooms.iter().rposition(|r| r.name == name),
        }
    }

    fn reindex(&mut self) {
        self.by_name.clear();
        for (i, room) in self.rooms.iter().enumerate() {
            if !room.name.is_empty() {
                self.by_name.insert(room.name.clone(), i);
            }
        }
    }
}

impl FromIterator<Room> for RoomCollection {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        let mut collection = RoomCollection::new();
        for room in iter {
            collection.add(room);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a RoomCollection {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::room::RoomGeometry;

    fn room(name: &str, width: f64) -> Room {
        Room::new(name, RoomGeometry::new(width, 3.0))
    }

    #[test]
    fn test_index_and_name_lookup() {
        let rooms: RoomCollection = vec![room("A", 3.0), room("B", 4.0)].into_iter().collect();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.get(1).unwrap().name, "B");
        assert!(rooms.get(2).is_none());
        assert_eq!(rooms.get_by_name("A").unwrap().geometry.width, 3.0);
        assert!(rooms.get_by_name("C").is_none());
    }

    #[test]
    fn test_set_replaces_and_reindexes() {
        let mut rooms: RoomCollection = vec![room("A", 3.0), room("B", 4.0)].into_iter().collect();

        let previous = rooms.set(0, room("Z", 9.0)).unwrap();
        assert_eq!(previous.name, "A");
        assert!(rooms.get_by_name("A").is_none());
        assert_eq!(rooms.get_by_name("Z").unwrap().geometry.width, 9.0);

        let rejected = rooms.set(5, room("Q", 1.0)).unwrap_err();
        assert_eq!(rejected.name, "Q");
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn test_upsert_by_name() {
        let mut rooms = RoomCollection::new();
        assert!(rooms.upsert_by_name(room("A", 3.0)).is_none());
        assert!(rooms.upsert_by_name(room("B", 3.0)).is_none());

        let replaced = rooms.upsert_by_name(room("A", 7.0)).unwrap();
        assert_eq!(replaced.geometry.width, 3.0);
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.get(0).unwrap().geometry.width, 7.0);
    }

    #[test]
    fn test_lookup_survives_rename() {
        let mut rooms: RoomCollection = vec![room("A", 3.0)].into_iter().collect();
        rooms.get_mut(0).unwrap().name = "Renamed".to_string();

        assert!(rooms.get_by_name("A").is_none());
        assert!(rooms.get_by_name("Renamed").is_some());
    }

    #[test]
    fn test_duplicate_names_resolve_to_latest() {
        let mut rooms = RoomCollection::new();
        rooms.add(room("A", 3.0));
        rooms.add(room("A", 5.0));

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.get_by_name("A").unwrap().geometry.width, 5.0);
        assert_eq!(rooms.iter().count(), 2);
    }
}
