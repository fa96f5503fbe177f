//! Problem instance: one operating day.
//!
//! Bundles the rooms, guests, housekeepers, and cleaning duration function
//! the solvers read. Solvers never mutate an instance; every `solve` call
//! builds its own schedule and assignment.

use serde::{Deserialize, Serialize};

use super::{CleaningTime, Guest, Housekeeper, Room, RoomNum, Tick};

/// Input for a single simulated day.
///
/// # Example
///
/// ```
/// use u_housekeeping::models::{CleaningTime, Guest, Housekeeper, Instance, Room};
///
/// let instance = Instance::new()
///     .with_room(Room::new(1, 1, 5))
///     .with_room(Room::new(2, 2, 5))
///     .with_guest(Guest::new(1, 30, 1))
///     .with_housekeeper(Housekeeper::new(1).with_name("A"))
///     .with_cleaning_time(CleaningTime::constant(10));
///
/// assert_eq!(instance.room_count(), 2);
/// assert_eq!(instance.cleaning_duration(&instance.rooms[0]), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Rooms in input order.
    pub rooms: Vec<Room>,
    /// Guests in input order.
    pub guests: Vec<Guest>,
    /// Housekeepers in input order (also the tie-break order).
    pub housekeepers: Vec<Housekeeper>,
    /// Cleaning duration function.
    pub cleaning_time: CleaningTime,
}

impl Instance {
    /// Creates an empty instance with unit cleaning time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds rooms.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = Room>) -> Self {
        self.rooms.extend(rooms);
        self
    }

    /// Adds a guest.
    pub fn with_guest(mut self, guest: Guest) -> Self {
        self.guests.push(guest);
        self
    }

    /// Adds guests.
    pub fn with_guests(mut self, guests: impl IntoIterator<Item = Guest>) -> Self {
        self.guests.extend(guests);
        self
    }

    /// Adds a housekeeper.
    pub fn with_housekeeper(mut self, housekeeper: Housekeeper) -> Self {
        self.housekeepers.push(housekeeper);
        self
    }

    /// Adds `n` anonymous housekeepers with ids `1..=n` after the existing ones.
    pub fn with_staff(mut self, n: u32) -> Self {
        let base = self.housekeepers.len() as u32;
        self.housekeepers
            .extend((1..=n).map(|i| Housekeeper::new(base + i)));
        self
    }

    /// Sets the cleaning duration function.
    pub fn with_cleaning_time(mut self, cleaning_time: CleaningTime) -> Self {
        self.cleaning_time = cleaning_time;
        self
    }

    /// Cleaning duration of a room.
    #[inline]
    pub fn cleaning_duration(&self, room: &Room) -> Tick {
        self.cleaning_time.duration(room)
    }

    /// Finds a room by number.
    pub fn room(&self, num: RoomNum) -> Option<&Room> {
        self.rooms.iter().find(|r| r.num == num)
    }

    /// Rooms sorted by checkout time. Ties keep input order.
    pub fn rooms_by_release(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().collect();
        rooms.sort_by_key(|r| r.release);
        rooms
    }

    /// Guests sorted by arrival. Ties keep input order.
    pub fn guests_by_arrival(&self) -> Vec<&Guest> {
        let mut guests: Vec<&Guest> = self.guests.iter().collect();
        guests.sort_by_key(|g| g.arrival);
        guests
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of guests.
    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    /// Number of housekeepers.
    pub fn housekeeper_count(&self) -> usize {
        self.housekeepers.len()
    }
}
