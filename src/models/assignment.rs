//! Guest-to-room assignment model.
//!
//! A one-to-one partial mapping: a room hosts at most one guest and a
//! guest occupies at most one room. Built through [`AssignmentBuilder`]
//! and frozen into a read-only [`Assignment`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{GuestId, RoomNum};
use crate::error::SolveError;

/// Append-only assignment under construction.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBuilder {
    by_guest: BTreeMap<GuestId, RoomNum>,
    by_room: BTreeMap<RoomNum, GuestId>,
}

impl AssignmentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a guest in a room.
    ///
    /// # Errors
    /// `AssignmentConflict` if the room is taken or the guest already placed.
    pub fn assign(&mut self, guest: GuestId, room: RoomNum) -> Result<(), SolveError> {
        if let Some(other) = self.by_room.get(&room) {
            return Err(SolveError::AssignmentConflict(format!(
                "room {room} already hosts guest {other}"
            )));
        }
        if let Some(other) = self.by_guest.get(&guest) {
            return Err(SolveError::AssignmentConflict(format!(
                "guest {guest} already occupies room {other}"
            )));
        }
        self.by_guest.insert(guest, room);
        self.by_room.insert(room, guest);
        Ok(())
    }

    /// Whether a room is still free.
    pub fn is_room_open(&self, room: RoomNum) -> bool {
        !self.by_room.contains_key(&room)
    }

    /// Whether a guest already has a room.
    pub fn is_guest_assigned(&self, guest: GuestId) -> bool {
        self.by_guest.contains_key(&guest)
    }

    /// Ends construction.
    pub fn freeze(self) -> Assignment {
        Assignment {
            by_guest: self.by_guest,
            by_room: self.by_room,
        }
    }
}

/// A completed, read-only assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    by_guest: BTreeMap<GuestId, RoomNum>,
    by_room: BTreeMap<RoomNum, GuestId>,
}

impl Assignment {
    /// Whether no guest occupies the room.
    pub fn is_room_open(&self, room: RoomNum) -> bool {
        !self.by_room.contains_key(&room)
    }

    /// Whether the guest has a room.
    pub fn is_guest_assigned(&self, guest: GuestId) -> bool {
        self.by_guest.contains_key(&guest)
    }

    /// Guest occupying a room.
    pub fn guest_in(&self, room: RoomNum) -> Option<GuestId> {
        self.by_room.get(&room).copied()
    }

    /// Room of a guest.
    pub fn room_of(&self, guest: GuestId) -> Option<RoomNum> {
        self.by_guest.get(&guest).copied()
    }

    /// `(guest, room)` pairs ordered by guest id.
    pub fn pairs(&self) -> impl Iterator<Item = (GuestId, RoomNum)> + '_ {
        self.by_guest.iter().map(|(&g, &r)| (g, r))
    }

    /// Number of placed guests.
    pub fn len(&self) -> usize {
        self.by_guest.len()
    }

    /// Whether nobody is placed.
    pub fn is_empty(&self) -> bool {
        self.by_guest.is_empty()
    }
}
