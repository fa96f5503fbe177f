//! Room model.
//!
//! A room becomes dirty when its occupant checks out (`release`) and can
//! only be handed to the next guest after a housekeeper has cleaned it.
//! Room types form a total upgrade order: a room of type `t` may host any
//! guest who asked for a type `<= t`.

use serde::{Deserialize, Serialize};

use super::{RoomNum, RoomType, Tick};

/// A hotel room to be cleaned and occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number.
    pub num: RoomNum,
    /// Room category (higher = better, substitutes for any lower type).
    pub room_type: RoomType,
    /// Checkout time: earliest tick at which cleaning may start.
    pub release: Tick,
}

impl Room {
    /// Creates a new room.
    pub fn new(num: RoomNum, room_type: RoomType, release: Tick) -> Self {
        Self {
            num,
            room_type,
            release,
        }
    }

    /// Whether this room may host a guest who requested `requested`.
    #[inline]
    pub fn satisfies(&self, requested: RoomType) -> bool {
        self.room_type >= requested
    }
}
