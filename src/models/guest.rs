//! Guest model.

use serde::{Deserialize, Serialize};

use super::{GuestId, RoomType, Tick};

/// An arriving guest with a requested room type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    /// Unique guest identifier.
    pub id: GuestId,
    /// Arrival tick.
    pub arrival: Tick,
    /// Minimum acceptable room type.
    pub room_type: RoomType,
}

impl Guest {
    /// Creates a new guest.
    pub fn new(id: GuestId, arrival: Tick, room_type: RoomType) -> Self {
        Self {
            id,
            arrival,
            room_type,
        }
    }
}
