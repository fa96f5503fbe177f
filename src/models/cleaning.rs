//! Cleaning duration model.
//!
//! Maps a room to the number of ticks a housekeeper needs to turn it over.
//! Either one constant duration for the whole hotel, or a per-type table
//! with a fallback for types that are not listed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Room, RoomType, Tick};

/// Cleaning duration function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningTime {
    /// Every room takes the same time.
    Constant(Tick),
    /// Duration depends on the room type.
    ByType {
        /// Explicit durations: room type → ticks.
        durations: BTreeMap<RoomType, Tick>,
        /// Duration for types without an explicit entry.
        default: Tick,
    },
}

impl CleaningTime {
    /// Constant duration for all rooms.
    pub fn constant(ticks: Tick) -> Self {
        Self::Constant(ticks)
    }

    /// Per-type table with a fallback duration.
    pub fn by_type(default: Tick) -> Self {
        Self::ByType {
            durations: BTreeMap::new(),
            default,
        }
    }

    /// Sets the duration for one room type.
    ///
    /// Turns a constant duration into a table whose fallback is the
    /// former constant.
    pub fn with_type(self, room_type: RoomType, ticks: Tick) -> Self {
        match self {
            Self::Constant(default) => {
                let mut durations = BTreeMap::new();
                durations.insert(room_type, ticks);
                Self::ByType { durations, default }
            }
            Self::ByType {
                mut durations,
                default,
            } => {
                durations.insert(room_type, ticks);
                Self::ByType { durations, default }
            }
        }
    }

    /// Duration for a room type.
    pub fn for_type(&self, room_type: RoomType) -> Tick {
        match self {
            Self::Constant(t) => *t,
            Self::ByType { durations, default } => {
                durations.get(&room_type).copied().unwrap_or(*default)
            }
        }
    }

    /// Duration for a room.
    #[inline]
    pub fn duration(&self, room: &Room) -> Tick {
        self.for_type(room.room_type)
    }

    /// Whether every configured duration is `>= 0`.
    pub fn is_non_negative(&self) -> bool {
        match self {
            Self::Constant(t) => *t >= 0,
            Self::ByType { durations, default } => {
                *default >= 0 && durations.values().all(|t| *t >= 0)
            }
        }
    }
}

impl Default for CleaningTime {
    fn default() -> Self {
        Self::Constant(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_duration() {
        let c = CleaningTime::constant(30);
        assert_eq!(c.duration(&Room::new(1, 0, 0)), 30);
        assert_eq!(c.duration(&Room::new(2, 5, 10)), 30);
    }

    #[test]
    fn test_by_type_fallback() {
        let c = CleaningTime::by_type(20).with_type(3, 45);
        assert_eq!(c.for_type(3), 45);
        assert_eq!(c.for_type(1), 20);
    }

    #[test]
    fn test_constant_with_type_keeps_fallback() {
        let c = CleaningTime::constant(10).with_type(2, 25);
        assert_eq!(c.for_type(2), 25);
        assert_eq!(c.for_type(0), 10);
    }

    #[test]
    fn test_negative_detection() {
        assert!(CleaningTime::constant(0).is_non_negative());
        assert!(!CleaningTime::constant(-1).is_non_negative());
        assert!(!CleaningTime::by_type(5).with_type(1, -3).is_non_negative());
    }
}
