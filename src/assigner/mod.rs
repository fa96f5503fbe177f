//! Guest-to-room assignment heuristics.
//!
//! Heuristics consume a finished [`Schedule`](crate::models::Schedule) and
//! the guest list. They do not care which solver produced the schedule.

mod first_room;

pub use first_room::{FirstRoomAssigner, FirstRoomHeuristic};
