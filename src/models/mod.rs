//! Hotel turnover domain models.
//!
//! Provides the data types for one operating day: rooms checking out,
//! guests arriving, housekeepers cleaning, and the schedule and assignment
//! a solver produces.
//!
//! # Domain Mappings
//!
//! | u-housekeeping | Scheduling term |
//! |----------------|-----------------|
//! | Room | Job with release date |
//! | Housekeeper | Parallel identical machine |
//! | Route | Machine sequence |
//! | Guest | Consumer of a finished job |
//!
//! # Time Representation
//! All times are integer ticks relative to the start of the day (t=0).

mod assignment;
mod cleaning;
mod guest;
mod housekeeper;
mod instance;
mod room;
mod schedule;
mod solution;

pub use assignment::{Assignment, AssignmentBuilder};
pub use cleaning::CleaningTime;
pub use guest::Guest;
pub use housekeeper::Housekeeper;
pub use instance::Instance;
pub use room::Room;
pub use schedule::{Route, Schedule, ScheduleBuilder, Visit};
pub use solution::Solution;

/// Time unit.
pub type Tick = i64;

/// Room category. Higher types substitute for lower ones.
pub type RoomType = u32;

/// Room identifier.
pub type RoomNum = u32;

/// Guest identifier.
pub type GuestId = u32;

/// Housekeeper identifier.
pub type HousekeeperId = u32;
