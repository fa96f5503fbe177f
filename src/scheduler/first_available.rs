//! First-available (eager) housekeeping scheduler.
//!
//! # Algorithm
//!
//! 1. Sort rooms by checkout time (ties keep input order).
//! 2. Give each room to the housekeeper with the smallest makespan.
//!
//! Classic online list scheduling. With a constant cleaning time it
//! minimizes the sum of availability intervals (completion - release).
//!
//! # Complexity
//! O(r log r + r log h) where r=rooms, h=housekeepers.
//!
//! # Reference
//! Graham (1966), "Bounds for certain multiprocessing anomalies"

use tracing::debug;

use super::pool::HousekeeperPool;
use crate::error::SolveError;
use crate::models::{Instance, Schedule, ScheduleBuilder};
use crate::solver::Solver;
use crate::validation::ensure_valid;

/// Cleans rooms in checkout order, each by the least-loaded housekeeper.
///
/// # Example
///
/// ```
/// use u_housekeeping::models::{CleaningTime, Instance, Room};
/// use u_housekeeping::scheduler::FirstAvailableScheduler;
/// use u_housekeeping::solver::Solver;
///
/// let instance = Instance::new()
///     .with_rooms([Room::new(1, 1, 5), Room::new(2, 1, 5), Room::new(3, 1, 20)])
///     .with_staff(2)
///     .with_cleaning_time(CleaningTime::constant(10));
///
/// let schedule = FirstAvailableScheduler.solve(&instance).unwrap();
/// assert_eq!(schedule.completion(1), Some(15));
/// assert_eq!(schedule.completion(2), Some(15));
/// assert_eq!(schedule.completion(3), Some(30));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailableScheduler;

impl FirstAvailableScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for FirstAvailableScheduler {
    type Output = Schedule;

    fn name(&self) -> String {
        "FirstAvailable".to_string()
    }

    fn solve(&self, instance: &Instance) -> Result<Schedule, SolveError> {
        ensure_valid(instance)?;

        let mut builder = ScheduleBuilder::for_instance(instance);
        let mut pool = HousekeeperPool::from_builder(&builder);
        for room in instance.rooms_by_release() {
            pool.clean(&mut builder, room, instance.cleaning_duration(room))?;
        }

        let schedule = builder.freeze();
        debug!(
            solver = "FirstAvailable",
            rooms = schedule.room_count(),
            housekeepers = instance.housekeeper_count(),
            makespan = schedule.makespan_max(),
            "schedule built"
        );
        Ok(schedule)
    }
}
