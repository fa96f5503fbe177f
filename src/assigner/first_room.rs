//! First-room assignment heuristic.
//!
//! # Algorithm
//!
//! 1. Sort guests by arrival (ties keep input order).
//! 2. Sort rooms by schedule completion (ties by room number).
//! 3. Each guest takes the earliest-completing open room of the lowest
//!    type at or above the request that still has an open room.
//!
//! Early arrivals get the rooms that are clean first, which keeps the
//! overlap between cleaning and occupancy small. Arrival versus
//! completion is not enforced here; see [`SolutionKpi`](crate::solver::SolutionKpi).
//!
//! # Complexity
//! O(g log g + r log r + g log t) where t=distinct room types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{debug, trace};

use crate::error::SolveError;
use crate::models::{Assignment, AssignmentBuilder, Instance, RoomNum, RoomType, Schedule};
use crate::solver::{AssignmentHeuristic, Solver};
use crate::validation::{ensure_valid, ValidationError, ValidationErrorKind};

/// Gives each arriving guest the first clean room that fits.
///
/// Works on any schedule, including one produced by an external solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRoomHeuristic;

impl FirstRoomHeuristic {
    /// Creates the heuristic.
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentHeuristic for FirstRoomHeuristic {
    fn name(&self) -> String {
        "FirstRoom".to_string()
    }

    fn assign(&self, instance: &Instance, schedule: &Schedule) -> Result<Assignment, SolveError> {
        ensure_valid(instance)?;
        if !schedule.covers(instance) {
            return Err(SolveError::invalid(ValidationError::new(
                ValidationErrorKind::ScheduleMismatch,
                format!(
                    "Schedule covers {} rooms, instance has {}",
                    schedule.room_count(),
                    instance.room_count()
                ),
            )));
        }

        let types: HashMap<RoomNum, RoomType> = instance
            .rooms
            .iter()
            .map(|r| (r.num, r.room_type))
            .collect();

        // type → open rooms in completion order
        let mut open: BTreeMap<RoomType, VecDeque<RoomNum>> = BTreeMap::new();
        for num in schedule.rooms_by_completion() {
            if let Some(&t) = types.get(&num) {
                open.entry(t).or_default().push_back(num);
            }
        }

        let mut builder = AssignmentBuilder::new();
        let mut upgrades = 0usize;
        for guest in instance.guests_by_arrival() {
            let Some((granted, num)) = open
                .range_mut(guest.room_type..)
                .find_map(|(&t, rooms)| rooms.pop_front().map(|num| (t, num)))
            else {
                return Err(SolveError::invalid(ValidationError::new(
                    ValidationErrorKind::UnsatisfiableRequest,
                    format!(
                        "No open room of type {} or above for guest {}",
                        guest.room_type, guest.id
                    ),
                )));
            };

            builder.assign(guest.id, num)?;
            if granted > guest.room_type {
                upgrades += 1;
            }
            trace!(
                guest = guest.id,
                room = num,
                requested = guest.room_type,
                granted,
                "guest placed"
            );
        }

        let assignment = builder.freeze();
        debug!(
            heuristic = "FirstRoom",
            guests = assignment.len(),
            upgrades,
            "assignment built"
        );
        Ok(assignment)
    }
}

/// Assignment solver: runs a scheduler, then [`FirstRoomHeuristic`] on
/// its schedule.
///
/// # Example
///
/// ```
/// use u_housekeeping::assigner::FirstRoomAssigner;
/// use u_housekeeping::models::{CleaningTime, Guest, Instance, Room};
/// use u_housekeeping::scheduler::FirstAvailableScheduler;
/// use u_housekeeping::solver::Solver;
///
/// let instance = Instance::new()
///     .with_rooms([Room::new(1, 1, 40), Room::new(2, 1, 0)])
///     .with_guest(Guest::new(1, 30, 1))
///     .with_staff(1)
///     .with_cleaning_time(CleaningTime::constant(10));
///
/// let assigner = FirstRoomAssigner::new(FirstAvailableScheduler);
/// let assignment = assigner.solve(&instance).unwrap();
/// assert_eq!(assigner.name(), "FirstAvailable+FirstRoom");
/// assert_eq!(assignment.room_of(1), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct FirstRoomAssigner<S> {
    scheduler: S,
}

impl<S: Solver<Output = Schedule>> FirstRoomAssigner<S> {
    /// Wraps a schedule solver.
    pub fn new(scheduler: S) -> Self {
        Self { scheduler }
    }

    /// Inner schedule solver.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Solver<Output = Schedule>> Solver for FirstRoomAssigner<S> {
    type Output = Assignment;

    fn name(&self) -> String {
        format!("{}+{}", self.scheduler.name(), FirstRoomHeuristic.name())
    }

    fn solve(&self, instance: &Instance) -> Result<Assignment, SolveError> {
        let schedule = self.scheduler.solve(instance)?;
        FirstRoomHeuristic.assign(instance, &schedule)
    }
}
