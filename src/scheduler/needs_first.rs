//! Demand-aware housekeeping schedulers.
//!
//! # Algorithm
//!
//! 1. Resolve the minimum demand multiset (see [`crate::demand`]).
//! 2. Walk rooms in checkout order. A room whose type is still in demand
//!    is cleaned at once by the least-loaded housekeeper and one unit of
//!    its type is consumed; any other room joins a FIFO postpone queue.
//! 3. Drain the postpone queue through the least-loaded housekeeper.
//!
//! With [`IdlePolicy::Fill`], a room is also cleaned at once whenever the
//! least-loaded housekeeper would otherwise wait for its release. If that
//! room's type is in demand, the unit is consumed: any room of the type
//! serves the demand equally, so a later room of the same type is then
//! extra inventory.
//!
//! # Complexity
//! O(r log r + r log h + g log t) where g=guests, t=distinct room types.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::pool::HousekeeperPool;
use crate::demand::resolve_demand;
use crate::error::SolveError;
use crate::models::{Instance, Room, Schedule, ScheduleBuilder};
use crate::solver::Solver;
use crate::validation::ensure_valid;

/// What to do with an extra room when a housekeeper is idle anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdlePolicy {
    /// Postpone extra rooms even if someone is idle.
    #[default]
    Wait,
    /// Clean any room immediately if the least-loaded housekeeper is idle
    /// at its checkout.
    Fill,
}

/// Cleans the rooms guests need before the extra inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeedsFirstScheduler {
    idle_policy: IdlePolicy,
}

impl NeedsFirstScheduler {
    /// Creates the plain variant (extra rooms always wait).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the idle-fill variant.
    pub fn with_idle_fill() -> Self {
        Self::new().with_idle_policy(IdlePolicy::Fill)
    }

    /// Sets the idle policy.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }

    /// Current idle policy.
    pub fn idle_policy(&self) -> IdlePolicy {
        self.idle_policy
    }
}

impl Solver for NeedsFirstScheduler {
    type Output = Schedule;

    fn name(&self) -> String {
        match self.idle_policy {
            IdlePolicy::Wait => "NeedsFirst".to_string(),
            IdlePolicy::Fill => "NeedsFirstIdleFill".to_string(),
        }
    }

    fn solve(&self, instance: &Instance) -> Result<Schedule, SolveError> {
        ensure_valid(instance)?;

        let mut builder = ScheduleBuilder::for_instance(instance);
        if instance.rooms.is_empty() {
            return Ok(builder.freeze());
        }

        let mut demand = resolve_demand(&instance.rooms, &instance.guests)?;
        let mut pool = HousekeeperPool::from_builder(&builder);
        let mut postponed: VecDeque<&Room> = VecDeque::new();
        let mut idle_filled = 0usize;

        for room in instance.rooms_by_release() {
            let duration = instance.cleaning_duration(room);

            if self.idle_policy == IdlePolicy::Fill
                && pool.least_makespan().is_some_and(|m| m <= room.release)
            {
                let needed = demand.take(room.room_type);
                trace!(room = room.num, needed, "idle housekeeper fills room");
                idle_filled += 1;
                pool.clean(&mut builder, room, duration)?;
                continue;
            }

            if demand.take(room.room_type) {
                pool.clean(&mut builder, room, duration)?;
            } else {
                trace!(room = room.num, room_type = room.room_type, "room postponed");
                postponed.push_back(room);
            }
        }

        let postponed_count = postponed.len();
        while let Some(room) = postponed.pop_front() {
            pool.clean(&mut builder, room, instance.cleaning_duration(room))?;
        }

        let schedule = builder.freeze();
        debug!(
            solver = %self.name(),
            rooms = schedule.room_count(),
            housekeepers = instance.housekeeper_count(),
            postponed = postponed_count,
            idle_filled,
            makespan = schedule.makespan_max(),
            "schedule built"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CleaningTime, Guest, Tick};
    use crate::scheduler::FirstAvailableScheduler;

    fn instance(rooms: &[(u32, u32, Tick)], guests: &[(u32, Tick, u32)], staff: u32) -> Instance {
        Instance::new()
            .with_rooms(rooms.iter().map(|&(n, t, r)| Room::new(n, t, r)))
            .with_guests(guests.iter().map(|&(id, a, t)| Guest::new(id, a, t)))
            .with_staff(staff)
            .with_cleaning_time(CleaningTime::constant(10))
    }

    #[test]
    fn test_needed_rooms_before_extra() {
        // Room 1 (type 1) is extra; rooms 2 and 3 (type 2) are needed.
        let inst = instance(
            &[(1, 1, 0), (2, 2, 0), (3, 2, 5)],
            &[(1, 100, 2), (2, 100, 2)],
            1,
        );
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![2, 3, 1]);
        assert_eq!(s.completion(2), Some(10));
        assert_eq!(s.completion(3), Some(20));
        assert_eq!(s.completion(1), Some(30));
        assert!(s.covers(&inst));
    }

    #[test]
    fn test_postpone_queue_is_fifo() {
        let inst = instance(
            &[(1, 1, 0), (2, 1, 1), (3, 2, 2)],
            &[(1, 100, 2)],
            1,
        );
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![3, 1, 2]);
    }

    #[test]
    fn test_only_one_unit_per_guest() {
        // One guest wants type 1: the first type-1 room is needed, the
        // second is extra and waits behind the later needed type-2 room.
        let inst = instance(
            &[(1, 1, 0), (2, 1, 0), (3, 2, 0)],
            &[(1, 100, 1), (2, 100, 2)],
            1,
        );
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![1, 3, 2]);
    }

    #[test]
    fn test_forced_upgrade_room_is_needed() {
        // Two guests want type 1 but only one type-1 room exists, so the
        // type-2 room is part of the demand and the type-3 room is extra.
        let inst = instance(
            &[(1, 3, 0), (2, 1, 0), (3, 2, 0)],
            &[(1, 100, 1), (2, 100, 1)],
            1,
        );
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![2, 3, 1]);
    }

    #[test]
    fn test_needed_room_never_behind_later_extra_room() {
        let inst = instance(
            &[(1, 1, 0), (2, 1, 3), (3, 2, 6), (4, 1, 9), (5, 3, 12), (6, 2, 15)],
            &[(1, 50, 2), (2, 50, 3), (3, 50, 1)],
            2,
        );
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        let demand = resolve_demand(&inst.rooms, &inst.guests).unwrap();
        assert_eq!(demand.len(), 3);
        // Needed: 1 (type 1), 3 (type 2), 5 (type 3). Extra: 2, 4, 6.
        for needed in [1, 3, 5] {
            for extra in [2, 4, 6] {
                let (n, e) = (inst.room(needed).unwrap(), inst.room(extra).unwrap());
                if e.release >= n.release {
                    assert!(
                        s.start(needed).unwrap() <= s.start(extra).unwrap(),
                        "needed room {needed} started after extra room {extra}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_guests_behaves_like_postponing_everything() {
        let inst = instance(&[(1, 1, 10), (2, 1, 0)], &[], 1);
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        // All rooms are extra → drained in checkout order.
        assert_eq!(s.route(1).unwrap().rooms(), vec![2, 1]);
    }

    #[test]
    fn test_all_needed_matches_first_available() {
        let inst = instance(
            &[(1, 1, 5), (2, 1, 5), (3, 1, 20)],
            &[(1, 0, 1), (2, 0, 1), (3, 0, 1)],
            2,
        );
        let eager = FirstAvailableScheduler.solve(&inst).unwrap();
        let needs = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(eager, needs);
    }

    #[test]
    fn test_idle_fill_cleans_extra_room_when_idle() {
        // Housekeeper idle at t=0: plain variant postpones extra room 1,
        // idle-fill cleans it right away.
        let inst = instance(&[(1, 1, 0), (2, 2, 30)], &[(1, 100, 2)], 1);

        let plain = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(plain.route(1).unwrap().rooms(), vec![2, 1]);
        assert_eq!(plain.completion(2), Some(40));
        assert_eq!(plain.completion(1), Some(50));

        let fill = NeedsFirstScheduler::with_idle_fill().solve(&inst).unwrap();
        assert_eq!(fill.route(1).unwrap().rooms(), vec![1, 2]);
        assert_eq!(fill.completion(1), Some(10));
        assert_eq!(fill.completion(2), Some(40));
    }

    #[test]
    fn test_idle_fill_consumes_matching_demand() {
        // One guest wants type 1. Room 1 is cleaned by an idle housekeeper
        // and takes the only type-1 unit, so room 2 is extra and waits
        // behind the needed type-2 room 3.
        let inst = instance(
            &[(1, 1, 0), (2, 1, 5), (3, 2, 6)],
            &[(1, 100, 1), (2, 100, 2)],
            1,
        );
        let s = NeedsFirstScheduler::with_idle_fill().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![1, 3, 2]);
        assert_eq!(s.completion(3), Some(20));
        assert_eq!(s.completion(2), Some(30));
    }

    #[test]
    fn test_idle_fill_of_extra_room_keeps_demand() {
        // Idle-filled room 1 is type 3 and not in demand, so the type-1
        // unit survives and room 3 still jumps ahead of extra room 2.
        let inst = instance(&[(1, 3, 0), (2, 2, 2), (3, 1, 4)], &[(1, 100, 1)], 1);
        let s = NeedsFirstScheduler::with_idle_fill().solve(&inst).unwrap();
        assert_eq!(s.route(1).unwrap().rooms(), vec![1, 3, 2]);
    }

    #[test]
    fn test_idle_fill_with_idle_release_boundary() {
        // Housekeeper free at 10 and room 2 released at 10 counts as idle.
        let inst = instance(
            &[(1, 2, 0), (2, 1, 10), (3, 3, 11)],
            &[(1, 100, 2), (2, 100, 3)],
            1,
        );
        let fill = NeedsFirstScheduler::with_idle_fill().solve(&inst).unwrap();
        assert_eq!(fill.route(1).unwrap().rooms(), vec![1, 2, 3]);

        let plain = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert_eq!(plain.route(1).unwrap().rooms(), vec![1, 3, 2]);
    }

    #[test]
    fn test_zero_rooms_and_zero_housekeepers() {
        let inst = Instance::new();
        let s = NeedsFirstScheduler::new().solve(&inst).unwrap();
        assert!(s.is_empty());
        assert!(s.routes().is_empty());

        let inst = Instance::new().with_room(Room::new(1, 1, 0));
        assert!(matches!(
            NeedsFirstScheduler::with_idle_fill().solve(&inst),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(NeedsFirstScheduler::new().name(), "NeedsFirst");
        assert_eq!(NeedsFirstScheduler::with_idle_fill().name(), "NeedsFirstIdleFill");
        assert_eq!(NeedsFirstScheduler::new().idle_policy(), IdlePolicy::Wait);
    }
}
