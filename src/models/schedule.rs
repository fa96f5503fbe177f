//! Housekeeping schedule (solution) model.
//!
//! A schedule gives every housekeeper an ordered route of rooms and every
//! room a completion time. Routes are grown only through
//! [`ScheduleBuilder::append`]; [`ScheduleBuilder::freeze`] consumes the
//! builder and hands back a read-only [`Schedule`].
//!
//! # Timing
//!
//! ```text
//! completion(room) = max(previous completion on the route, release(room)) + duration(room)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{Housekeeper, HousekeeperId, Instance, Room, RoomNum, Tick};
use crate::error::SolveError;

/// One cleaning job on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Cleaned room.
    pub room_num: RoomNum,
    /// Tick at which cleaning starts.
    pub start: Tick,
    /// Tick at which cleaning finishes.
    pub completion: Tick,
}

impl Visit {
    /// Cleaning duration (completion - start).
    #[inline]
    pub fn duration(&self) -> Tick {
        self.completion - self.start
    }
}

/// A housekeeper's ordered list of cleaning jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Owning housekeeper.
    pub housekeeper_id: HousekeeperId,
    /// Jobs in execution order.
    pub visits: Vec<Visit>,
}

impl Route {
    fn new(housekeeper_id: HousekeeperId) -> Self {
        Self {
            housekeeper_id,
            visits: Vec::new(),
        }
    }

    /// Completion of the last job, 0 if the route is empty.
    pub fn makespan(&self) -> Tick {
        self.visits.last().map(|v| v.completion).unwrap_or(0)
    }

    /// Room numbers in execution order.
    pub fn rooms(&self) -> Vec<RoomNum> {
        self.visits.iter().map(|v| v.room_num).collect()
    }

    /// Total time spent cleaning.
    pub fn busy_time(&self) -> Tick {
        self.visits.iter().map(Visit::duration).sum()
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether the route has no jobs.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

/// Append-only schedule under construction.
///
/// Housekeepers are addressed by their position in the instance list.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    routes: Vec<Route>,
    index: BTreeMap<RoomNum, (usize, usize)>,
}

impl ScheduleBuilder {
    /// Creates a builder with one empty route per housekeeper.
    pub fn new(housekeepers: &[Housekeeper]) -> Self {
        Self {
            routes: housekeepers.iter().map(|h| Route::new(h.id)).collect(),
            index: BTreeMap::new(),
        }
    }

    /// Creates a builder for an instance's staff.
    pub fn for_instance(instance: &Instance) -> Self {
        Self::new(&instance.housekeepers)
    }

    /// Appends a room to a housekeeper's route.
    ///
    /// Cleaning starts once the housekeeper is free and the room has been
    /// released. Returns the new makespan of that housekeeper.
    ///
    /// # Errors
    /// `ScheduleConflict` if the housekeeper index is out of range, the
    /// room is already on some route, or the completion does not fit in a
    /// [`Tick`]. A failed append leaves the builder unchanged.
    pub fn append(
        &mut self,
        housekeeper: usize,
        room: &Room,
        duration: Tick,
    ) -> Result<Tick, SolveError> {
        let hk_count = self.routes.len();
        let route = self.routes.get_mut(housekeeper).ok_or_else(|| {
            SolveError::ScheduleConflict(format!(
                "housekeeper index {housekeeper} out of range ({hk_count} housekeepers)"
            ))
        })?;
        if self.index.contains_key(&room.num) {
            return Err(SolveError::ScheduleConflict(format!(
                "room {} is already scheduled",
                room.num
            )));
        }

        let start = route.makespan().max(room.release);
        let completion = start.checked_add(duration).ok_or_else(|| {
            SolveError::ScheduleConflict(format!(
                "room {} completion overflows (start {start}, duration {duration})",
                room.num
            ))
        })?;
        self.index
            .insert(room.num, (housekeeper, route.visits.len()));
        route.visits.push(Visit {
            room_num: room.num,
            start,
            completion,
        });
        Ok(completion)
    }

    /// Current makespan of a housekeeper (by position).
    pub fn makespan(&self, housekeeper: usize) -> Option<Tick> {
        self.routes.get(housekeeper).map(Route::makespan)
    }

    /// Number of housekeepers.
    pub fn housekeeper_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of rooms scheduled so far.
    pub fn room_count(&self) -> usize {
        self.index.len()
    }

    /// Ends construction.
    pub fn freeze(self) -> Schedule {
        Schedule {
            routes: self.routes,
            index: self.index,
        }
    }
}

/// A completed, read-only housekeeping schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    routes: Vec<Route>,
    index: BTreeMap<RoomNum, (usize, usize)>,
}

impl Schedule {
    /// All routes, in housekeeper input order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route of a housekeeper.
    pub fn route(&self, housekeeper_id: HousekeeperId) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.housekeeper_id == housekeeper_id)
    }

    /// Makespan of a housekeeper.
    pub fn makespan(&self, housekeeper_id: HousekeeperId) -> Option<Tick> {
        self.route(housekeeper_id).map(Route::makespan)
    }

    /// Latest completion across all housekeepers (0 if nothing scheduled).
    pub fn makespan_max(&self) -> Tick {
        self.routes.iter().map(Route::makespan).max().unwrap_or(0)
    }

    /// Difference between the busiest and the least busy housekeeper.
    pub fn makespan_spread(&self) -> Tick {
        let min = self.routes.iter().map(Route::makespan).min().unwrap_or(0);
        self.makespan_max() - min
    }

    fn visit(&self, num: RoomNum) -> Option<&Visit> {
        let &(route, pos) = self.index.get(&num)?;
        self.routes.get(route)?.visits.get(pos)
    }

    /// Tick at which a room is clean.
    pub fn completion(&self, num: RoomNum) -> Option<Tick> {
        self.visit(num).map(|v| v.completion)
    }

    /// Tick at which cleaning of a room starts.
    pub fn start(&self, num: RoomNum) -> Option<Tick> {
        self.visit(num).map(|v| v.start)
    }

    /// Housekeeper who cleans a room.
    pub fn housekeeper_of(&self, num: RoomNum) -> Option<HousekeeperId> {
        let &(route, _) = self.index.get(&num)?;
        self.routes.get(route).map(|r| r.housekeeper_id)
    }

    /// Room numbers by ascending completion, ties by room number.
    pub fn rooms_by_completion(&self) -> Vec<RoomNum> {
        let mut rooms: Vec<(Tick, RoomNum)> = self
            .routes
            .iter()
            .flat_map(|r| r.visits.iter().map(|v| (v.completion, v.room_num)))
            .collect();
        rooms.sort_unstable();
        rooms.into_iter().map(|(_, num)| num).collect()
    }

    /// Sum of completion times over all rooms, saturating at `Tick::MAX`.
    pub fn total_completion(&self) -> Tick {
        self.routes
            .iter()
            .flat_map(|r| r.visits.iter())
            .fold(0, |acc: Tick, v| acc.saturating_add(v.completion))
    }

    /// Whether every instance room is on exactly one route exactly once,
    /// and no foreign room appears.
    pub fn covers(&self, instance: &Instance) -> bool {
        let mut seen = HashSet::new();
        for visit in self.routes.iter().flat_map(|r| r.visits.iter()) {
            if !seen.insert(visit.room_num) {
                return false;
            }
        }
        seen.len() == instance.rooms.len() && instance.rooms.iter().all(|r| seen.contains(&r.num))
    }

    /// Number of scheduled rooms.
    pub fn room_count(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Housekeeper> {
        vec![Housekeeper::new(1), Housekeeper::new(2)]
    }

    fn sample_schedule() -> Schedule {
        let mut b = ScheduleBuilder::new(&staff());
        b.append(0, &Room::new(1, 1, 5), 10).unwrap();
        b.append(1, &Room::new(2, 1, 5), 10).unwrap();
        b.append(0, &Room::new(3, 2, 20), 10).unwrap();
        b.freeze()
    }

    #[test]
    fn test_append_waits_for_release_and_previous_job() {
        let mut b = ScheduleBuilder::new(&staff());
        assert_eq!(b.append(0, &Room::new(1, 1, 5), 10).unwrap(), 15);
        // Housekeeper busy until 15, room released at 8 → starts at 15.
        assert_eq!(b.append(0, &Room::new(2, 1, 8), 10).unwrap(), 25);
        // Room released at 40 → housekeeper idles until 40.
        assert_eq!(b.append(0, &Room::new(3, 1, 40), 10).unwrap(), 50);
        assert_eq!(b.makespan(0), Some(50));
        assert_eq!(b.makespan(1), Some(0));
        assert_eq!(b.room_count(), 3);
    }

    #[test]
    fn test_append_rejects_duplicate_room() {
        let mut b = ScheduleBuilder::new(&staff());
        b.append(0, &Room::new(1, 1, 0), 10).unwrap();
        let err = b.append(1, &Room::new(1, 1, 0), 10).unwrap_err();
        assert!(matches!(err, SolveError::ScheduleConflict(_)));
    }

    #[test]
    fn test_append_rejects_unknown_housekeeper() {
        let mut b = ScheduleBuilder::new(&staff());
        let err = b.append(5, &Room::new(1, 1, 0), 10).unwrap_err();
        assert!(matches!(err, SolveError::ScheduleConflict(_)));
        assert_eq!(b.room_count(), 0);
    }

    #[test]
    fn test_append_rejects_completion_overflow() {
        let mut b = ScheduleBuilder::new(&staff());
        let err = b
            .append(0, &Room::new(1, 1, Tick::MAX - 5), 10)
            .unwrap_err();
        assert!(matches!(err, SolveError::ScheduleConflict(_)));
        assert_eq!(b.room_count(), 0);
        assert_eq!(b.makespan(0), Some(0));
        // Builder stays usable.
        assert_eq!(b.append(0, &Room::new(1, 1, 0), 10).unwrap(), 10);
    }

    #[test]
    fn test_total_completion_saturates() {
        let mut b = ScheduleBuilder::new(&staff());
        b.append(0, &Room::new(1, 1, Tick::MAX - 10), 10).unwrap();
        b.append(1, &Room::new(2, 1, Tick::MAX - 10), 10).unwrap();
        assert_eq!(b.freeze().total_completion(), Tick::MAX);
    }

    #[test]
    fn test_schedule_queries() {
        let s = sample_schedule();
        assert_eq!(s.completion(1), Some(15));
        assert_eq!(s.completion(3), Some(30));
        assert_eq!(s.start(3), Some(20));
        assert_eq!(s.housekeeper_of(2), Some(2));
        assert_eq!(s.makespan(1), Some(30));
        assert_eq!(s.makespan(2), Some(15));
        assert_eq!(s.makespan(9), None);
        assert_eq!(s.makespan_max(), 30);
        assert_eq!(s.makespan_spread(), 15);
        assert_eq!(s.total_completion(), 60);
        assert_eq!(s.completion(42), None);
    }

    #[test]
    fn test_rooms_by_completion_ties_by_number() {
        let s = sample_schedule();
        assert_eq!(s.rooms_by_completion(), vec![1, 2, 3]);
    }

    #[test]
    fn test_route_accessors() {
        let s = sample_schedule();
        let r = s.route(1).unwrap();
        assert_eq!(r.rooms(), vec![1, 3]);
        assert_eq!(r.busy_time(), 20);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_covers() {
        let s = sample_schedule();
        let full = Instance::new().with_rooms([
            Room::new(1, 1, 5),
            Room::new(2, 1, 5),
            Room::new(3, 2, 20),
        ]);
        assert!(s.covers(&full));

        let missing = full.clone().with_room(Room::new(4, 1, 0));
        assert!(!s.covers(&missing));
    }

    #[test]
    fn test_empty_schedule() {
        let s = ScheduleBuilder::new(&staff()).freeze();
        assert!(s.is_empty());
        assert_eq!(s.makespan_max(), 0);
        assert_eq!(s.routes().len(), 2);
        assert!(s.rooms_by_completion().is_empty());
    }

    #[test]
    fn test_schedule_json_roundtrip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
