//! Least-loaded housekeeper selection.
//!
//! A min-heap keyed by `(makespan, position)`. A housekeeper is popped,
//! its route is extended on the [`ScheduleBuilder`], and it is pushed back
//! with its new makespan. Entries are never changed while inside the heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::error::SolveError;
use crate::models::{Room, ScheduleBuilder, Tick};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Housekeepers ordered by ascending makespan, ties by input position.
#[derive(Debug, Clone)]
pub(crate) struct HousekeeperPool {
    heap: BinaryHeap<Reverse<(Tick, usize)>>,
}

impl HousekeeperPool {
    /// Pool over the builder's housekeepers at their current makespans.
    pub(crate) fn from_builder(builder: &ScheduleBuilder) -> Self {
        let heap = (0..builder.housekeeper_count())
            .map(|i| Reverse((builder.makespan(i).unwrap_or(0), i)))
            .collect();
        Self { heap }
    }

    /// Makespan of the least-loaded housekeeper.
    pub(crate) fn least_makespan(&self) -> Option<Tick> {
        self.heap.peek().map(|Reverse((m, _))| *m)
    }

    /// Gives a room to the least-loaded housekeeper.
    ///
    /// Returns the room's completion time. On failure the housekeeper
    /// goes back into the pool at its old makespan.
    pub(crate) fn clean(
        &mut self,
        builder: &mut ScheduleBuilder,
        room: &Room,
        duration: Tick,
    ) -> Result<Tick, SolveError> {
        let Reverse((makespan, hk)) = self.heap.pop().ok_or_else(|| {
            SolveError::invalid(ValidationError::new(
                ValidationErrorKind::NoHousekeepers,
                format!("No housekeeper available for room {}", room.num),
            ))
        })?;
        let completion = match builder.append(hk, room, duration) {
            Ok(completion) => completion,
            Err(err) => {
                self.heap.push(Reverse((makespan, hk)));
                return Err(err);
            }
        };
        self.heap.push(Reverse((completion, hk)));
        trace!(room = room.num, housekeeper = hk, completion, "room cleaned");
        Ok(completion)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
