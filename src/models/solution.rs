//! Full solution: instance, schedule, and assignment.

use serde::{Deserialize, Serialize};

use super::{Assignment, Guest, Instance, Schedule, Tick};

/// Immutable result of a full solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    solver: String,
    instance: Instance,
    schedule: Schedule,
    assignment: Assignment,
}

impl Solution {
    /// Bundles a solved day.
    pub fn new(
        solver: impl Into<String>,
        instance: Instance,
        schedule: Schedule,
        assignment: Assignment,
    ) -> Self {
        Self {
            solver: solver.into(),
            instance,
            schedule,
            assignment,
        }
    }

    /// Label of the producing solver.
    pub fn solver(&self) -> &str {
        &self.solver
    }

    /// Solved instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Housekeeping schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Guest assignment.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Tick at which a guest's room is clean, if the guest has one.
    pub fn ready_time(&self, guest: &Guest) -> Option<Tick> {
        let room = self.assignment.room_of(guest.id)?;
        self.schedule.completion(room)
    }

    /// Guests whose room is clean only after they arrive.
    pub fn waiting_guests(&self) -> Vec<&Guest> {
        self.instance
            .guests
            .iter()
            .filter(|g| self.ready_time(g).is_some_and(|t| t > g.arrival))
            .collect()
    }

    /// Splits into parts.
    pub fn into_parts(self) -> (Instance, Schedule, Assignment) {
        (self.instance, self.schedule, self.assignment)
    }
}
