//! Solver contract, composition, and solution KPIs.
//!
//! Every producer of a schedule, an assignment, or a full solution
//! implements [`Solver`]. Heuristics, composed pipelines, and externally
//! backed optimizers are therefore interchangeable at the call site.
//!
//! # Usage
//!
//! ```
//! use u_housekeeping::assigner::FirstRoomHeuristic;
//! use u_housekeeping::models::{CleaningTime, Guest, Instance, Room};
//! use u_housekeeping::scheduler::NeedsFirstScheduler;
//! use u_housekeeping::solver::{ComposedSolver, Solver};
//!
//! let instance = Instance::new()
//!     .with_rooms([Room::new(1, 1, 0), Room::new(2, 2, 0)])
//!     .with_guest(Guest::new(1, 50, 2))
//!     .with_staff(1)
//!     .with_cleaning_time(CleaningTime::constant(20));
//!
//! let solver = ComposedSolver::builder()
//!     .scheduler(NeedsFirstScheduler::new())
//!     .heuristic(FirstRoomHeuristic)
//!     .build()
//!     .unwrap();
//!
//! let solution = solver.solve(&instance).unwrap();
//! assert_eq!(solver.name(), "NeedsFirst+FirstRoom");
//! // The room the guest needs is cleaned first.
//! assert_eq!(solution.schedule().completion(2), Some(20));
//! assert_eq!(solution.assignment().room_of(1), Some(2));
//! ```

mod composed;
mod kpi;

pub use composed::{ComposedSolver, ComposedSolverBuilder};
pub use kpi::SolutionKpi;

use std::fmt::Debug;

use crate::error::SolveError;
use crate::models::{Assignment, Instance, Schedule};

/// Anything that turns an instance into a result.
///
/// `Output` is a [`Schedule`], an [`Assignment`], or a
/// [`Solution`](crate::models::Solution). Implementations hold no per-call
/// state, so one solver may serve parallel `solve` calls.
pub trait Solver: Send + Sync + Debug {
    /// Result type.
    type Output;

    /// Human-readable label (e.g., "FirstAvailable").
    fn name(&self) -> String;

    /// Solves one instance.
    ///
    /// Fails before producing anything if the instance is invalid.
    fn solve(&self, instance: &Instance) -> Result<Self::Output, SolveError>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    type Output = S::Output;

    fn name(&self) -> String {
        (**self).name()
    }

    fn solve(&self, instance: &Instance) -> Result<Self::Output, SolveError> {
        (**self).solve(instance)
    }
}

/// Builds an assignment on top of an existing schedule.
///
/// Schedule-agnostic: the schedule may come from any [`Solver`].
pub trait AssignmentHeuristic: Send + Sync + Debug {
    /// Human-readable label (e.g., "FirstRoom").
    fn name(&self) -> String;

    /// Assigns guests to rooms given the rooms' completion times.
    fn assign(&self, instance: &Instance, schedule: &Schedule)
        -> Result<Assignment, SolveError>;
}

impl<H: AssignmentHeuristic + ?Sized> AssignmentHeuristic for Box<H> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn assign(
        &self,
        instance: &Instance,
        schedule: &Schedule,
    ) -> Result<Assignment, SolveError> {
        (**self).assign(instance, schedule)
    }
}
