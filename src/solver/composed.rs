//! Composition of a schedule producer with an assignment producer.
//!
//! Two shapes:
//!
//! - **Sequential**: a scheduler followed by an [`AssignmentHeuristic`]
//!   that works on the schedule just produced.
//! - **Independent**: a scheduler and an assignment [`Solver`], each
//!   solved against the same instance.
//!
//! The composition adds no algorithm of its own. Its label joins the
//! component labels with `+`.

use tracing::debug;

use super::{AssignmentHeuristic, Solver};
use crate::error::SolveError;
use crate::models::{Assignment, Instance, Schedule, Solution};

#[derive(Debug)]
enum AssignmentSource {
    Heuristic(Box<dyn AssignmentHeuristic>),
    Solver(Box<dyn Solver<Output = Assignment>>),
}

/// Full solver built from a scheduler and an assignment producer.
#[derive(Debug)]
pub struct ComposedSolver {
    scheduler: Box<dyn Solver<Output = Schedule>>,
    assignment: AssignmentSource,
}

impl ComposedSolver {
    /// Starts a builder.
    pub fn builder() -> ComposedSolverBuilder {
        ComposedSolverBuilder::default()
    }

    /// Scheduler followed by a heuristic on its schedule.
    pub fn sequential(
        scheduler: impl Solver<Output = Schedule> + 'static,
        heuristic: impl AssignmentHeuristic + 'static,
    ) -> Self {
        Self {
            scheduler: Box::new(scheduler),
            assignment: AssignmentSource::Heuristic(Box::new(heuristic)),
        }
    }

    /// Scheduler and assignment solver run side by side.
    pub fn independent(
        scheduler: impl Solver<Output = Schedule> + 'static,
        assigner: impl Solver<Output = Assignment> + 'static,
    ) -> Self {
        Self {
            scheduler: Box::new(scheduler),
            assignment: AssignmentSource::Solver(Box::new(assigner)),
        }
    }

    /// Whether the assignment is built on this solver's own schedule.
    pub fn is_sequential(&self) -> bool {
        matches!(self.assignment, AssignmentSource::Heuristic(_))
    }
}

impl Solver for ComposedSolver {
    type Output = Solution;

    fn name(&self) -> String {
        let second = match &self.assignment {
            AssignmentSource::Heuristic(h) => h.name(),
            AssignmentSource::Solver(a) => a.name(),
        };
        format!("{}+{}", self.scheduler.name(), second)
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let schedule = self.scheduler.solve(instance)?;
        let assignment = match &self.assignment {
            AssignmentSource::Heuristic(h) => h.assign(instance, &schedule)?,
            AssignmentSource::Solver(a) => a.solve(instance)?,
        };

        let name = self.name();
        debug!(
            solver = %name,
            rooms = schedule.room_count(),
            guests = assignment.len(),
            makespan = schedule.makespan_max(),
            "solution built"
        );
        Ok(Solution::new(name, instance.clone(), schedule, assignment))
    }
}

/// Assembles a [`ComposedSolver`], rejecting incomplete compositions.
#[derive(Debug, Default)]
pub struct ComposedSolverBuilder {
    scheduler: Option<Box<dyn Solver<Output = Schedule>>>,
    heuristic: Option<Box<dyn AssignmentHeuristic>>,
    assigner: Option<Box<dyn Solver<Output = Assignment>>>,
}

impl ComposedSolverBuilder {
    /// Sets the schedule producer.
    pub fn scheduler(mut self, scheduler: impl Solver<Output = Schedule> + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Sets a heuristic that assigns on top of the produced schedule.
    pub fn heuristic(mut self, heuristic: impl AssignmentHeuristic + 'static) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Sets an assignment solver run independently of the scheduler.
    pub fn assigner(mut self, assigner: impl Solver<Output = Assignment> + 'static) -> Self {
        self.assigner = Some(Box::new(assigner));
        self
    }

    /// Builds the solver.
    ///
    /// # Errors
    /// `ConstructionMisuse` if the schedule producer is missing, if no
    /// assignment producer is set, or if both a heuristic and an assigner
    /// are set.
    pub fn build(self) -> Result<ComposedSolver, SolveError> {
        let scheduler = self.scheduler.ok_or_else(|| {
            SolveError::ConstructionMisuse("composed solver needs a scheduler".into())
        })?;
        let assignment = match (self.heuristic, self.assigner) {
            (Some(h), None) => AssignmentSource::Heuristic(h),
            (None, Some(a)) => AssignmentSource::Solver(a),
            (None, None) => {
                return Err(SolveError::ConstructionMisuse(
                    "composed solver needs an assignment heuristic or assigner".into(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(SolveError::ConstructionMisuse(
                    "composed solver takes a heuristic or an assigner, not both".into(),
                ))
            }
        };
        Ok(ComposedSolver {
            scheduler,
            assignment,
        })
    }
}
