//! Error taxonomy for solvers.
//!
//! Every failure is a precondition violation and ends the `solve` call.
//! Nothing is retried and no partial schedule or assignment is returned.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while building or running a solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The instance violates a structural precondition.
    ///
    /// Raised before any schedule or assignment is touched. Carries every
    /// problem that validation detected.
    #[error("invalid instance: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A composed solver was assembled without a required collaborator.
    #[error("solver construction misuse: {0}")]
    ConstructionMisuse(String),

    /// A schedule builder was asked to do something that breaks route invariants.
    #[error("schedule conflict: {0}")]
    ScheduleConflict(String),

    /// An assignment builder was asked to reuse a room or a guest.
    #[error("assignment conflict: {0}")]
    AssignmentConflict(String),
}

impl SolveError {
    /// Single-problem `InvalidInput`.
    pub(crate) fn invalid(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }

    /// Validation errors, if this is an `InvalidInput`.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
