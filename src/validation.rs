//! Input validation for turnover instances.
//!
//! Checks structural preconditions before any solver touches a schedule
//! or assignment. Detects:
//! - Duplicate room, guest, or housekeeper IDs
//! - Negative ticks and negative cleaning durations
//! - More guests than rooms
//! - Rooms to clean but no housekeepers
//! - Requests that no upgrade chain can satisfy
//! - Release times and cleaning durations whose schedule would leave the
//!   tick range
//!
//! # Upgrade feasibility
//! Since any room of type `>= t` serves a request for `t`, every request
//! can be met iff for each type `t` the guests requesting `>= t` do not
//! outnumber the rooms of type `>= t` (Hall's condition on nested sets).

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::warn;

use crate::error::SolveError;
use crate::models::{Instance, RoomType, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A release or arrival tick is negative.
    NegativeTime,
    /// The cleaning time function yields a negative duration.
    NegativeDuration,
    /// Rooms exist but nobody can clean them.
    NoHousekeepers,
    /// More guests than rooms.
    TooManyGuests,
    /// Some request has no feasible upward type.
    UnsatisfiableRequest,
    /// Latest release plus all cleaning durations does not fit in a tick.
    TickOverflow,
    /// A schedule handed to an assignment heuristic does not cover the
    /// instance's rooms.
    ScheduleMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a turnover instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_nums = HashSet::new();
    for r in &instance.rooms {
        if !room_nums.insert(r.num) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room number: {}", r.num),
            ));
        }
        if r.release < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTime,
                format!("Room {} has negative release time {}", r.num, r.release),
            ));
        }
    }

    let mut guest_ids = HashSet::new();
    for g in &instance.guests {
        if !guest_ids.insert(g.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate guest ID: {}", g.id),
            ));
        }
        if g.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTime,
                format!("Guest {} has negative arrival time {}", g.id, g.arrival),
            ));
        }
    }

    let mut hk_ids = HashSet::new();
    for h in &instance.housekeepers {
        if !hk_ids.insert(h.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate housekeeper ID: {}", h.id),
            ));
        }
    }

    if !instance.cleaning_time.is_non_negative() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            "Cleaning time contains a negative duration",
        ));
    }

    if instance.housekeepers.is_empty() && !instance.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoHousekeepers,
            format!(
                "{} rooms to clean but no housekeepers",
                instance.rooms.len()
            ),
        ));
    }

    if instance.guests.len() > instance.rooms.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyGuests,
            format!(
                "{} guests but only {} rooms",
                instance.guests.len(),
                instance.rooms.len()
            ),
        ));
    } else if let Some(t) = first_unsatisfiable_type(instance) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsatisfiableRequest,
            format!("Not enough rooms of type {t} or above for the guests requesting them"),
        ));
    }

    if schedule_horizon(instance).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TickOverflow,
            "Latest release plus total cleaning time exceeds the tick range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates and converts failures into [`SolveError::InvalidInput`].
pub fn ensure_valid(instance: &Instance) -> Result<(), SolveError> {
    validate_instance(instance).map_err(|errors| {
        warn!(
            errors = errors.len(),
            rooms = instance.room_count(),
            guests = instance.guest_count(),
            housekeepers = instance.housekeeper_count(),
            "rejected invalid instance"
        );
        SolveError::InvalidInput(errors)
    })
}

/// Upper bound on any completion a list schedule can reach: the latest
/// release plus every cleaning duration. `None` if it overflows.
fn schedule_horizon(instance: &Instance) -> Option<Tick> {
    let latest = instance
        .rooms
        .iter()
        .map(|r| r.release.max(0))
        .max()
        .unwrap_or(0);
    instance.rooms.iter().try_fold(latest, |acc, r| {
        acc.checked_add(instance.cleaning_duration(r).max(0))
    })
}

/// Highest type `t` at which guests requesting `>= t` outnumber rooms of
/// type `>= t`, scanning from the top.
fn first_unsatisfiable_type(instance: &Instance) -> Option<RoomType> {
    // type → (rooms of exactly that type, guests requesting exactly that type)
    let mut counts: BTreeMap<RoomType, (usize, usize)> = BTreeMap::new();
    for r in &instance.rooms {
        counts.entry(r.room_type).or_default().0 += 1;
    }
    for g in &instance.guests {
        counts.entry(g.room_type).or_default().1 += 1;
    }

    let mut rooms_above = 0;
    let mut guests_above = 0;
    for (&t, &(rooms, guests)) in counts.iter().rev() {
        rooms_above += rooms;
        guests_above += guests;
        if guests_above > rooms_above {
            return Some(t);
        }
    }
    None
}
