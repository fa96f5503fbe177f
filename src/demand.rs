//! Room-type demand resolution.
//!
//! Computes the minimum demand multiset: one room type per guest, the
//! lowest type at or above the request that the inventory still holds
//! once earlier guests have taken theirs. When a requested type runs out
//! the guest is force-upgraded to the next type in stock.
//!
//! # Example
//!
//! ```
//! use u_housekeeping::demand::{resolve_types, TypeCounts};
//!
//! let inventory = TypeCounts::from_types([1, 1, 2, 3]);
//! let demand = resolve_types(&inventory, [1, 1, 1]).unwrap();
//! assert_eq!(demand, TypeCounts::from_types([1, 1, 2]));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SolveError;
use crate::models::{Guest, Room, RoomType};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Multiset of room types stored as type → remaining count.
///
/// Types with a zero count are removed, so `contains` is `count > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    counts: BTreeMap<RoomType, usize>,
}

impl TypeCounts {
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a multiset from a list of types.
    pub fn from_types(types: impl IntoIterator<Item = RoomType>) -> Self {
        let mut counts = Self::new();
        for t in types {
            counts.insert(t);
        }
        counts
    }

    /// Type multiset of a room list.
    pub fn of_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        Self::from_types(rooms.into_iter().map(|r| r.room_type))
    }

    /// Adds one unit of a type.
    pub fn insert(&mut self, room_type: RoomType) {
        *self.counts.entry(room_type).or_insert(0) += 1;
    }

    /// Remaining units of a type.
    pub fn count(&self, room_type: RoomType) -> usize {
        self.counts.get(&room_type).copied().unwrap_or(0)
    }

    /// Whether at least one unit of the type remains.
    pub fn contains(&self, room_type: RoomType) -> bool {
        self.count(room_type) > 0
    }

    /// Removes one unit of a type. Returns `false` if none was left.
    pub fn take(&mut self, room_type: RoomType) -> bool {
        match self.counts.get_mut(&room_type) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&room_type);
                true
            }
            None => false,
        }
    }

    /// Lowest type `>= room_type` still in stock.
    ///
    /// Same answer as probing `room_type, room_type + 1, ...` one by one,
    /// but stops when the stock above is exhausted.
    pub fn lowest_at_least(&self, room_type: RoomType) -> Option<RoomType> {
        self.counts.range(room_type..).next().map(|(&t, _)| t)
    }

    /// Total number of units.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether no units remain.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(type, count)` pairs by ascending type.
    pub fn iter(&self) -> impl Iterator<Item = (RoomType, usize)> + '_ {
        self.counts.iter().map(|(&t, &n)| (t, n))
    }
}

/// Resolves requested types against an inventory, in request order.
///
/// # Errors
/// `InvalidInput` if a request finds no type at or above it in stock.
pub fn resolve_types(
    inventory: &TypeCounts,
    requests: impl IntoIterator<Item = RoomType>,
) -> Result<TypeCounts, SolveError> {
    let mut stock = inventory.clone();
    let mut demand = TypeCounts::new();

    for requested in requests {
        let granted = stock.lowest_at_least(requested).ok_or_else(|| {
            SolveError::invalid(ValidationError::new(
                ValidationErrorKind::UnsatisfiableRequest,
                format!("No room of type {requested} or above left in stock"),
            ))
        })?;
        stock.take(granted);
        demand.insert(granted);
    }

    Ok(demand)
}

/// Minimum demand multiset for a day, guests taken in list order.
pub fn resolve_demand(rooms: &[Room], guests: &[Guest]) -> Result<TypeCounts, SolveError> {
    resolve_types(
        &TypeCounts::of_rooms(rooms),
        guests.iter().map(|g| g.room_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_counts_basics() {
        let mut c = TypeCounts::from_types([2, 1, 2]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.count(2), 2);
        assert!(c.contains(1));
        assert!(!c.contains(3));

        assert!(c.take(1));
        assert!(!c.contains(1));
        assert!(!c.take(1));
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![(2, 2)]);
    }

    #[test]
    fn test_lowest_at_least() {
        let c = TypeCounts::from_types([1, 3, 5]);
        assert_eq!(c.lowest_at_least(0), Some(1));
        assert_eq!(c.lowest_at_least(2), Some(3));
        assert_eq!(c.lowest_at_least(5), Some(5));
        assert_eq!(c.lowest_at_least(6), None);
    }

    #[test]
    fn test_no_upgrade_needed() {
        let inventory = TypeCounts::from_types([1, 1, 2, 3]);
        let demand = resolve_types(&inventory, [1, 1, 3]).unwrap();
        assert_eq!(demand, TypeCounts::from_types([1, 1, 3]));
    }

    #[test]
    fn test_forced_upgrade() {
        let inventory = TypeCounts::from_types([1, 1, 2, 3]);
        let demand = resolve_types(&inventory, [1, 1, 1]).unwrap();
        assert_eq!(demand, TypeCounts::from_types([1, 1, 2]));
    }

    #[test]
    fn test_upgrade_skips_missing_types() {
        let inventory = TypeCounts::from_types([0, 4, 4]);
        let demand = resolve_types(&inventory, [1, 2]).unwrap();
        assert_eq!(demand, TypeCounts::from_types([4, 4]));
    }

    #[test]
    fn test_request_order_with_exact_stock() {
        let inventory = TypeCounts::from_types([1, 2]);
        let a = resolve_types(&inventory, [1, 2]).unwrap();
        let b = resolve_types(&inventory, [2, 1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, TypeCounts::from_types([1, 2]));
    }

    #[test]
    fn test_exhausted_inventory_is_invalid_input() {
        let inventory = TypeCounts::from_types([1, 2]);
        let err = resolve_types(&inventory, [2, 2]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)));
    }

    #[test]
    fn test_inventory_untouched() {
        let inventory = TypeCounts::from_types([1, 1]);
        let _ = resolve_types(&inventory, [1]).unwrap();
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_resolve_demand_from_models() {
        let rooms = vec![Room::new(1, 1, 0), Room::new(2, 1, 0), Room::new(3, 2, 0)];
        let guests = vec![Guest::new(1, 0, 1), Guest::new(2, 0, 1), Guest::new(3, 0, 1)];
        let demand = resolve_demand(&rooms, &guests).unwrap();
        assert_eq!(demand, TypeCounts::from_types([1, 1, 2]));
    }
}
