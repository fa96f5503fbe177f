//! Housekeeper model.
//!
//! A housekeeper is identity only. Its route and makespan are owned by the
//! [`Schedule`](super::Schedule) being built, so that a single schedule
//! carries all mutable state of a solve call.

use serde::{Deserialize, Serialize};

use super::HousekeeperId;

/// A member of the housekeeping staff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Housekeeper {
    /// Unique housekeeper identifier.
    pub id: HousekeeperId,
    /// Human-readable name.
    pub name: String,
}

impl Housekeeper {
    /// Creates a housekeeper with an empty name.
    pub fn new(id: HousekeeperId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    /// Sets the housekeeper name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_housekeeper_builder() {
        let h = Housekeeper::new(7).with_name("Ana");
        assert_eq!(h.id, 7);
        assert_eq!(h.name, "Ana");
        assert!(Housekeeper::new(1).name.is_empty());
    }
}
