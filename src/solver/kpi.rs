//! Solution quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest housekeeper makespan |
//! | Makespan Spread | Latest minus earliest housekeeper makespan |
//! | Total Completion | Sum of room completion ticks |
//! | Total Availability | Sum of (completion - release) over rooms |
//! | Guest Wait | Sum of max(0, ready - arrival) over assigned guests |
//! | Late Guests | Assigned guests whose room is ready after arrival |
//! | Upgrades | Assigned guests holding a higher type than requested |
//! | Avg Utilization | Mean of busy time / makespan per housekeeper |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{HousekeeperId, Solution, Tick};

/// Solution performance indicators.
///
/// All times are in ticks. Tick sums saturate at `Tick::MAX`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionKpi {
    /// Latest completion across all housekeepers.
    pub makespan: Tick,
    /// Busiest minus least busy housekeeper makespan.
    pub makespan_spread: Tick,
    /// Sum of room completion ticks.
    pub total_completion: Tick,
    /// Sum of (completion - release) over rooms.
    pub total_availability: Tick,
    /// Sum of max(0, ready - arrival) over assigned guests.
    pub total_guest_wait: Tick,
    /// Assigned guests whose room is ready after they arrive.
    pub late_guests: usize,
    /// Assigned guests holding a higher type than requested.
    pub upgrades: usize,
    /// Guests without a room.
    pub unassigned_guests: usize,
    /// Fraction of assigned guests whose room is ready on arrival.
    pub on_time_rate: f64,
    /// Average housekeeper utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-housekeeper utilization.
    pub utilization_by_housekeeper: BTreeMap<HousekeeperId, f64>,
}

impl SolutionKpi {
    /// Computes KPIs from a solution.
    pub fn calculate(solution: &Solution) -> Self {
        let instance = solution.instance();
        let schedule = solution.schedule();
        let assignment = solution.assignment();

        let total_availability: Tick = instance
            .rooms
            .iter()
            .filter_map(|r| schedule.completion(r.num).map(|c| c.saturating_sub(r.release)))
            .fold(0, Tick::saturating_add);

        let mut total_guest_wait: Tick = 0;
        let mut late_guests = 0;
        let mut upgrades = 0;
        let mut unassigned_guests = 0;
        for guest in &instance.guests {
            let Some(num) = assignment.room_of(guest.id) else {
                unassigned_guests += 1;
                continue;
            };
            if let Some(ready) = schedule.completion(num) {
                if ready > guest.arrival {
                    total_guest_wait =
                        total_guest_wait.saturating_add(ready.saturating_sub(guest.arrival));
                    late_guests += 1;
                }
            }
            if instance
                .room(num)
                .is_some_and(|r| r.room_type > guest.room_type)
            {
                upgrades += 1;
            }
        }

        let utilization_by_housekeeper: BTreeMap<HousekeeperId, f64> = schedule
            .routes()
            .iter()
            .map(|route| {
                let makespan = route.makespan();
                let u = if makespan > 0 {
                    route.busy_time() as f64 / makespan as f64
                } else {
                    0.0
                };
                (route.housekeeper_id, u)
            })
            .collect();
        let avg_utilization = if utilization_by_housekeeper.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_housekeeper.values().sum();
            sum / utilization_by_housekeeper.len() as f64
        };

        let assigned = instance.guests.len() - unassigned_guests;
        let on_time_rate = if assigned == 0 {
            1.0
        } else {
            (assigned - late_guests) as f64 / assigned as f64
        };

        Self {
            makespan: schedule.makespan_max(),
            makespan_spread: schedule.makespan_spread(),
            total_completion: schedule.total_completion(),
            total_availability,
            total_guest_wait,
            late_guests,
            upgrades,
            unassigned_guests,
            on_time_rate,
            avg_utilization,
            utilization_by_housekeeper,
        }
    }

    /// Whether every guest has a room and the total guest wait is at most `max_wait`.
    pub fn meets_thresholds(&self, max_wait: Tick) -> bool {
        self.unassigned_guests == 0 && self.total_guest_wait <= max_wait
    }
}
