//! Greedy housekeeping schedulers.
//!
//! All variants share one workload-balancing core: rooms are taken in
//! checkout order and handed to the housekeeper with the smallest
//! makespan. They differ in which room is offered next.
//!
//! | Scheduler | Label | Order |
//! |-----------|-------|-------|
//! | [`FirstAvailableScheduler`] | `FirstAvailable` | every room in checkout order |
//! | [`NeedsFirstScheduler::new`] | `NeedsFirst` | rooms in demand first, extra rooms after |
//! | [`NeedsFirstScheduler::with_idle_fill`] | `NeedsFirstIdleFill` | as above, but idle staff clean any room |
//!
//! # References
//!
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod first_available;
mod needs_first;
mod pool;

pub use first_available::FirstAvailableScheduler;
pub use needs_first::{IdlePolicy, NeedsFirstScheduler};
