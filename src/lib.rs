//! Hotel turnover-day housekeeping scheduling and room assignment.
//!
//! Rooms vacated in the morning must be cleaned by a small housekeeping
//! staff before arriving guests can take them. This crate builds a
//! cleaning schedule (which housekeeper cleans which room, and when) and
//! a guest-to-room assignment that respects requested room types, where
//! a higher type is always an acceptable upgrade.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `Guest`, `Housekeeper`,
//!   `CleaningTime`, `Instance`, `Schedule`, `Assignment`, `Solution`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative ticks,
//!   infeasible upgrade chains)
//! - **`demand`**: Resolution of guest requests into the room types that
//!   must be cleaned first
//! - **`scheduler`**: Greedy list schedulers (`FirstAvailable`, `NeedsFirst`)
//! - **`assigner`**: Guest assignment heuristics (`FirstRoom`)
//! - **`solver`**: The `Solver` contract, composition, and KPIs
//!
//! # Example
//!
//! ```
//! use u_housekeeping::assigner::FirstRoomHeuristic;
//! use u_housekeeping::models::{CleaningTime, Guest, Instance, Room};
//! use u_housekeeping::scheduler::FirstAvailableScheduler;
//! use u_housekeeping::solver::{ComposedSolver, SolutionKpi, Solver};
//!
//! let instance = Instance::new()
//!     .with_rooms([Room::new(101, 1, 0), Room::new(102, 2, 5), Room::new(103, 1, 20)])
//!     .with_guests([Guest::new(1, 30, 1), Guest::new(2, 25, 2)])
//!     .with_staff(2)
//!     .with_cleaning_time(CleaningTime::by_type(10).with_type(2, 20));
//!
//! let solver = ComposedSolver::sequential(FirstAvailableScheduler, FirstRoomHeuristic);
//! let solution = solver.solve(&instance).unwrap();
//! let kpi = SolutionKpi::calculate(&solution);
//!
//! assert_eq!(solution.schedule().completion(102), Some(25));
//! assert_eq!(solution.assignment().room_of(2), Some(102));
//! assert_eq!(kpi.late_guests, 0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"

pub mod assigner;
pub mod demand;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod validation;

pub use error::SolveError;
