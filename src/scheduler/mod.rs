//! Two-tier execution time estimation.
//!
//! Premium campaigns run first, one priority tier at a time with the worker
//! pool split fairly inside each tier. Standard campaigns then share the
//! whole pool through greedy earliest-available-worker assignment.
//!
//! # Components
//!
//! - `plan_premium_tiers`: per-tier durations, ascending priority
//! - `balance_standard`: list scheduling of standard campaigns
//! - `ExecutionEstimator`: validation plus both phases, configurable
//!   worker slots per core
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

mod estimator;
mod premium;
mod standard;

pub use estimator::{calculate_execution_time, ExecutionEstimator, DEFAULT_SLOTS_PER_CORE};
pub use premium::plan_premium_tiers;
pub use standard::balance_standard;
