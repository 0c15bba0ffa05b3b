//! Campaign execution-time estimation.
//!
//! Computes how long a batch of campaigns takes on a fixed pool of workers
//! under a two-tier policy: premium campaigns run first, grouped by priority
//! tier with the pool split fairly within each tier; standard campaigns then
//! share the whole pool through greedy earliest-available-worker assignment.
//!
//! Workers are a throughput model only. Nothing here runs concurrently.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Campaign`, `CampaignBatch`, `Estimate`,
//!   `TierEstimate`, `StandardEstimate`, `WorkerAssignment`
//! - **`classifier`**: Parses the textual batch format into campaigns
//! - **`validation`**: Batch integrity checks (duplicate names, empty pool)
//! - **`scheduler`**: Premium tier planning, standard load balancing and the
//!   `ExecutionEstimator` that combines them
//!
//! # Example
//!
//! ```
//! use campaign_schedule::classifier::parse_batch;
//! use campaign_schedule::scheduler::ExecutionEstimator;
//!
//! let batch = parse_batch("2 1\nA 5\nB 3\n").unwrap();
//! let estimate = ExecutionEstimator::new().estimate(&batch).unwrap();
//! assert_eq!(estimate.total_time(), 5);
//! ```

pub mod classifier;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
