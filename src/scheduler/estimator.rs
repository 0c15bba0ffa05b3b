//! Execution time estimator.
//!
//! Runs the premium phase (tiers in ascending priority, one after another)
//! and then the standard phase on the full worker pool. The total is the
//! sum of every tier duration plus the standard-phase duration.

use tracing::{info, warn};

use super::{balance_standard, plan_premium_tiers};
use crate::error::{Error, Result};
use crate::models::{Campaign, CampaignBatch, Estimate};
use crate::validation::validate_campaigns;

/// Worker slots exposed by each core unless configured otherwise.
pub const DEFAULT_SLOTS_PER_CORE: u64 = 2;

/// Estimates total execution time for campaign batches.
///
/// # Example
///
/// ```
/// use campaign_schedule::models::{Campaign, CampaignBatch};
/// use campaign_schedule::scheduler::ExecutionEstimator;
///
/// let batch = CampaignBatch::new(1).with_campaigns([
///     Campaign::premium("X", 10, 1),
///     Campaign::premium("Y", 4, 1),
///     Campaign::new("A", 5),
/// ]);
/// let estimate = ExecutionEstimator::new().estimate(&batch).unwrap();
/// assert_eq!(estimate.total_workers, 2);
/// assert_eq!(estimate.total_time(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionEstimator {
    slots_per_core: u64,
}

impl ExecutionEstimator {
    /// Creates an estimator with two worker slots per core.
    pub fn new() -> Self {
        Self {
            slots_per_core: DEFAULT_SLOTS_PER_CORE,
        }
    }

    /// Sets the number of worker slots per core.
    pub fn with_slots_per_core(mut self, slots_per_core: u64) -> Self {
        self.slots_per_core = slots_per_core;
        self
    }

    /// Worker slots per core.
    pub fn slots_per_core(&self) -> u64 {
        self.slots_per_core
    }

    /// Worker pool size for a core count.
    pub fn total_workers(&self, core_count: u64) -> Result<u64> {
        core_count
            .checked_mul(self.slots_per_core)
            .ok_or(Error::Overflow("sizing the worker pool"))
    }

    /// Estimates a batch.
    pub fn estimate(&self, batch: &CampaignBatch) -> Result<Estimate> {
        self.estimate_campaigns(&batch.campaigns, batch.core_count)
    }

    /// Estimates campaigns sharing `core_count` cores.
    ///
    /// The campaigns are validated first: duplicate names (ignoring case)
    /// and a non-empty batch without workers are rejected.
    pub fn estimate_campaigns(&self, campaigns: &[Campaign], core_count: u64) -> Result<Estimate> {
        let total_workers = self.total_workers(core_count)?;
        if let Err(errors) = validate_campaigns(campaigns, total_workers) {
            warn!(errors = errors.len(), "campaign batch failed validation");
            return Err(Error::Invalid(errors));
        }

        let tiers = plan_premium_tiers(campaigns, total_workers)?;
        let standard = balance_standard(campaigns, total_workers)?;
        // Tier and phase durations are bounded individually; their sum may not be.
        let estimate = Estimate::from_phases(total_workers, tiers, standard)
            .ok_or(Error::Overflow("adding phase durations"))?;

        info!(
            campaigns = campaigns.len(),
            total_workers,
            tiers = estimate.tiers.len(),
            standard_time = estimate.standard_time(),
            total = estimate.total_time(),
            "estimated execution time"
        );
        Ok(estimate)
    }
}

impl Default for ExecutionEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Total execution time for `campaigns` on `core_count` cores, with two
/// worker slots per core.
pub fn calculate_execution_time(campaigns: &[Campaign], core_count: u64) -> Result<u64> {
    ExecutionEstimator::new()
        .estimate_campaigns(campaigns, core_count)
        .map(|estimate| estimate.total_time())
}
