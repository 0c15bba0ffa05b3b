//! Standard phase: greedy earliest-available-worker load balancing.
//!
//! # Algorithm
//!
//! 1. Sort standard campaigns by name, ignoring case.
//! 2. Start every worker idle at time 0.
//! 3. For each campaign, take the worker that frees up first (lowest index
//!    on ties) and run the whole campaign on it.
//! 4. The phase lasts until the last worker finishes.
//!
//! This is list scheduling (LPT without the sort by length), so the result
//! is within `ceil(sum / W) + max(events)` of the total work.
//!
//! Only `min(W, n)` workers can ever receive a campaign: while any idle
//! worker remains it is chosen first. The rest stay idle at time 0 and are
//! not materialized.
//!
//! # Complexity
//! O(n log n) for sorting plus O(n log W) heap operations.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Campaign, StandardEstimate, WorkerAssignment};
use crate::validation::ValidationError;

/// Balances the standard campaigns over `total_workers` workers.
///
/// Premium campaigns in the input are ignored. Returns `Ok(None)` when there
/// is nothing to balance.
///
/// # Example
///
/// ```
/// use campaign_schedule::models::Campaign;
/// use campaign_schedule::scheduler::balance_standard;
///
/// let campaigns = [Campaign::new("A", 5), Campaign::new("B", 3)];
/// let phase = balance_standard(&campaigns, 2).unwrap().unwrap();
/// assert_eq!(phase.duration, 5);
/// ```
pub fn balance_standard<'a>(
    campaigns: impl IntoIterator<Item = &'a Campaign>,
    total_workers: u64,
) -> Result<Option<StandardEstimate>> {
    let mut queue: Vec<&Campaign> = campaigns.into_iter().filter(|c| !c.is_premium()).collect();
    if queue.is_empty() {
        return Ok(None);
    }
    if total_workers == 0 {
        return Err(Error::Invalid(vec![ValidationError::no_workers(queue.len())]));
    }
    queue.sort_by(|a, b| a.cmp_by_name(b));

    let active = usize::try_from(total_workers).map_or(queue.len(), |w| w.min(queue.len()));
    let mut finish_times = vec![0u64; active];
    let mut free_at: BinaryHeap<Reverse<(u64, usize)>> =
        (0..active).map(|worker| Reverse((0, worker))).collect();
    let mut assignments = Vec::with_capacity(queue.len());

    for campaign in queue {
        let Some(Reverse((start, worker))) = free_at.pop() else {
            break;
        };
        let end = start
            .checked_add(campaign.events())
            .ok_or(Error::Overflow("accumulating standard worker time"))?;

        debug!(
            campaign = campaign.name(),
            worker, start, end, "assigned standard campaign"
        );
        finish_times[worker] = end;
        free_at.push(Reverse((end, worker)));
        assignments.push(WorkerAssignment::new(campaign.name(), worker, start, end));
    }

    let duration = finish_times.iter().copied().max().unwrap_or(0);
    Ok(Some(StandardEstimate {
        assignments,
        worker_finish_times: finish_times,
        duration,
    }))
}
