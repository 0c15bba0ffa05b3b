//! Execution estimate (solution) model.
//!
//! An estimate is the full breakdown behind a total execution time: one
//! entry per premium priority tier, evaluated in ascending priority, plus
//! the greedy worker assignment of the standard phase.

use serde::{Deserialize, Serialize};

/// Breakdown of a computed execution time.
///
/// The total is computed with checked arithmetic when the estimate is
/// assembled in [`Estimate::from_phases`] and stored, never re-summed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    total_time: u64,
    /// Worker slots available to every phase.
    pub total_workers: u64,
    /// Premium tiers, ascending by priority value.
    pub tiers: Vec<TierEstimate>,
    /// Standard phase, absent when the batch has no standard campaigns.
    pub standard: Option<StandardEstimate>,
}

/// How a priority tier shares the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TierAllocation {
    /// Each campaign gets its own equal, non-overlapping share of workers.
    Parallel { workers_per_campaign: u64 },
    /// More campaigns than workers: the tier drains as one throughput pool.
    Pooled,
}

/// One premium priority tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEstimate {
    /// Priority value shared by the tier.
    pub priority: u32,
    /// Worker allocation mode.
    pub allocation: TierAllocation,
    /// Per-campaign durations, case-insensitive name order.
    ///
    /// Under [`TierAllocation::Pooled`] no campaign runs on its own, so
    /// each entry carries the whole tier duration.
    pub campaigns: Vec<CampaignTime>,
    /// Time until the whole tier has finished.
    pub duration: u64,
}

/// Duration of a single premium campaign within its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTime {
    pub campaign: String,
    pub events: u64,
    pub duration: u64,
}

/// Standard-phase greedy load balancing result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardEstimate {
    /// Assignments in dispatch order (case-insensitive name order).
    pub assignments: Vec<WorkerAssignment>,
    /// Finish time of each worker, indexed by worker.
    pub worker_finish_times: Vec<u64>,
    /// Latest worker finish time.
    pub duration: u64,
}

/// A campaign placed whole on one worker.
///
/// Times are relative to the start of the standard phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub campaign: String,
    pub worker: usize,
    pub start: u64,
    pub end: u64,
}

impl WorkerAssignment {
    /// Creates a new assignment.
    pub fn new(campaign: impl Into<String>, worker: usize, start: u64, end: u64) -> Self {
        Self {
            campaign: campaign.into(),
            worker,
            start,
            end,
        }
    }

    /// Time spent on the worker.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

impl StandardEstimate {
    /// Finds the assignment for a campaign by exact name.
    pub fn assignment_for(&self, campaign: &str) -> Option<&WorkerAssignment> {
        self.assignments.iter().find(|a| a.campaign == campaign)
    }
}

impl Estimate {
    /// Assembles an estimate from its phases.
    ///
    /// Returns `None` if the total does not fit in `u64`.
    pub fn from_phases(
        total_workers: u64,
        tiers: Vec<TierEstimate>,
        standard: Option<StandardEstimate>,
    ) -> Option<Self> {
        let mut estimate = Self {
            total_time: 0,
            total_workers,
            tiers,
            standard,
        };
        estimate.total_time = estimate
            .premium_time()?
            .checked_add(estimate.standard_time())?;
        Some(estimate)
    }

    /// Sum of all premium tier durations, `None` on overflow.
    pub fn premium_time(&self) -> Option<u64> {
        self.tiers
            .iter()
            .try_fold(0u64, |sum, t| sum.checked_add(t.duration))
    }

    /// Standard-phase duration (0 when there is no standard phase).
    pub fn standard_time(&self) -> u64 {
        self.standard.as_ref().map_or(0, |s| s.duration)
    }

    /// Total execution time: premium tiers followed by the standard phase.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Finds a tier by priority value.
    pub fn tier(&self, priority: u32) -> Option<&TierEstimate> {
        self.tiers.iter().find(|t| t.priority == priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_estimate() -> Estimate {
        Estimate::from_phases(
            2,
            vec![
                TierEstimate {
                    priority: 1,
                    allocation: TierAllocation::Parallel {
                        workers_per_campaign: 1,
                    },
                    campaigns: vec![
                        CampaignTime {
                            campaign: "X".into(),
                            events: 10,
                            duration: 10,
                        },
                        CampaignTime {
                            campaign: "Y".into(),
                            events: 4,
                            duration: 4,
                        },
                    ],
                    duration: 10,
                },
                TierEstimate {
                    priority: 4,
                    allocation: TierAllocation::Pooled,
                    campaigns: Vec::new(),
                    duration: 3,
                },
            ],
            Some(StandardEstimate {
                assignments: vec![
                    WorkerAssignment::new("A", 0, 0, 5),
                    WorkerAssignment::new("B", 1, 0, 3),
                    WorkerAssignment::new("C", 1, 3, 4),
                ],
                worker_finish_times: vec![5, 4],
                duration: 5,
            }),
        )
        .unwrap()
    }

    fn tier(priority: u32, duration: u64) -> TierEstimate {
        TierEstimate {
            priority,
            allocation: TierAllocation::Pooled,
            campaigns: Vec::new(),
            duration,
        }
    }

    #[test]
    fn test_estimate_totals() {
        let e = sample_estimate();
        assert_eq!(e.total_workers, 2);
        assert_eq!(e.premium_time(), Some(13));
        assert_eq!(e.standard_time(), 5);
        assert_eq!(e.total_time(), 18);
    }

    #[test]
    fn test_empty_estimate() {
        let e = Estimate::from_phases(4, Vec::new(), None).unwrap();
        assert_eq!(e.total_workers, 4);
        assert_eq!(e.total_time(), 0);
        assert!(e.standard.is_none());
    }

    #[test]
    fn test_tier_lookup() {
        let e = sample_estimate();
        assert_eq!(e.tier(4).unwrap().allocation, TierAllocation::Pooled);
        assert!(e.tier(2).is_none());
    }

    #[test]
    fn test_standard_queries() {
        let e = sample_estimate();
        let s = e.standard.as_ref().unwrap();
        assert_eq!(s.assignment_for("C").unwrap().start, 3);
        assert_eq!(s.assignment_for("C").unwrap().duration(), 1);
        assert!(s.assignment_for("Z").is_none());
    }

    #[test]
    fn test_from_phases_overflow() {
        let tiers = vec![tier(1, u64::MAX), tier(2, 1)];
        assert!(Estimate::from_phases(2, tiers, None).is_none());

        let standard = StandardEstimate {
            duration: 1,
            ..Default::default()
        };
        assert!(Estimate::from_phases(2, vec![tier(1, u64::MAX)], Some(standard)).is_none());
    }

    #[test]
    fn test_deserialized_estimate_keeps_total() {
        let json = r#"{"total_time":7,"total_workers":2,"tiers":[
            {"priority":1,"allocation":{"mode":"pooled"},"campaigns":[],"duration":18446744073709551615},
            {"priority":2,"allocation":{"mode":"pooled"},"campaigns":[],"duration":1}
        ],"standard":null}"#;
        let e: Estimate = serde_json::from_str(json).unwrap();
        assert_eq!(e.total_time(), 7);
        assert_eq!(e.premium_time(), None);
    }

    #[test]
    fn test_allocation_serialization() {
        let json = serde_json::to_value(TierAllocation::Parallel {
            workers_per_campaign: 3,
        })
        .unwrap();
        assert_eq!(json["mode"], "parallel");
        assert_eq!(json["workers_per_campaign"], 3);

        let pooled = serde_json::to_value(TierAllocation::Pooled).unwrap();
        assert_eq!(pooled["mode"], "pooled");
    }
}
