//! Premium phase: priority tiers with fair worker allocation.
//!
//! # Algorithm
//!
//! 1. Group premium campaigns by priority value; tiers run in ascending
//!    order and each starts only when the previous one has finished.
//! 2. Within a tier of `k` campaigns, every campaign receives
//!    `W / k` workers (floor), where `W` is the worker pool size.
//! 3. With at least one worker each, a campaign takes
//!    `ceil(events / share)` and the tier lasts as long as its slowest
//!    campaign.
//! 4. With more campaigns than workers, the tier drains as a single pool:
//!    `ceil(sum(events) / W)`.
//!
//! # Complexity
//! O(n log n) for grouping and in-tier sorting, n = premium campaigns.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Campaign, CampaignTime, TierAllocation, TierEstimate};
use crate::validation::ValidationError;

/// Plans every premium tier, ascending by priority value.
///
/// Standard campaigns in the input are ignored. Returns an empty plan when
/// there are no premium campaigns, whatever the worker count.
///
/// # Example
///
/// ```
/// use campaign_schedule::models::{Campaign, TierAllocation};
/// use campaign_schedule::scheduler::plan_premium_tiers;
///
/// let campaigns = [Campaign::premium("X", 10, 1), Campaign::premium("Y", 4, 1)];
/// let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
/// assert_eq!(tiers.len(), 1);
/// assert_eq!(
///     tiers[0].allocation,
///     TierAllocation::Parallel { workers_per_campaign: 1 }
/// );
/// assert_eq!(tiers[0].duration, 10);
/// ```
pub fn plan_premium_tiers<'a>(
    campaigns: impl IntoIterator<Item = &'a Campaign>,
    total_workers: u64,
) -> Result<Vec<TierEstimate>> {
    let mut groups: BTreeMap<u32, Vec<&Campaign>> = BTreeMap::new();
    for campaign in campaigns {
        if let Some(priority) = campaign.priority_value() {
            groups.entry(priority).or_default().push(campaign);
        }
    }

    if groups.is_empty() {
        return Ok(Vec::new());
    }
    if total_workers == 0 {
        let count = groups.values().map(Vec::len).sum();
        return Err(Error::Invalid(vec![ValidationError::no_workers(count)]));
    }

    groups
        .into_iter()
        .map(|(priority, mut group)| {
            group.sort_by(|a, b| a.cmp_by_name(b));
            plan_tier(priority, &group, total_workers)
        })
        .collect()
}

/// Plans one tier. `group` is non-empty and sorted by name.
fn plan_tier(priority: u32, group: &[&Campaign], total_workers: u64) -> Result<TierEstimate> {
    let workers_per_campaign = total_workers / group.len() as u64;

    let tier = if workers_per_campaign == 0 {
        let total_events = group
            .iter()
            .try_fold(0u64, |sum, c| sum.checked_add(c.events()))
            .ok_or(Error::Overflow("summing pooled tier events"))?;
        let duration = total_events.div_ceil(total_workers);
        TierEstimate {
            priority,
            allocation: TierAllocation::Pooled,
            campaigns: group
                .iter()
                .map(|c| CampaignTime {
                    campaign: c.name().to_string(),
                    events: c.events(),
                    duration,
                })
                .collect(),
            duration,
        }
    } else {
        let campaigns: Vec<CampaignTime> = group
            .iter()
            .map(|c| CampaignTime {
                campaign: c.name().to_string(),
                events: c.events(),
                duration: c.events().div_ceil(workers_per_campaign),
            })
            .collect();
        let duration = campaigns.iter().map(|c| c.duration).max().unwrap_or(0);
        TierEstimate {
            priority,
            allocation: TierAllocation::Parallel {
                workers_per_campaign,
            },
            campaigns,
            duration,
        }
    };

    debug!(
        priority,
        campaigns = group.len(),
        allocation = ?tier.allocation,
        duration = tier.duration,
        "planned premium tier"
    );
    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premium(name: &str, events: u64, priority: u32) -> Campaign {
        Campaign::premium(name, events, priority)
    }

    #[test]
    fn test_single_parallel_tier() {
        let campaigns = vec![premium("X", 10, 1), premium("Y", 4, 1)];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();

        assert_eq!(tiers.len(), 1);
        let tier = &tiers[0];
        assert_eq!(tier.priority, 1);
        assert_eq!(tier.campaigns[0].duration, 10);
        assert_eq!(tier.campaigns[1].duration, 4);
        assert_eq!(tier.duration, 10);
    }

    #[test]
    fn test_parallel_ceiling_division() {
        // 8 workers / 3 campaigns = 2 each
        let campaigns = vec![premium("a", 5, 0), premium("b", 4, 0), premium("c", 1, 0)];
        let tiers = plan_premium_tiers(&campaigns, 8).unwrap();
        let tier = &tiers[0];

        assert_eq!(
            tier.allocation,
            TierAllocation::Parallel {
                workers_per_campaign: 2
            }
        );
        let durations: Vec<u64> = tier.campaigns.iter().map(|c| c.duration).collect();
        assert_eq!(durations, vec![3, 2, 1]);
        assert_eq!(tier.duration, 3);
    }

    #[test]
    fn test_pooled_fallback() {
        // 3 campaigns on 2 workers: ceil((5 + 3 + 2) / 2) = 5
        let campaigns = vec![premium("a", 5, 2), premium("b", 3, 2), premium("c", 2, 2)];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
        let tier = &tiers[0];

        assert_eq!(tier.allocation, TierAllocation::Pooled);
        assert_eq!(tier.duration, 5);
        assert!(tier.campaigns.iter().all(|c| c.duration == 5));
    }

    #[test]
    fn test_pooled_rounds_up() {
        let campaigns = vec![premium("a", 1, 0), premium("b", 1, 0), premium("c", 1, 0)];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
        // ceil(3 / 2)
        assert_eq!(tiers[0].duration, 2);
    }

    #[test]
    fn test_tiers_ascending_by_priority() {
        let campaigns = vec![
            premium("late", 6, 10),
            premium("first", 4, 1),
            premium("middle", 2, 3),
        ];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
        let order: Vec<u32> = tiers.iter().map(|t| t.priority).collect();
        assert_eq!(order, vec![1, 3, 10]);

        // Single-campaign tiers get the whole pool
        let durations: Vec<u64> = tiers.iter().map(|t| t.duration).collect();
        assert_eq!(durations, vec![2, 1, 3]);
    }

    #[test]
    fn test_in_tier_name_order() {
        let campaigns = vec![premium("delta", 1, 1), premium("Bravo", 1, 1), premium("alpha", 1, 1)];
        let tiers = plan_premium_tiers(&campaigns, 4).unwrap();
        let names: Vec<&str> = tiers[0]
            .campaigns
            .iter()
            .map(|c| c.campaign.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "Bravo", "delta"]);
    }

    #[test]
    fn test_standard_campaigns_ignored() {
        let campaigns = vec![Campaign::new("std", 100), premium("p", 3, 1)];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].duration, 2);
    }

    #[test]
    fn test_zero_events() {
        let campaigns = vec![premium("a", 0, 1), premium("b", 0, 1), premium("c", 0, 1)];
        let tiers = plan_premium_tiers(&campaigns, 2).unwrap();
        assert_eq!(tiers[0].duration, 0);
    }

    #[test]
    fn test_no_premium_no_workers() {
        let campaigns = vec![Campaign::new("std", 1)];
        assert!(plan_premium_tiers(&campaigns, 0).unwrap().is_empty());
    }

    #[test]
    fn test_no_workers_rejected() {
        let campaigns = vec![premium("a", 1, 1)];
        assert!(matches!(
            plan_premium_tiers(&campaigns, 0),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_pooled_overflow() {
        let campaigns = vec![
            premium("a", u64::MAX, 1),
            premium("b", 1, 1),
            premium("c", 1, 1),
        ];
        assert!(matches!(
            plan_premium_tiers(&campaigns, 2),
            Err(Error::Overflow(_))
        ));
    }
}
