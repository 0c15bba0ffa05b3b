//! Campaign batch model.

use serde::{Deserialize, Serialize};

use super::Campaign;

/// One batch of campaigns sharing a worker pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBatch {
    /// Number of cores; each exposes a fixed number of worker slots.
    pub core_count: u64,
    /// Campaigns in input order.
    pub campaigns: Vec<Campaign>,
}

impl CampaignBatch {
    /// Creates an empty batch for the given core count.
    pub fn new(core_count: u64) -> Self {
        Self {
            core_count,
            campaigns: Vec::new(),
        }
    }

    /// Adds a campaign.
    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.campaigns.push(campaign);
        self
    }

    /// Adds several campaigns.
    pub fn with_campaigns(mut self, campaigns: impl IntoIterator<Item = Campaign>) -> Self {
        self.campaigns.extend(campaigns);
        self
    }

    /// Number of campaigns.
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Whether the batch has no campaigns.
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}
