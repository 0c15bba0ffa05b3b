//! Campaign model.
//!
//! A campaign is a named unit of work measured in events. Campaigns tagged
//! with a priority (`P<digits>`) are premium and scheduled per priority
//! tier; all others are standard and load-balanced across the worker pool.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Leading character that marks a premium priority tag.
pub const PREMIUM_TAG_PREFIX: char = 'P';

/// A campaign to be estimated.
///
/// Immutable once constructed. The lower-cased `key` is computed once and
/// used for every case-insensitive comparison (ordering, duplicate checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CampaignRecord", into = "CampaignRecord")]
pub struct Campaign {
    name: String,
    key: String,
    events: u64,
    priority_tag: Option<String>,
    priority: Option<u32>,
}

/// Serialized form of a campaign: exactly the fields read from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub name: String,
    pub events: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_tag: Option<String>,
}

/// A premium tag whose suffix is not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "priority tag '{tag}' must be '{prefix}' followed by a non-negative integer",
    prefix = PREMIUM_TAG_PREFIX
)]
pub struct PriorityTagError {
    pub tag: String,
}

impl Campaign {
    /// Creates a standard (untagged) campaign.
    pub fn new(name: impl Into<String>, events: u64) -> Self {
        let name = name.into();
        Self {
            key: name.to_lowercase(),
            name,
            events,
            priority_tag: None,
            priority: None,
        }
    }

    /// Creates a premium campaign at the given priority level.
    pub fn premium(name: impl Into<String>, events: u64, priority: u32) -> Self {
        let mut campaign = Self::new(name, events);
        campaign.priority_tag = Some(format!("{PREMIUM_TAG_PREFIX}{priority}"));
        campaign.priority = Some(priority);
        campaign
    }

    /// Creates a campaign from an optional raw tag.
    ///
    /// A tag starting with `P` makes the campaign premium and its remainder
    /// must be a non-negative integer. Any other tag is kept verbatim and
    /// the campaign stays standard.
    pub fn with_tag(
        name: impl Into<String>,
        events: u64,
        tag: Option<&str>,
    ) -> Result<Self, PriorityTagError> {
        let mut campaign = Self::new(name, events);
        if let Some(tag) = tag {
            campaign.priority = parse_priority(tag)?;
            campaign.priority_tag = Some(tag.to_string());
        }
        Ok(campaign)
    }

    /// Campaign name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical case-insensitive key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of events (work units).
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Raw priority tag, if any.
    pub fn priority_tag(&self) -> Option<&str> {
        self.priority_tag.as_deref()
    }

    /// Priority level for premium campaigns (lower = scheduled earlier).
    pub fn priority_value(&self) -> Option<u32> {
        self.priority
    }

    /// Whether the tag marks this campaign as premium.
    pub fn is_premium(&self) -> bool {
        self.priority.is_some()
    }

    /// Case-insensitive name ordering.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then_with(|| self.name.cmp(&other.name))
    }
}

/// Returns `Ok(None)` for non-premium tags.
fn parse_priority(tag: &str) -> Result<Option<u32>, PriorityTagError> {
    let Some(suffix) = tag.strip_prefix(PREMIUM_TAG_PREFIX) else {
        return Ok(None);
    };
    let malformed = || PriorityTagError {
        tag: tag.to_string(),
    };
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    suffix.parse().map(Some).map_err(|_| malformed())
}

impl TryFrom<CampaignRecord> for Campaign {
    type Error = PriorityTagError;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        Self::with_tag(record.name, record.events, record.priority_tag.as_deref())
    }
}

impl From<Campaign> for CampaignRecord {
    fn from(campaign: Campaign) -> Self {
        Self {
            name: campaign.name,
            events: campaign.events,
            priority_tag: campaign.priority_tag,
        }
    }
}
