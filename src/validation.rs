//! Input validation for campaign batches.
//!
//! Checks structural integrity of a batch before estimation. Detects:
//! - Duplicate campaign names (case-insensitive)
//! - Campaigns with no worker slots to run on
//!
//! All problems are collected rather than stopping at the first one, so a
//! caller can report the whole picture.

use crate::models::Campaign;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two campaigns share a name, ignoring letter case.
    DuplicateName,
    /// Campaigns are present but the worker pool is empty.
    NoWorkers,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn duplicate_name(name: &str, first: &str) -> Self {
        Self::new(
            ValidationErrorKind::DuplicateName,
            format!("Duplicate campaign name: '{name}' collides with '{first}'"),
        )
    }

    pub(crate) fn no_workers(campaign_count: usize) -> Self {
        Self::new(
            ValidationErrorKind::NoWorkers,
            format!("{campaign_count} campaign(s) to run but the worker pool is empty"),
        )
    }
}

/// Validates a batch of campaigns against a worker pool size.
///
/// Checks:
/// 1. No two campaign names are equal ignoring case
/// 2. A non-empty batch has at least one worker
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_campaigns(campaigns: &[Campaign], total_workers: u64) -> ValidationResult {
    let mut errors = Vec::new();

    // Canonical key → first name seen with it
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for campaign in campaigns {
        match seen.entry(campaign.key()) {
            Entry::Occupied(first) => {
                errors.push(ValidationError::duplicate_name(campaign.name(), first.get()));
            }
            Entry::Vacant(slot) => {
                slot.insert(campaign.name());
            }
        }
    }

    if !campaigns.is_empty() && total_workers == 0 {
        errors.push(ValidationError::no_workers(campaigns.len()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
