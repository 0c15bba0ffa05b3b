//! Campaign classifier: parses one input batch into campaigns.
//!
//! # Format
//!
//! ```text
//! <campaign_count> <core_count>
//! <name> <events> [<priority_tag>]     (campaign_count times)
//! ```
//!
//! Tokens are whitespace-separated. A tag starting with `P` marks a premium
//! campaign and must be followed by a non-negative integer; any other tag
//! leaves the campaign standard. Lines after the last declared record are
//! ignored.
//!
//! Names are checked for case-insensitive uniqueness record by record: the
//! first collision rejects the whole batch without reading further.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Campaign, CampaignBatch};
use crate::validation::ValidationError;

/// Parses and classifies a batch from its textual form.
///
/// # Example
///
/// ```
/// use campaign_schedule::classifier::parse_batch;
///
/// let batch = parse_batch("2 1\nA 5\nX 10 P1\n").unwrap();
/// assert_eq!(batch.core_count, 1);
/// assert_eq!(batch.campaigns[1].priority_value(), Some(1));
/// ```
pub fn parse_batch(input: &str) -> Result<CampaignBatch> {
    let mut lines = input.lines().zip(1usize..);

    let (header, header_line) = lines
        .next()
        .ok_or_else(|| Error::malformed(1, "missing header line"))?;
    let (campaign_count, core_count) = parse_header(header, header_line)?;

    // Records are counted as they arrive; the declared count is untrusted.
    let mut batch = CampaignBatch::new(core_count);
    // Canonical key → index of the first campaign using it
    let mut seen: HashMap<String, usize> = HashMap::new();

    for parsed in 0..campaign_count {
        let (line, line_no) = lines.next().ok_or_else(|| {
            Error::malformed(
                header_line + parsed + 1,
                format!("expected {campaign_count} campaign records, found {parsed}"),
            )
        })?;
        let name = line
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::malformed(line_no, "campaign record is empty"))?;

        // A name collision rejects the batch whatever the other fields hold.
        match seen.entry(name.to_lowercase()) {
            Entry::Occupied(first) => {
                let first = batch.campaigns[*first.get()].name();
                warn!(
                    campaign = name,
                    first,
                    line = line_no,
                    "duplicate campaign name, rejecting batch"
                );
                return Err(Error::Invalid(vec![ValidationError::duplicate_name(
                    name, first,
                )]));
            }
            Entry::Vacant(slot) => {
                slot.insert(batch.campaigns.len());
            }
        }

        let campaign = parse_record(line, line_no)?;
        debug!(
            campaign = campaign.name(),
            events = campaign.events(),
            priority = ?campaign.priority_value(),
            "classified campaign"
        );
        batch.campaigns.push(campaign);
    }

    Ok(batch)
}

/// Reads a whole batch from a reader (e.g. stdin) and parses it.
pub fn read_batch(mut reader: impl Read) -> Result<CampaignBatch> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_batch(&input)
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, u64)> {
    let mut tokens = line.split_whitespace();
    let campaign_count = tokens
        .next()
        .ok_or_else(|| Error::malformed(line_no, "header is empty"))?;
    let core_count = tokens
        .next()
        .ok_or_else(|| Error::malformed(line_no, "header is missing the core count"))?;
    if let Some(extra) = tokens.next() {
        return Err(Error::malformed(
            line_no,
            format!("unexpected header field '{extra}'"),
        ));
    }

    let campaign_count = campaign_count.parse().map_err(|_| {
        Error::malformed(
            line_no,
            format!("campaign count '{campaign_count}' is not a non-negative integer"),
        )
    })?;
    let core_count = core_count.parse().map_err(|_| {
        Error::malformed(
            line_no,
            format!("core count '{core_count}' is not a non-negative integer"),
        )
    })?;
    Ok((campaign_count, core_count))
}

fn parse_record(line: &str, line_no: usize) -> Result<Campaign> {
    let mut tokens = line.split_whitespace();
    let name = tokens
        .next()
        .ok_or_else(|| Error::malformed(line_no, "campaign record is empty"))?;
    let events = tokens
        .next()
        .ok_or_else(|| Error::malformed(line_no, format!("campaign '{name}' has no event count")))?;
    let tag = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(Error::malformed(
            line_no,
            format!("unexpected field '{extra}' after campaign '{name}'"),
        ));
    }

    let events = events.parse().map_err(|_| {
        Error::malformed(
            line_no,
            format!("event count '{events}' of campaign '{name}' is not a non-negative integer"),
        )
    })?;
    Campaign::with_tag(name, events, tag).map_err(|e| Error::malformed(line_no, e.to_string()))
}
