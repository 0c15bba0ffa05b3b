//! Campaign scheduling domain models.
//!
//! Provides the input types (campaigns and batches) and the estimate
//! breakdown produced by the scheduler.
//!
//! # Domain Mappings
//!
//! | campaign-schedule | Job-shop | Batch processing |
//! |-------------------|----------|------------------|
//! | Campaign | Job | Batch job |
//! | Events | Processing time | Work units |
//! | Worker | Machine | Executor slot |
//! | Priority tier | Release wave | Queue priority |

mod batch;
mod campaign;
mod estimate;

pub use batch::CampaignBatch;
pub use campaign::{Campaign, CampaignRecord, PriorityTagError, PREMIUM_TAG_PREFIX};
pub use estimate::{
    CampaignTime, Estimate, StandardEstimate, TierAllocation, TierEstimate, WorkerAssignment,
};
