//! Sync engine and its per-file report
//!
//! - **engine**: render content items through each target's format and write
//!   them with force/dry-run/policy handling
//! - **report**: ordered per-(item, target) outcomes and aggregate counts

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{SyncCounts, SyncEntry, SyncOutcome, SyncReport};
