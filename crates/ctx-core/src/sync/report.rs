//! Per-file sync outcomes

use serde::{Deserialize, Serialize};

/// What happened to one (item, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SyncOutcome {
    /// File written to the destination
    Written,
    /// Destination already present (and, for mirrors, already identical)
    SkippedExists,
    /// Would have been written; dry run
    SkippedDryRun,
    /// Write attempted and failed
    Failed { reason: String },
}

impl SyncOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::SkippedExists => "skipped-exists",
            Self::SkippedDryRun => "skipped-dry-run",
            Self::Failed { .. } => "failed",
        }
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// One row of a sync report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Source filename
    pub item: String,
    /// Target key
    pub target: String,
    /// Destination filename relative to the target directory
    pub file: String,
    /// Full destination path
    pub destination: String,
    pub outcome: SyncOutcome,
}

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCounts {
    pub written: usize,
    pub skipped_exists: usize,
    pub skipped_dry_run: usize,
    pub failed: usize,
}

/// Ordered record of every (item, target) pair a sync call visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub entries: Vec<SyncEntry>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SyncEntry) {
        self.entries.push(entry);
    }

    /// Append another report's entries after this one's.
    pub fn extend(&mut self, other: SyncReport) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counts(&self) -> SyncCounts {
        let mut counts = SyncCounts::default();
        for entry in &self.entries {
            match entry.outcome {
                SyncOutcome::Written => counts.written += 1,
                SyncOutcome::SkippedExists => counts.skipped_exists += 1,
                SyncOutcome::SkippedDryRun => counts.skipped_dry_run += 1,
                SyncOutcome::Failed { .. } => counts.failed += 1,
            }
        }
        counts
    }

    /// Destination files written, or that a dry run would have written.
    pub fn generated(&self) -> Vec<&str> {
        self.files_where(|o| matches!(o, SyncOutcome::Written | SyncOutcome::SkippedDryRun))
    }

    /// Destination files left alone because they already existed.
    pub fn skipped(&self) -> Vec<&str> {
        self.files_where(|o| matches!(o, SyncOutcome::SkippedExists))
    }

    /// Entries whose write failed.
    pub fn failures(&self) -> impl Iterator<Item = &SyncEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, SyncOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn files_where(&self, pred: impl Fn(&SyncOutcome) -> bool) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| pred(&e.outcome))
            .map(|e| e.file.as_str())
            .collect()
    }
}
