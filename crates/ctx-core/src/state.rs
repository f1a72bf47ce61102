//! Documentation freshness detection
//!
//! Classifies generated docs as fresh, outdated or unknown from the
//! generation marker (or, failing that, the docs' own modification times).
//! Detection is a pure read; only [`mark_generated`] writes.

use crate::Result;
use chrono::{DateTime, Utc};
use ctx_fs::{ContextPath, NormalizedPath, io};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::SystemTime;

/// Docs older than this many days are reported as outdated.
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Fresh,
    Outdated,
    Unknown,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Outdated => "outdated",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the last-generated timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessBasis {
    /// RFC 3339 timestamp stored in the marker file
    Marker,
    /// Marker content unreadable; its modification time was used
    MarkerModified,
    /// No marker; newest modification time among the docs
    DocsModified,
    /// Nothing to go on
    None,
}

/// Result of a freshness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsState {
    pub freshness: Freshness,
    pub days_behind: Option<i64>,
    pub last_generated: Option<DateTime<Utc>>,
    pub basis: FreshnessBasis,
    pub threshold_days: i64,
}

impl DocsState {
    pub fn is_outdated(&self) -> bool {
        self.freshness == Freshness::Outdated
    }
}

/// Reads the generation marker and docs directory of one repository.
#[derive(Debug, Clone)]
pub struct StateDetector {
    root: NormalizedPath,
    threshold_days: i64,
    now: Option<DateTime<Utc>>,
}

impl StateDetector {
    /// Create a detector for the repository at `root`.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            threshold_days: DEFAULT_STALE_AFTER_DAYS,
            now: None,
        }
    }

    pub fn with_threshold_days(mut self, days: i64) -> Self {
        self.threshold_days = days;
        self
    }

    /// Pin the clock used for `days_behind`.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn detect(&self) -> DocsState {
        let now = self.now.unwrap_or_else(Utc::now);

        let Some((last, basis)) = self.last_generated() else {
            tracing::debug!(root = %self.root, "no generation marker or docs found");
            return DocsState {
                freshness: Freshness::Unknown,
                days_behind: None,
                last_generated: None,
                basis: FreshnessBasis::None,
                threshold_days: self.threshold_days,
            };
        };

        let days_behind = (now - last).num_days().max(0);
        let freshness = if days_behind > self.threshold_days {
            Freshness::Outdated
        } else {
            Freshness::Fresh
        };

        tracing::debug!(%freshness, days_behind, ?basis, "detected docs state");

        DocsState {
            freshness,
            days_behind: Some(days_behind),
            last_generated: Some(last),
            basis,
            threshold_days: self.threshold_days,
        }
    }

    fn last_generated(&self) -> Option<(DateTime<Utc>, FreshnessBasis)> {
        let marker = self.root.join(ContextPath::GenerationMarker.as_str());

        if marker.is_file() {
            let content = io::read_text(&marker).unwrap_or_default();
            if let Ok(ts) = DateTime::parse_from_rfc3339(content.trim()) {
                return Some((ts.with_timezone(&Utc), FreshnessBasis::Marker));
            }
            tracing::debug!(path = %marker, "marker is not an RFC 3339 timestamp, using mtime");
            if let Some(modified) = modified_time(&marker) {
                return Some((modified, FreshnessBasis::MarkerModified));
            }
        }

        newest_doc(&self.root.join(ContextPath::Docs.as_str()))
            .map(|ts| (ts, FreshnessBasis::DocsModified))
    }
}

/// Record that docs were generated at `at`.
///
/// Returns the marker path.
pub fn mark_generated(root: &NormalizedPath, at: DateTime<Utc>) -> Result<NormalizedPath> {
    let marker = root.join(ContextPath::GenerationMarker.as_str());
    io::write_text(&marker, &format!("{}\n", at.to_rfc3339()))?;
    tracing::info!(path = %marker, "marked docs as generated");
    Ok(marker)
}

fn modified_time(path: &NormalizedPath) -> Option<DateTime<Utc>> {
    fs::metadata(path.to_native())
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

fn newest_doc(docs: &NormalizedPath) -> Option<DateTime<Utc>> {
    let entries = fs::read_dir(docs.to_native()).ok()?;
    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("md"))
        .filter_map(|entry| entry.metadata().ok())
        .filter(|meta| meta.is_file())
        .filter_map(|meta| meta.modified().ok())
        .max()
        .map(|t: SystemTime| DateTime::<Utc>::from(t))
}
