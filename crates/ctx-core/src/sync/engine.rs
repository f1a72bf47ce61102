//! SyncEngine implementation
//!
//! Replicates a snapshot of content items into resolved destinations,
//! rendering each through the destination's format and honoring its write
//! policy.

use crate::Result;
use crate::content::ContentItem;
use ctx_fs::{NormalizedPath, io};
use ctx_targets::{ResolvedTarget, TargetFormat, WritePolicy};
use std::fs;

use super::report::{SyncEntry, SyncOutcome, SyncReport};

/// Options for a sync call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Overwrite generate-once destinations that already exist.
    pub force: bool,
    /// Resolve and count everything but write nothing.
    pub dry_run: bool,
}

/// Engine that writes content items into sync targets.
///
/// The engine never touches the source directory. Each (item, target) pair
/// is independent: a failed write is recorded and the next pair proceeds.
#[derive(Debug, Clone, Default)]
pub struct SyncEngine {
    options: SyncOptions,
}

impl SyncEngine {
    pub fn new(options: SyncOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Sync every `.md` file in `source_dir` into each destination.
    ///
    /// A missing source directory syncs nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source directory cannot be listed.
    pub fn sync(
        &self,
        source_dir: &NormalizedPath,
        destinations: &[ResolvedTarget],
    ) -> Result<SyncReport> {
        let items = ContentItem::load_dir(source_dir)?;
        Ok(self.sync_items(&items, destinations))
    }

    /// Sync an already-loaded snapshot of items into each destination.
    pub fn sync_items(&self, items: &[ContentItem], destinations: &[ResolvedTarget]) -> SyncReport {
        let mut report = SyncReport::new();

        for target in destinations {
            for item in items {
                let file = target.format.transform_filename(&item.file_name);
                let path = target.destination.join(&file);

                let outcome = match render(target.format, item) {
                    Ok(content) => self.apply(target.policy, &path, &content),
                    Err(reason) => SyncOutcome::Failed { reason },
                };
                match &outcome {
                    SyncOutcome::Failed { reason } => tracing::warn!(
                        key = %target.key,
                        path = %path,
                        %reason,
                        "sync write failed"
                    ),
                    other => tracing::debug!(
                        key = %target.key,
                        path = %path,
                        outcome = other.as_str(),
                        "synced item"
                    ),
                }

                report.push(SyncEntry {
                    item: item.file_name.clone(),
                    target: target.key.clone(),
                    file,
                    destination: path.to_string(),
                    outcome,
                });
            }
        }

        report
    }

    fn apply(&self, policy: WritePolicy, path: &NormalizedPath, content: &[u8]) -> SyncOutcome {
        let exists = path.exists();
        let skip = match policy {
            WritePolicy::GenerateOnce => exists && !self.options.force,
            WritePolicy::Mirror => exists && is_identical(path, content),
        };
        if skip {
            return SyncOutcome::SkippedExists;
        }

        if self.options.dry_run {
            return SyncOutcome::SkippedDryRun;
        }

        match io::write_atomic(path, content) {
            Ok(()) => SyncOutcome::Written,
            Err(e) => SyncOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Destination bytes for `item`. Mirror copies the source verbatim; other
/// formats need UTF-8 text.
fn render(format: TargetFormat, item: &ContentItem) -> std::result::Result<Vec<u8>, String> {
    match format {
        TargetFormat::Mirror => item.bytes().map(<[u8]>::to_vec),
        _ => Ok(format.transform_content(&item.stem, item.text()?).into_bytes()),
    }
}

fn is_identical(path: &NormalizedPath, content: &[u8]) -> bool {
    fs::read(path.to_native()).is_ok_and(|existing| existing == content)
}
