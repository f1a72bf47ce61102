//! Core sync layer for context-sync
//!
//! This crate combines the filesystem primitives of `ctx-fs` with the targets
//! and formats of `ctx-targets`, implementing:
//!
//! - **SyncEngine**: render and write content items into resolved targets with
//!   force, dry-run and write-policy handling
//! - **Orchestrator**: the four-pass quick sync (agents, skills, commands, docs)
//! - **StateDetector**: fresh/outdated/unknown classification of generated docs
//! - **Scaffolding**: `.context/` layout creation and command seeding
//!
//! # Architecture
//!
//! ```text
//!                 ctx-cli
//!                    |
//!                 ctx-core
//!                    |
//!          +---------+---------+
//!          |                   |
//!       ctx-fs  <-------  ctx-targets
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod orchestrator;
pub mod scaffold;
pub mod state;
pub mod sync;

pub use config::Manifest;
pub use content::{ContentItem, ItemBody};
pub use error::{Error, Result};
pub use orchestrator::{
    Orchestrator, Pass, PassOutcome, PassReport, QuickSyncOptions, QuickSyncReport, SkipReason,
    run_quick_sync,
};
pub use scaffold::{COMMAND_TEMPLATES, CommandTemplate, init_context, template_items};
pub use state::{
    DEFAULT_STALE_AFTER_DAYS, DocsState, Freshness, FreshnessBasis, StateDetector, mark_generated,
};
pub use sync::{SyncCounts, SyncEngine, SyncEntry, SyncOptions, SyncOutcome, SyncReport};
