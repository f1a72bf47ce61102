//! Sync targets for context-sync.
//!
//! This crate knows *where* context artifacts end up and *in what shape*:
//!
//! 1. **Registry** - every destination a category of content can be synced
//!    to, plus named presets for bulk selection. Resolution is all-or-nothing.
//!
//! 2. **Formats** - pure transformers turning a canonical markdown item into
//!    a target's representation (filename convention, front-matter, body).
//!
//! Nothing here touches the filesystem; the sync engine in `ctx-core`
//! combines a resolved target with its format to decide what to write.

pub mod category;
pub mod error;
pub mod format;
pub mod registry;

pub use category::ContentCategory;
pub use error::{Error, Result};
pub use format::{TargetFormat, WritePolicy};
pub use registry::{
    DEFAULT_PRESET, Preset, ResolvedTarget, SyncTarget, TargetRegistry, TargetSelection,
};
