//! Target registry
//!
//! Static mapping from target keys and preset names to destination
//! directories and format families, per content category.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_TARGET_COUNT, builtin_presets, builtin_targets};
pub use store::TargetRegistry;
pub use types::{Preset, ResolvedTarget, SyncTarget, TargetSelection};

/// Preset every category resolves to when no selection is given.
pub const DEFAULT_PRESET: &str = "all";
