//! Built-in targets and presets - SINGLE SOURCE OF TRUTH
//!
//! Listing, lookup and resolution all derive from these two functions.

use super::{DEFAULT_PRESET, Preset, SyncTarget};
use crate::{ContentCategory, TargetFormat};

/// Number of built-in targets across all categories.
pub const BUILTIN_TARGET_COUNT: usize = 10;

/// Returns all built-in target registrations.
pub fn builtin_targets() -> Vec<SyncTarget> {
    use ContentCategory::{Agents, Commands, Skills};
    use TargetFormat::{Mirror, Skill, Workflow};

    vec![
        // Agents
        SyncTarget::new(Agents, "claude", "Claude Code", ".claude/agents", Mirror),
        SyncTarget::new(Agents, "github", "GitHub Copilot", ".github/agents", Mirror),
        SyncTarget::new(Agents, "opencode", "OpenCode", ".opencode/agent", Mirror),
        // Skills
        SyncTarget::new(Skills, "claude", "Claude Code", ".claude/skills", Skill),
        SyncTarget::new(Skills, "antigravity", "Antigravity", ".agent/skills", Skill),
        SyncTarget::new(Skills, "codex", "Codex", ".codex/skills", Skill),
        // Commands
        SyncTarget::new(Commands, "claude", "Claude Code", ".claude/commands", Mirror),
        SyncTarget::new(Commands, "cursor", "Cursor", ".cursor/commands", Mirror),
        SyncTarget::new(Commands, "opencode", "OpenCode", ".opencode/command", Mirror),
        SyncTarget::new(Commands, "antigravity", "Antigravity", ".agent/workflows", Workflow),
    ]
}

/// Returns the built-in presets.
///
/// The `all` preset of each category is derived from [`builtin_targets`].
pub fn builtin_presets() -> Vec<Preset> {
    let targets = builtin_targets();
    let mut presets: Vec<Preset> = ContentCategory::ALL
        .iter()
        .map(|category| {
            Preset::new(
                *category,
                DEFAULT_PRESET,
                targets
                    .iter()
                    .filter(|t| t.category == *category)
                    .map(|t| t.key.clone()),
            )
        })
        .collect();

    presets.extend([
        Preset::new(ContentCategory::Agents, "anthropic", ["claude"]),
        Preset::new(ContentCategory::Skills, "anthropic", ["claude"]),
        Preset::new(ContentCategory::Commands, "anthropic", ["claude"]),
        Preset::new(ContentCategory::Commands, "editors", ["cursor", "antigravity"]),
    ]);

    presets
}
