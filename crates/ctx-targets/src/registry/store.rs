//! Target registry storage and resolution

use super::{DEFAULT_PRESET, Preset, ResolvedTarget, SyncTarget, TargetSelection};
use crate::{ContentCategory, Error, Result};
use ctx_fs::NormalizedPath;

/// Central registry of sync targets and presets.
///
/// Targets are keyed by `(category, key)`; presets by `(category, name)`.
/// Registration order is preserved for listing and default resolution.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<SyncTarget>,
    presets: Vec<Preset>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with all built-in targets and presets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for target in super::builtins::builtin_targets() {
            registry.register(target);
        }
        for preset in super::builtins::builtin_presets() {
            // Built-in presets only reference built-in targets
            if let Err(e) = registry.register_preset(preset) {
                tracing::error!(error = %e, "invalid built-in preset");
            }
        }
        registry
    }

    /// Register a target, replacing any target with the same category and key.
    pub fn register(&mut self, target: SyncTarget) {
        match self
            .targets
            .iter_mut()
            .find(|t| t.category == target.category && t.key == target.key)
        {
            Some(existing) => *existing = target,
            None => self.targets.push(target),
        }
    }

    /// Register a preset.
    ///
    /// Every key the preset names must already be a registered target of
    /// the same category.
    pub fn register_preset(&mut self, preset: Preset) -> Result<()> {
        if let Some(key) = preset
            .targets
            .iter()
            .find(|key| self.get(preset.category, key).is_none())
        {
            return Err(Error::InvalidPreset {
                category: preset.category,
                preset: preset.name.clone(),
                key: key.clone(),
            });
        }

        match self
            .presets
            .iter_mut()
            .find(|p| p.category == preset.category && p.name == preset.name)
        {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
        Ok(())
    }

    /// Get a target by category and key.
    pub fn get(&self, category: ContentCategory, key: &str) -> Option<&SyncTarget> {
        self.targets
            .iter()
            .find(|t| t.category == category && t.key == key)
    }

    /// Get a preset by category and name.
    pub fn preset(&self, category: ContentCategory, name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|p| p.category == category && p.name == name)
    }

    /// Targets of one category, in registration order.
    pub fn targets(&self, category: ContentCategory) -> Vec<&SyncTarget> {
        self.targets
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Presets of one category, in registration order.
    pub fn presets(&self, category: ContentCategory) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Iterate over all targets.
    pub fn iter(&self) -> impl Iterator<Item = &SyncTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Resolve a selection to concrete destinations under `root`.
    ///
    /// Names are looked up as presets first, then as target keys. Duplicates
    /// keep their first position. Any unknown name fails the whole call.
    pub fn resolve(
        &self,
        category: ContentCategory,
        selection: &TargetSelection,
        root: &NormalizedPath,
    ) -> Result<Vec<ResolvedTarget>> {
        let keys: Vec<&str> = match selection {
            TargetSelection::Default => match self.preset(category, DEFAULT_PRESET) {
                Some(preset) => preset.targets.iter().map(String::as_str).collect(),
                None => self.targets(category).iter().map(|t| t.key.as_str()).collect(),
            },
            TargetSelection::Named(names) => {
                let mut keys = Vec::new();
                for name in names {
                    let name = name.trim();
                    match self.preset(category, name) {
                        Some(preset) => keys.extend(preset.targets.iter().map(String::as_str)),
                        None => keys.push(name),
                    }
                }
                keys
            }
        };

        let mut resolved: Vec<ResolvedTarget> = Vec::with_capacity(keys.len());
        for key in keys {
            let target = self.get(category, key).ok_or_else(|| Error::UnknownTarget {
                category,
                key: key.to_string(),
            })?;
            if !resolved.iter().any(|r| r.key == target.key) {
                resolved.push(target.resolve(root));
            }
        }

        tracing::debug!(
            %category,
            targets = ?resolved.iter().map(|r| r.key.as_str()).collect::<Vec<_>>(),
            "resolved sync targets"
        );
        Ok(resolved)
    }
}
