//! Manifest parsing for `.context/config.toml`
//!
//! The manifest pins per-category target selections and the docs freshness
//! threshold. Values given on the command line win over the manifest.

use crate::orchestrator::QuickSyncOptions;
use crate::state::DEFAULT_STALE_AFTER_DAYS;
use crate::{Error, Result};
use ctx_fs::{ContextPath, NormalizedPath, io};
use serde::{Deserialize, Serialize};

fn default_stale_after_days() -> i64 {
    DEFAULT_STALE_AFTER_DAYS
}

/// `[sync]` section: target names per category.
///
/// An omitted list means the category's default preset; an empty list
/// disables the category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSection {
    #[serde(default)]
    pub agents: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub commands: Option<Vec<String>>,
}

/// `[docs]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsSection {
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self {
            stale_after_days: default_stale_after_days(),
        }
    }
}

/// Parsed `.context/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub sync: SyncSection,
    #[serde(default)]
    pub docs: DocsSection,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use ctx_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [sync]
    /// agents = []
    /// commands = ["editors"]
    ///
    /// [docs]
    /// stale_after_days = 14
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.sync.agents, Some(vec![]));
    /// assert_eq!(manifest.sync.skills, None);
    /// assert_eq!(manifest.docs.stale_after_days, 14);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Load the manifest of the repository at `root`.
    ///
    /// A missing file yields the defaults.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(ContextPath::Config.as_str());
        let Some(content) = io::read_text_opt(&path)? else {
            return Ok(Self::default());
        };
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Fill in options the caller left unset.
    pub fn apply_to(&self, options: &mut QuickSyncOptions) {
        if options.agent_targets.is_none() {
            options.agent_targets = self.sync.agents.clone();
        }
        if options.skill_targets.is_none() {
            options.skill_targets = self.sync.skills.clone();
        }
        if options.command_targets.is_none() {
            options.command_targets = self.sync.commands.clone();
        }
        if options.stale_after_days.is_none() {
            options.stale_after_days = Some(self.docs.stale_after_days);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.docs.stale_after_days, DEFAULT_STALE_AFTER_DAYS);
    }

    #[test]
    fn test_cli_values_win() {
        let manifest = Manifest::parse("[sync]\nagents = [\"claude\"]\nskills = []\n").unwrap();
        let mut options = QuickSyncOptions {
            agent_targets: Some(vec!["github".into()]),
            ..Default::default()
        };

        manifest.apply_to(&mut options);

        assert_eq!(options.agent_targets, Some(vec!["github".to_string()]));
        assert_eq!(options.skill_targets, Some(vec![]));
        assert_eq!(options.command_targets, None);
        assert_eq!(options.stale_after_days, Some(DEFAULT_STALE_AFTER_DAYS));
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        assert_eq!(Manifest::load(&root).unwrap(), Manifest::default());

        std::fs::create_dir_all(temp.path().join(".context")).unwrap();
        std::fs::write(temp.path().join(".context/config.toml"), "[sync\n").unwrap();
        let err = Manifest::load(&root).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
