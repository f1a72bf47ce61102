//! Core types for the target registry

use crate::{ContentCategory, TargetFormat, WritePolicy};
use ctx_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// A destination a category of content can be synced to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTarget {
    /// Machine identifier, unique within a category (e.g., "cursor")
    pub key: String,
    /// Category of content this target receives
    pub category: ContentCategory,
    /// Display name (e.g., "Cursor")
    pub label: String,
    /// Destination directory relative to the repository root
    pub path: String,
    /// Format family used to render each item
    pub format: TargetFormat,
    /// Overwrite behavior for existing destination files
    pub policy: WritePolicy,
}

impl SyncTarget {
    /// Create a target with its format's default write policy.
    pub fn new(
        category: ContentCategory,
        key: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        format: TargetFormat,
    ) -> Self {
        Self {
            key: key.into(),
            category,
            label: label.into(),
            path: path.into(),
            format,
            policy: format.default_policy(),
        }
    }

    /// Override the write policy (builder pattern).
    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bind this target to a repository root.
    pub fn resolve(&self, root: &NormalizedPath) -> ResolvedTarget {
        ResolvedTarget {
            key: self.key.clone(),
            category: self.category,
            destination: root.join(&self.path),
            format: self.format,
            policy: self.policy,
        }
    }
}

/// A named group of target keys within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub category: ContentCategory,
    pub targets: Vec<String>,
}

impl Preset {
    pub fn new<I, S>(category: ContentCategory, name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            category,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which targets a caller wants for one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetSelection {
    /// No explicit choice: use the category's default preset.
    #[default]
    Default,
    /// Preset names and/or target keys. An empty list selects nothing.
    Named(Vec<String>),
}

impl TargetSelection {
    /// `None` means default, `Some(list)` an explicit (possibly empty) choice.
    pub fn from_option(names: Option<Vec<String>>) -> Self {
        match names {
            Some(names) => Self::Named(names),
            None => Self::Default,
        }
    }

    /// Whether the caller explicitly asked for no targets.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Named(names) if names.is_empty())
    }
}

/// A target bound to a concrete destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub key: String,
    pub category: ContentCategory,
    pub destination: NormalizedPath,
    pub format: TargetFormat,
    pub policy: WritePolicy,
}

impl ResolvedTarget {
    /// Destination file for a source item.
    pub fn destination_for(&self, source_file_name: &str) -> NormalizedPath {
        self.destination
            .join(&self.format.transform_filename(source_file_name))
    }
}
