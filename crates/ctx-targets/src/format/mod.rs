//! Per-target format transformers
//!
//! Every destination belongs to one format family. Dispatch is an exhaustive
//! `match`, so a new family cannot be added without deciding how it names and
//! shapes files.

pub mod describe;
pub mod frontmatter;
pub mod skill;
pub mod workflow;

use serde::{Deserialize, Serialize};

/// Format family of a sync target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFormat {
    /// Byte-for-byte copy, same filename.
    Mirror,
    /// `snake_case.md` files with a `description` front-matter block and the
    /// body expressed as numbered steps.
    Workflow,
    /// One `<name>/SKILL.md` per item with `name` and `description`
    /// front-matter.
    Skill,
}

impl TargetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mirror => "mirror",
            Self::Workflow => "workflow",
            Self::Skill => "skill",
        }
    }

    /// Map a source filename (`kebab-case.md`) to the destination's
    /// filename, relative to the target directory.
    pub fn transform_filename(&self, source: &str) -> String {
        match self {
            Self::Mirror => source.to_string(),
            Self::Workflow => workflow::transform_filename(source),
            Self::Skill => skill::transform_filename(source),
        }
    }

    /// Render a source body for this format.
    ///
    /// `stem` is the source filename without `.md`.
    pub fn transform_content(&self, stem: &str, body: &str) -> String {
        match self {
            Self::Mirror => body.to_string(),
            Self::Workflow => workflow::transform_content(body),
            Self::Skill => skill::transform_content(stem, body),
        }
    }

    /// Write policy a target of this family gets unless it declares one.
    pub fn default_policy(&self) -> WritePolicy {
        match self {
            Self::Mirror | Self::Skill => WritePolicy::Mirror,
            Self::Workflow => WritePolicy::GenerateOnce,
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a destination treats a file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Destination is kept identical to the source; always overwritten.
    Mirror,
    /// Destination is written only when absent, or when forced.
    GenerateOnce,
}

impl WritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mirror => "mirror",
            Self::GenerateOnce => "generate-once",
        }
    }
}

impl std::fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
