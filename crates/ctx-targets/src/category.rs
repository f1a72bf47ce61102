//! Content categories

use crate::{Error, Result};
use ctx_fs::ContextPath;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of context artifact a source directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Agents,
    Skills,
    Commands,
    Docs,
}

impl ContentCategory {
    /// All categories in orchestration order.
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Agents,
        ContentCategory::Skills,
        ContentCategory::Commands,
        ContentCategory::Docs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Skills => "skills",
            Self::Commands => "commands",
            Self::Docs => "docs",
        }
    }

    /// Canonical source directory for this category.
    pub fn source_path(&self) -> ContextPath {
        match self {
            Self::Agents => ContextPath::Agents,
            Self::Skills => ContextPath::Skills,
            Self::Commands => ContextPath::Commands,
            Self::Docs => ContextPath::Docs,
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agents" | "agent" => Ok(Self::Agents),
            "skills" | "skill" => Ok(Self::Skills),
            "commands" | "command" => Ok(Self::Commands),
            "docs" | "doc" => Ok(Self::Docs),
            _ => Err(Error::InvalidCategory {
                name: s.to_string(),
            }),
        }
    }
}
