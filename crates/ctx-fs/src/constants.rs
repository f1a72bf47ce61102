//! Well-known paths of the context source tree.

use std::path::Path;

/// Directories and markers under the repository's `.context/` root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPath {
    /// The `.context` directory (canonical source root)
    Root,
    /// Agent prompt sources
    Agents,
    /// Skill definition sources
    Skills,
    /// Slash-command sources
    Commands,
    /// Generated documentation
    Docs,
    /// Optional manifest with per-category target selections
    Config,
    /// Timestamp written after each documentation generation run
    GenerationMarker,
}

impl ContextPath {
    /// Get the path relative to the repository root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => ".context",
            Self::Agents => ".context/agents",
            Self::Skills => ".context/skills",
            Self::Commands => ".context/commands",
            Self::Docs => ".context/docs",
            Self::Config => ".context/config.toml",
            Self::GenerationMarker => ".context/.last-generated",
        }
    }

    /// The four flat source directories, in scaffold order.
    pub fn source_dirs() -> [ContextPath; 4] {
        [Self::Agents, Self::Skills, Self::Commands, Self::Docs]
    }
}

impl AsRef<Path> for ContextPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ContextPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ContextPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
