//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Context Sync - Mirror `.context/` agents, skills and commands into every tool
#[derive(Parser, Debug)]
#[command(name = "ctx")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root to operate on
    #[arg(short = 'C', long, global = true, env = "CTX_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the .context/ layout and seed command templates
    ///
    /// Existing command files are kept unless --force is given.
    Init {
        /// Overwrite seeded command files that already exist
        #[arg(long)]
        force: bool,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Mirror .context/ sources into every selected target
    ///
    /// Target lists are comma-separated preset names or target keys.
    /// An empty list skips the category.
    ///
    /// Examples:
    ///   ctx sync                         # All targets, all categories
    ///   ctx sync --commands editors      # Only the editors preset
    ///   ctx sync --agents "" --dry-run   # Skip agents, preview the rest
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Overwrite generate-once files that already exist
        #[arg(long)]
        force: bool,

        #[arg(long)]
        skip_agents: bool,

        #[arg(long)]
        skip_skills: bool,

        #[arg(long)]
        skip_commands: bool,

        #[arg(long)]
        skip_docs: bool,

        /// Agent targets (comma-separated)
        #[arg(long, value_name = "LIST")]
        agents: Option<String>,

        /// Skill targets (comma-separated)
        #[arg(long, value_name = "LIST")]
        skills: Option<String>,

        /// Command targets (comma-separated)
        #[arg(long, value_name = "LIST")]
        commands: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show whether generated docs are fresh or outdated
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List sync targets and presets
    Targets {
        /// Only show one category (agents, skills, commands)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Record that docs were just generated
    MarkGenerated,
}

/// Split a comma-separated target list.
///
/// `None` stays `None` (use defaults); an empty string yields an empty list.
pub fn parse_list(value: Option<String>) -> Option<Vec<String>> {
    value.map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
}
