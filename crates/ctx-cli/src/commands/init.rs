//! Init command implementation
//!
//! Creates the `.context/` source layout and seeds command templates.

use colored::Colorize;
use ctx_core::{SyncOptions, init_context};
use ctx_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(root: &NormalizedPath, force: bool, dry_run: bool) -> Result<()> {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    println!(
        "{} {}Initializing {} in {}...",
        "=>".blue().bold(),
        prefix,
        ".context/".cyan(),
        root
    );

    let report = init_context(root, SyncOptions { force, dry_run })?;

    for file in report.generated() {
        println!("   {} {}{}", "+".green(), prefix, file);
    }
    for file in report.skipped() {
        println!("   {} {} (exists)", "=".dimmed(), file.dimmed());
    }
    for entry in report.failures() {
        println!("   {} {}: {}", "!".red(), entry.file, entry.outcome);
    }

    if report.has_failures() {
        return Err(CliError::user("Some command templates could not be written"));
    }

    println!("{} Context initialized!", "OK".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_context_dirs() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        run_init(&root, false, false).unwrap();

        for dir in ["agents", "skills", "commands", "docs"] {
            assert!(temp.path().join(".context").join(dir).is_dir());
        }
        assert!(temp.path().join(".context/commands/update-docs.md").exists());
    }

    #[test]
    fn test_init_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        run_init(&root, false, true).unwrap();

        assert!(!temp.path().join(".context").exists());
    }
}
