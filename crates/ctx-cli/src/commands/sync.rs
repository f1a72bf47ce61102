//! Sync command implementation
//!
//! Runs the four-pass quick sync and prints a per-pass summary.

use colored::Colorize;
use ctx_core::{Manifest, PassOutcome, QuickSyncOptions, QuickSyncReport, run_quick_sync};
use ctx_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the sync command
///
/// Target lists and the docs threshold fall back to `.context/config.toml`
/// when not given on the command line.
pub fn run_sync(root: &NormalizedPath, mut options: QuickSyncOptions, json: bool) -> Result<()> {
    Manifest::load(root)?.apply_to(&mut options);

    if !json {
        let mode = if options.dry_run { " (dry run)" } else { "" };
        println!(
            "{} Synchronizing context{}...",
            "=>".blue().bold(),
            mode.yellow()
        );
    }

    let report = run_quick_sync(root, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, options.dry_run);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "Sync finished with {} error(s)",
            report.errors.len()
        )))
    }
}

fn print_report(report: &QuickSyncReport, dry_run: bool) {
    for pass in &report.passes {
        let name = format!("{:<9}", pass.pass.as_str());
        match &pass.outcome {
            PassOutcome::Synced { items, report: sync } => {
                let counts = sync.counts();
                let written = if dry_run {
                    format!("{} would write", counts.skipped_dry_run)
                } else {
                    format!("{} written", counts.written)
                };
                println!(
                    "   {} {} {} item(s): {}, {} unchanged",
                    "+".green(),
                    name.cyan(),
                    items,
                    written,
                    counts.skipped_exists
                );
            }
            PassOutcome::Checked { state, stale_docs } => {
                let freshness = match state.freshness {
                    ctx_core::Freshness::Fresh => state.freshness.as_str().green(),
                    ctx_core::Freshness::Outdated => state.freshness.as_str().yellow(),
                    ctx_core::Freshness::Unknown => state.freshness.as_str().dimmed(),
                };
                println!(
                    "   {} {} {} ({} doc(s) need an update)",
                    "+".green(),
                    name.cyan(),
                    freshness,
                    stale_docs
                );
            }
            PassOutcome::Skipped { reason } => {
                println!("   {} {} {}", "-".dimmed(), name.dimmed(), reason.to_string().dimmed());
            }
            PassOutcome::Unavailable { reason } => {
                println!("   {} {} unavailable: {}", "?".yellow(), name, reason);
            }
            PassOutcome::Failed { error } => {
                println!("   {} {} {}", "!".red(), name.red(), error);
            }
        }
    }

    if report.errors.is_empty() {
        println!("{} Synchronization complete.", "OK".green().bold());
    } else {
        println!();
        println!("{} Errors:", "FAILED".red().bold());
        for error in &report.errors {
            println!("   {} {}", "!".red(), error);
        }
    }
}
