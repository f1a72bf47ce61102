//! Status and mark-generated command implementations

use chrono::Utc;
use colored::Colorize;
use ctx_core::{Freshness, FreshnessBasis, Manifest, StateDetector, mark_generated};
use ctx_fs::{ContextPath, NormalizedPath};

use crate::error::Result;

/// Run the status command
pub fn run_status(root: &NormalizedPath, json: bool) -> Result<()> {
    let manifest = Manifest::load(root)?;
    let state = StateDetector::new(root.clone())
        .with_threshold_days(manifest.docs.stale_after_days)
        .detect();

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}", "Context Status".bold());
    println!();
    println!("{}:   {}", "Root".dimmed(), root);

    let freshness = match state.freshness {
        Freshness::Fresh => "fresh".green().bold(),
        Freshness::Outdated => "outdated".yellow().bold(),
        Freshness::Unknown => "unknown".dimmed(),
    };
    println!("{}:   {}", "Docs".dimmed(), freshness);

    match (state.days_behind, state.last_generated) {
        (Some(days), Some(at)) => {
            let basis = match state.basis {
                FreshnessBasis::Marker => "marker",
                FreshnessBasis::MarkerModified => "marker mtime",
                FreshnessBasis::DocsModified => "docs mtime",
                FreshnessBasis::None => "none",
            };
            println!(
                "{}:   {} day(s) ago ({}, from {})",
                "Last".dimmed(),
                days,
                at.to_rfc3339(),
                basis
            );
            println!("{}:   {} day(s)", "Limit".dimmed(), state.threshold_days);
        }
        _ => {
            println!();
            println!(
                "No generation marker found. Run {} after generating docs.",
                "ctx mark-generated".cyan()
            );
        }
    }

    if state.is_outdated() {
        println!();
        println!("Docs are stale. Regenerate them, then run {}.", "ctx mark-generated".cyan());
    }

    Ok(())
}

/// Run the mark-generated command
pub fn run_mark_generated(root: &NormalizedPath) -> Result<()> {
    let path = mark_generated(root, Utc::now())?;
    println!(
        "{} Marked docs as generated ({})",
        "OK".green().bold(),
        path.relative_to(root)
            .unwrap_or_else(|| ContextPath::GenerationMarker.as_str())
    );
    Ok(())
}
