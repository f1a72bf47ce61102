//! Targets command implementation

use colored::Colorize;
use ctx_targets::{ContentCategory, TargetRegistry};

use crate::error::Result;

/// Run the targets command
///
/// Lists every registered target and preset, optionally for one category.
pub fn run_targets(category: Option<&str>) -> Result<()> {
    let registry = TargetRegistry::with_builtins();
    let categories: Vec<ContentCategory> = match category {
        Some(name) => vec![name.parse::<ContentCategory>()?],
        None => ContentCategory::ALL
            .into_iter()
            .filter(|c| *c != ContentCategory::Docs)
            .collect(),
    };

    for category in categories {
        println!("{}:", category.as_str().bold());

        let targets = registry.targets(category);
        if targets.is_empty() {
            println!("  {}", "None".dimmed());
        }
        for target in targets {
            println!(
                "  {} {} {:<20} {} ({})",
                "+".green(),
                format!("{:<12}", target.key).cyan(),
                target.path,
                target.format,
                target.policy.to_string().dimmed()
            );
        }

        for preset in registry.presets(category) {
            println!(
                "  {} {} {}",
                "@".yellow(),
                format!("{:<12}", preset.name).yellow(),
                preset.targets.join(", ").dimmed()
            );
        }
        println!();
    }

    Ok(())
}
