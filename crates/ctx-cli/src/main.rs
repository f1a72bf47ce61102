//! Context Sync CLI
//!
//! Scaffolds `.context/` and mirrors its markdown sources into tool-specific
//! directories.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use ctx_fs::NormalizedPath;

use cli::{Cli, Commands, parse_list};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!(root = %cli.root.display(), "starting");

    let root = NormalizedPath::new(&cli.root);
    match cli.command {
        Some(cmd) => execute_command(&root, cmd),
        None => {
            println!("{} Context Sync CLI", "ctx".green().bold());
            println!();
            println!("Run {} for available commands.", "ctx --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(root: &NormalizedPath, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init { force, dry_run } => commands::run_init(root, force, dry_run),
        Commands::Sync {
            dry_run,
            force,
            skip_agents,
            skip_skills,
            skip_commands,
            skip_docs,
            agents,
            skills,
            commands,
            json,
        } => {
            let options = ctx_core::QuickSyncOptions {
                force,
                dry_run,
                skip_agents,
                skip_skills,
                skip_commands,
                skip_docs,
                agent_targets: parse_list(agents),
                skill_targets: parse_list(skills),
                command_targets: parse_list(commands),
                stale_after_days: None,
            };
            commands::run_sync(root, options, json)
        }
        Commands::Status { json } => commands::run_status(root, json),
        Commands::Targets { category } => commands::run_targets(category.as_deref()),
        Commands::MarkGenerated => commands::run_mark_generated(root),
    }
}
