//! Context directory scaffolding and command seeding

use crate::Result;
use crate::content::ContentItem;
use crate::sync::{SyncEngine, SyncOptions, SyncReport};
use ctx_fs::{ContextPath, NormalizedPath, io};
use ctx_targets::{ContentCategory, ResolvedTarget, TargetFormat, WritePolicy};

/// A built-in slash command seeded into `.context/commands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTemplate {
    pub file_name: &'static str,
    pub body: &'static str,
}

pub const COMMAND_TEMPLATES: &[CommandTemplate] = &[
    CommandTemplate {
        file_name: "update-docs.md",
        body: "# Update documentation\n\
\n\
Review the files under `.context/docs/` against the current state of the\n\
repository and bring them up to date.\n\
\n\
- Read each document and compare it with the code it describes.\n\
- Rewrite sections that no longer match; keep the existing structure.\n\
- Run `ctx mark-generated` when the docs are current.\n",
    },
    CommandTemplate {
        file_name: "sync-context.md",
        body: "# Sync context\n\
\n\
Mirror the canonical `.context/` sources into every configured tool\n\
directory.\n\
\n\
- Run `ctx sync --dry-run` and review the planned writes.\n\
- Run `ctx sync` to apply them.\n\
- Report any errors printed at the end of the run.\n",
    },
];

/// Command templates as content items.
pub fn template_items() -> Vec<ContentItem> {
    COMMAND_TEMPLATES
        .iter()
        .map(|t| ContentItem::new(t.file_name, t.body))
        .collect()
}

/// The `.context/commands` directory as a generate-once destination.
fn seed_target(root: &NormalizedPath) -> ResolvedTarget {
    ResolvedTarget {
        key: "context".to_string(),
        category: ContentCategory::Commands,
        destination: root.join(ContextPath::Commands.as_str()),
        format: TargetFormat::Mirror,
        policy: WritePolicy::GenerateOnce,
    }
}

/// Create the `.context/` source directories and seed command templates.
///
/// Existing templates are left alone unless `options.force` is set. In a dry
/// run no directory is created.
pub fn init_context(root: &NormalizedPath, options: SyncOptions) -> Result<SyncReport> {
    if !options.dry_run {
        for dir in ContextPath::source_dirs() {
            io::ensure_dir(&root.join(dir.as_str()))?;
        }
    }

    let report = SyncEngine::new(options).sync_items(&template_items(), &[seed_target(root)]);
    tracing::info!(
        root = %root,
        seeded = report.generated().len(),
        kept = report.skipped().len(),
        "initialized context directory"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_markdown_with_heading() {
        for template in COMMAND_TEMPLATES {
            assert!(template.file_name.ends_with(".md"));
            assert!(template.body.starts_with("# "));
        }
    }

    #[test]
    fn test_template_items_keep_order() {
        let items = template_items();
        assert_eq!(items.len(), COMMAND_TEMPLATES.len());
        assert_eq!(items[0].stem, "update-docs");
    }
}
