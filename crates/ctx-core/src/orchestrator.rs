//! Quick sync orchestration
//!
//! Runs the four category passes (agents, skills, commands, docs) in a fixed
//! order. Each pass produces a typed [`PassOutcome`]; outcomes are collected
//! first and folded into a [`QuickSyncReport`] only after every pass ran, so
//! one failing pass never prevents the next from being attempted.

use crate::Result;
use crate::content::ContentItem;
use crate::state::{DEFAULT_STALE_AFTER_DAYS, DocsState, StateDetector};
use crate::sync::{SyncEngine, SyncOptions, SyncOutcome, SyncReport};
use ctx_fs::NormalizedPath;
use ctx_targets::{ContentCategory, ResolvedTarget, TargetFormat, TargetRegistry, TargetSelection};
use serde::Serialize;

/// Options for [`run_quick_sync`].
///
/// Target lists follow [`TargetSelection::from_option`]: `None` selects the
/// category's default preset, `Some(vec![])` selects nothing and skips the
/// pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickSyncOptions {
    pub force: bool,
    pub dry_run: bool,
    pub skip_agents: bool,
    pub skip_skills: bool,
    pub skip_commands: bool,
    pub skip_docs: bool,
    pub agent_targets: Option<Vec<String>>,
    pub skill_targets: Option<Vec<String>>,
    pub command_targets: Option<Vec<String>>,
    /// Freshness threshold; defaults to [`DEFAULT_STALE_AFTER_DAYS`]
    pub stale_after_days: Option<i64>,
}

impl QuickSyncOptions {
    fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            force: self.force,
            dry_run: self.dry_run,
        }
    }
}

/// One step of a quick sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    Agents,
    Skills,
    Commands,
    Docs,
}

impl Pass {
    /// All passes in execution order.
    pub const ALL: [Pass; 4] = [Self::Agents, Self::Skills, Self::Commands, Self::Docs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Skills => "skills",
            Self::Commands => "commands",
            Self::Docs => "docs",
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a pass did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Caller set the pass's skip flag
    Requested,
    /// Target selection was explicitly empty
    NoTargets,
    /// Category source directory does not exist
    SourceMissing,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Requested => "skipped by request",
            Self::NoTargets => "no targets selected",
            Self::SourceMissing => "source directory missing",
        })
    }
}

/// Typed result of a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum PassOutcome {
    /// Items were pushed through the sync engine
    Synced { items: usize, report: SyncReport },
    /// Docs freshness was checked
    Checked { state: DocsState, stale_docs: usize },
    Skipped { reason: SkipReason },
    /// Optional subsystem could not run; not an error
    Unavailable { reason: String },
    /// The pass returned an error
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub pass: Pass,
    #[serde(flatten)]
    pub outcome: PassOutcome,
}

/// Aggregate result of [`run_quick_sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuickSyncReport {
    pub agents_synced: usize,
    pub skills_exported: usize,
    pub commands_synced: usize,
    pub docs_updated: usize,
    pub docs_state: Option<DocsState>,
    pub passes: Vec<PassReport>,
    pub errors: Vec<String>,
}

impl QuickSyncReport {
    /// Fold collected pass results into one report.
    pub fn fold(results: Vec<(Pass, Result<PassOutcome>)>) -> Self {
        let mut report = Self::default();

        for (pass, result) in results {
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    report.errors.push(format!("{pass}: {e}"));
                    PassOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };

            match &outcome {
                PassOutcome::Synced { items, report: sync } => {
                    match pass {
                        Pass::Agents => report.agents_synced = *items,
                        Pass::Skills => report.skills_exported = *items,
                        Pass::Commands => report.commands_synced = *items,
                        Pass::Docs => {}
                    }
                    report.errors.extend(sync.failures().map(|entry| {
                        format!(
                            "{pass}: {} -> {}: {}",
                            entry.item,
                            entry.target,
                            failure_reason(&entry.outcome)
                        )
                    }));
                }
                PassOutcome::Checked { state, stale_docs } => {
                    report.docs_updated = *stale_docs;
                    report.docs_state = Some(state.clone());
                }
                PassOutcome::Skipped { .. }
                | PassOutcome::Unavailable { .. }
                | PassOutcome::Failed { .. } => {}
            }

            report.passes.push(PassReport { pass, outcome });
        }

        report
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn pass(&self, pass: Pass) -> Option<&PassOutcome> {
        self.passes
            .iter()
            .find(|p| p.pass == pass)
            .map(|p| &p.outcome)
    }
}

fn failure_reason(outcome: &SyncOutcome) -> &str {
    match outcome {
        SyncOutcome::Failed { reason } => reason,
        _ => "",
    }
}

/// Targets chosen for each syncing pass. `None` means the pass was skipped
/// by request and its selection never resolved.
#[derive(Debug, Clone, Default)]
struct Plan {
    agents: Option<Vec<ResolvedTarget>>,
    skills: Option<Vec<ResolvedTarget>>,
    commands: Option<Vec<ResolvedTarget>>,
}

/// Drives the category passes for one repository.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    root: NormalizedPath,
    registry: TargetRegistry,
}

impl Orchestrator {
    /// Create an orchestrator using the built-in targets.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self::with_registry(root, TargetRegistry::with_builtins())
    }

    pub fn with_registry(root: impl Into<NormalizedPath>, registry: TargetRegistry) -> Self {
        Self {
            root: root.into(),
            registry,
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Run all four passes.
    ///
    /// # Errors
    ///
    /// Only target resolution errors propagate, and they do so before any
    /// pass touches the filesystem. Everything else lands in the report.
    pub fn run(&self, options: &QuickSyncOptions) -> Result<QuickSyncReport> {
        let plan = self.plan(options)?;
        let sync = options.sync_options();
        let threshold = options
            .stale_after_days
            .unwrap_or(DEFAULT_STALE_AFTER_DAYS);

        let mut results = Vec::with_capacity(Pass::ALL.len());
        for pass in Pass::ALL {
            let result = match pass {
                Pass::Agents => match &plan.agents {
                    Some(targets) => self.sync_agents(targets, sync),
                    None => Ok(skipped(SkipReason::Requested)),
                },
                Pass::Skills => match &plan.skills {
                    Some(targets) => self.export_skills(targets, sync),
                    None => Ok(skipped(SkipReason::Requested)),
                },
                Pass::Commands => match &plan.commands {
                    Some(targets) => self.sync_commands(targets, sync),
                    None => Ok(skipped(SkipReason::Requested)),
                },
                Pass::Docs if options.skip_docs => Ok(skipped(SkipReason::Requested)),
                Pass::Docs => self.check_docs(threshold),
            };
            log_pass(pass, &result);
            results.push((pass, result));
        }

        Ok(QuickSyncReport::fold(results))
    }

    fn plan(&self, options: &QuickSyncOptions) -> Result<Plan> {
        Ok(Plan {
            agents: self.select(
                ContentCategory::Agents,
                options.skip_agents,
                &options.agent_targets,
            )?,
            skills: self.select(
                ContentCategory::Skills,
                options.skip_skills,
                &options.skill_targets,
            )?,
            commands: self.select(
                ContentCategory::Commands,
                options.skip_commands,
                &options.command_targets,
            )?,
        })
    }

    fn select(
        &self,
        category: ContentCategory,
        skip: bool,
        names: &Option<Vec<String>>,
    ) -> Result<Option<Vec<ResolvedTarget>>> {
        if skip {
            return Ok(None);
        }
        let selection = TargetSelection::from_option(names.clone());
        let targets = self.registry.resolve(category, &selection, &self.root)?;
        Ok(Some(targets))
    }

    fn source_dir(&self, category: ContentCategory) -> NormalizedPath {
        self.root.join(category.source_path().as_str())
    }

    /// Mirror `.context/agents` into each agent target.
    pub fn sync_agents(&self, targets: &[ResolvedTarget], options: SyncOptions) -> Result<PassOutcome> {
        if targets.is_empty() {
            return Ok(skipped(SkipReason::NoTargets));
        }
        let source = self.source_dir(ContentCategory::Agents);
        if !source.is_dir() {
            return Ok(skipped(SkipReason::SourceMissing));
        }

        let items = ContentItem::load_dir(&source)?;
        let report = SyncEngine::new(options).sync_items(&items, targets);
        Ok(PassOutcome::Synced {
            items: items.len(),
            report,
        })
    }

    /// Export `.context/skills` into each skill target.
    ///
    /// Skills are optional: a source that cannot be listed makes the pass
    /// unavailable rather than failed.
    pub fn export_skills(
        &self,
        targets: &[ResolvedTarget],
        options: SyncOptions,
    ) -> Result<PassOutcome> {
        if targets.is_empty() {
            return Ok(skipped(SkipReason::NoTargets));
        }
        let source = self.source_dir(ContentCategory::Skills);
        if !source.is_dir() {
            return Ok(skipped(SkipReason::SourceMissing));
        }

        let items = match ContentItem::load_dir(&source) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %source, error = %e, "skills source unavailable");
                return Ok(PassOutcome::Unavailable {
                    reason: e.to_string(),
                });
            }
        };

        let report = SyncEngine::new(options).sync_items(&items, targets);
        Ok(PassOutcome::Synced {
            items: items.len(),
            report,
        })
    }

    /// Sync `.context/commands` into each command target.
    ///
    /// The source is listed once. Workflow targets are rendered one target
    /// at a time; every other target is synced in a single batch. Both paths
    /// see the same item snapshot.
    pub fn sync_commands(
        &self,
        targets: &[ResolvedTarget],
        options: SyncOptions,
    ) -> Result<PassOutcome> {
        if targets.is_empty() {
            return Ok(skipped(SkipReason::NoTargets));
        }
        let source = self.source_dir(ContentCategory::Commands);
        if !source.is_dir() {
            return Ok(skipped(SkipReason::SourceMissing));
        }

        let items = ContentItem::load_dir(&source)?;
        let engine = SyncEngine::new(options);

        let (workflows, mirrors): (Vec<_>, Vec<_>) = targets
            .iter()
            .cloned()
            .partition(|t| t.format == TargetFormat::Workflow);

        let mut report = SyncReport::new();
        for target in &workflows {
            report.extend(engine.sync_items(&items, std::slice::from_ref(target)));
        }
        if !mirrors.is_empty() {
            report.extend(engine.sync_items(&items, &mirrors));
        }

        Ok(PassOutcome::Synced {
            items: items.len(),
            report,
        })
    }

    /// Classify `.context/docs` freshness.
    ///
    /// When outdated, every doc counts as needing an update.
    pub fn check_docs(&self, threshold_days: i64) -> Result<PassOutcome> {
        let state = StateDetector::new(self.root.clone())
            .with_threshold_days(threshold_days)
            .detect();

        let stale_docs = if state.is_outdated() {
            ContentItem::count_dir(&self.source_dir(ContentCategory::Docs))?
        } else {
            0
        };

        Ok(PassOutcome::Checked { state, stale_docs })
    }
}

/// Run a quick sync of the repository at `root` with the built-in targets.
pub fn run_quick_sync(root: &NormalizedPath, options: &QuickSyncOptions) -> Result<QuickSyncReport> {
    Orchestrator::new(root.clone()).run(options)
}

fn skipped(reason: SkipReason) -> PassOutcome {
    PassOutcome::Skipped { reason }
}

fn log_pass(pass: Pass, result: &Result<PassOutcome>) {
    match result {
        Ok(PassOutcome::Synced { items, report }) => {
            let counts = report.counts();
            tracing::info!(
                %pass,
                items,
                written = counts.written,
                skipped = counts.skipped_exists,
                dry_run = counts.skipped_dry_run,
                failed = counts.failed,
                "pass complete"
            );
        }
        Ok(PassOutcome::Checked { state, stale_docs }) => {
            tracing::info!(%pass, freshness = %state.freshness, stale_docs, "docs checked");
        }
        Ok(PassOutcome::Skipped { reason }) => tracing::info!(%pass, %reason, "pass skipped"),
        Ok(PassOutcome::Unavailable { reason }) => {
            tracing::info!(%pass, %reason, "pass unavailable")
        }
        Ok(PassOutcome::Failed { error }) => tracing::warn!(%pass, %error, "pass failed"),
        Err(e) => tracing::warn!(%pass, error = %e, "pass failed"),
    }
}
