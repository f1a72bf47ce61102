//! Resolution tests against the built-in registry.

use ctx_fs::NormalizedPath;
use ctx_targets::{
    ContentCategory, Error, TargetFormat, TargetRegistry, TargetSelection, WritePolicy,
};
use rstest::rstest;

fn root() -> NormalizedPath {
    NormalizedPath::new("/repo")
}

fn keys(registry: &TargetRegistry, category: ContentCategory, names: &[&str]) -> Vec<String> {
    let selection = TargetSelection::Named(names.iter().map(|s| s.to_string()).collect());
    registry
        .resolve(category, &selection, &root())
        .unwrap()
        .into_iter()
        .map(|r| r.key)
        .collect()
}

#[test]
fn default_selection_resolves_every_command_target() {
    let registry = TargetRegistry::with_builtins();
    let resolved = registry
        .resolve(ContentCategory::Commands, &TargetSelection::Default, &root())
        .unwrap();

    let paths: Vec<_> = resolved.iter().map(|r| r.destination.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/repo/.claude/commands",
            "/repo/.cursor/commands",
            "/repo/.opencode/command",
            "/repo/.agent/workflows",
        ]
    );
}

#[test]
fn empty_selection_resolves_to_nothing() {
    let registry = TargetRegistry::with_builtins();
    let resolved = registry
        .resolve(ContentCategory::Agents, &TargetSelection::Named(vec![]), &root())
        .unwrap();
    assert!(resolved.is_empty());
}

#[rstest]
#[case(ContentCategory::Commands, &["editors"], &["cursor", "antigravity"])]
#[case(ContentCategory::Commands, &["anthropic", "cursor"], &["claude", "cursor"])]
#[case(ContentCategory::Skills, &["codex"], &["codex"])]
#[case(ContentCategory::Agents, &["all"], &["claude", "github", "opencode"])]
fn presets_expand(
    #[case] category: ContentCategory,
    #[case] names: &[&str],
    #[case] expected: &[&str],
) {
    let registry = TargetRegistry::with_builtins();
    assert_eq!(keys(&registry, category, names), expected);
}

#[test]
fn unknown_key_fails_whole_resolution() {
    let registry = TargetRegistry::with_builtins();
    let selection = TargetSelection::Named(vec!["cursor".into(), "vim".into()]);

    let err = registry
        .resolve(ContentCategory::Commands, &selection, &root())
        .unwrap_err();

    match err {
        Error::UnknownTarget { category, key } => {
            assert_eq!(category, ContentCategory::Commands);
            assert_eq!(key, "vim");
        }
        other => panic!("expected UnknownTarget, got {other:?}"),
    }
}

#[test]
fn keys_are_scoped_by_category() {
    let registry = TargetRegistry::with_builtins();
    let selection = TargetSelection::Named(vec!["cursor".into()]);
    assert!(
        registry
            .resolve(ContentCategory::Skills, &selection, &root())
            .is_err()
    );
}

#[test]
fn antigravity_commands_use_workflow_format() {
    let registry = TargetRegistry::with_builtins();
    let target = registry.get(ContentCategory::Commands, "antigravity").unwrap();

    assert_eq!(target.format, TargetFormat::Workflow);
    assert_eq!(target.policy, WritePolicy::GenerateOnce);
    assert_eq!(target.path, ".agent/workflows");
}

#[test]
fn unknown_target_error_names_the_key() {
    let registry = TargetRegistry::with_builtins();
    let selection = TargetSelection::Named(vec!["nope".into()]);
    let err = registry
        .resolve(ContentCategory::Agents, &selection, &root())
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown agents target: nope");
}
