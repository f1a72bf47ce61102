//! Format validation tests for workflow and skill output.
//!
//! Covers filename conventions, description truncation, and stability of
//! each transformer when applied to its own output.

use ctx_targets::TargetFormat;
use ctx_targets::format::{frontmatter, workflow};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn description_of(rendered: &str) -> String {
    let (block, _) = frontmatter::split(rendered);
    let block = block.expect("rendered workflow has front-matter");
    let line = block
        .lines()
        .find_map(|l| l.strip_prefix("description: "))
        .expect("description field present");
    // Quoted scalars only escape `"` and `\\` for this input range
    match line.strip_prefix('"').and_then(|l| l.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => line.to_string(),
    }
}

#[test]
fn workflow_file_snapshot() {
    let source = "---\nallowed-tools: Bash\n---\n# Sync context\n\nMirror .context into every tool.\nReport what changed.\n";
    let rendered = TargetFormat::Workflow.transform_content("sync-context", source);

    insta::assert_snapshot!(rendered, @r"
    ---
    description: Sync context
    ---

    1. # Sync context

       Mirror .context into every tool.
       Report what changed.
    ");
}

#[test]
fn long_heading_is_cut_to_limit() {
    let heading = "word ".repeat(80);
    let rendered = workflow::transform_content(&format!("# {heading}\nbody"));
    let description = description_of(&rendered);

    assert_eq!(description.chars().count(), workflow::DESCRIPTION_LIMIT);
    assert!(description.ends_with("..."));
}

#[test]
fn short_first_line_is_kept_exactly() {
    let rendered = workflow::transform_content("  Refresh   the docs\tindex  \n\nmore text");
    assert_eq!(description_of(&rendered), "Refresh the docs index");
}

#[test]
fn description_never_spans_lines() {
    let rendered = workflow::transform_content("# Title\nwith\nlines");
    let (block, _) = frontmatter::split(&rendered);
    assert_eq!(block.unwrap().lines().count(), 1);
}

#[test]
fn skill_layout() {
    assert_eq!(
        TargetFormat::Skill.transform_filename("api-design.md"),
        "api-design/SKILL.md"
    );
}

proptest! {
    #[test]
    fn kebab_names_become_snake_case(parts in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        let source = format!("{}.md", parts.join("-"));
        let expected = format!("{}.md", parts.join("_"));
        let out = TargetFormat::Workflow.transform_filename(&source);

        prop_assert_eq!(&out, &expected);
        prop_assert!(!out.contains('-'));
        prop_assert_eq!(out.matches(".md").count(), 1);
    }

    #[test]
    fn workflow_render_is_idempotent(body in "[ -~\n]{0,400}") {
        let once = workflow::transform_content(&body);
        let twice = workflow::transform_content(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with("---\ndescription: "));
    }

    #[test]
    fn skill_render_is_idempotent(body in "[ -~\n]{0,400}") {
        let once = TargetFormat::Skill.transform_content("prop-skill", &body);
        let twice = TargetFormat::Skill.transform_content("prop-skill", &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn description_respects_limit(line in "[a-zA-Z ]{0,600}") {
        let rendered = workflow::transform_content(&line);
        let description = description_of(&rendered);
        let cleaned = line.split_whitespace().collect::<Vec<_>>().join(" ");

        prop_assert!(description.chars().count() <= workflow::DESCRIPTION_LIMIT);
        if cleaned.chars().count() <= workflow::DESCRIPTION_LIMIT && !cleaned.is_empty() {
            prop_assert_eq!(description, cleaned);
        }
    }
}
