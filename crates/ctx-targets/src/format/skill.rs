//! Skill format: one directory per skill holding a `SKILL.md`.

use super::describe::{collapse_whitespace, derive_description, truncate};
use super::frontmatter::{self, yaml_scalar};
use serde::Deserialize;

/// Filename every skill directory carries.
pub const SKILL_FILE: &str = "SKILL.md";

/// Maximum length of a skill `description`.
pub const DESCRIPTION_LIMIT: usize = 1024;

#[derive(Debug, Default, Deserialize)]
struct SkillMeta {
    name: Option<String>,
    description: Option<String>,
}

/// `code-review.md` -> `code-review/SKILL.md`
pub fn transform_filename(source: &str) -> String {
    let stem = source.strip_suffix(".md").unwrap_or(source);
    format!("{stem}/{SKILL_FILE}")
}

/// Render a skill body with `name` and `description` front-matter.
///
/// Values already declared in the source front-matter win; other keys are
/// dropped. Front-matter that does not parse is treated as absent.
pub fn transform_content(stem: &str, content: &str) -> String {
    let (block, body) = frontmatter::split(content);
    let meta = block
        .and_then(|b| match serde_yaml::from_str::<SkillMeta>(b) {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::debug!(skill = stem, error = %e, "ignoring unparsable skill front-matter");
                None
            }
        })
        .unwrap_or_default();

    let body = body.trim_start_matches(['\n', '\r']).trim_end();

    let name = meta
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| stem.to_string());

    let description = meta
        .description
        .map(|d| truncate(&collapse_whitespace(&d), DESCRIPTION_LIMIT))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| derive_description(body, DESCRIPTION_LIMIT));

    format!(
        "{delim}\nname: {}\ndescription: {}\n{delim}\n\n{}\n",
        yaml_scalar(&name),
        yaml_scalar(&description),
        body,
        delim = frontmatter::DELIMITER
    )
}
