//! Workflow format: underscore filenames, `description` front-matter,
//! numbered-step bodies.
//!
//! Rendering always strips an existing leading front-matter block first, so
//! applying the transform to its own output changes nothing.

use super::describe::derive_description;
use super::frontmatter::{self, yaml_scalar};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of the generated `description` value.
pub const DESCRIPTION_LIMIT: usize = 250;

/// Continuation-line indent inside a wrapped step.
const STEP_INDENT: &str = "   ";

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\. ").expect("valid numbered item pattern"));

/// `update-docs.md` -> `update_docs.md`
pub fn transform_filename(source: &str) -> String {
    source.replace('-', "_").to_lowercase()
}

/// Render a command body as a workflow file.
pub fn transform_content(content: &str) -> String {
    let body = frontmatter::strip(content)
        .trim_start_matches(['\n', '\r'])
        .trim_end();

    let description = derive_description(body, DESCRIPTION_LIMIT);
    let steps = if has_numbered_item(body) {
        body.to_string()
    } else {
        wrap_as_step(body)
    };

    format!(
        "{delim}\ndescription: {}\n{delim}\n\n{}\n",
        yaml_scalar(&description),
        steps,
        delim = frontmatter::DELIMITER
    )
}

/// Whether any line starts with `<digits>. `.
pub fn has_numbered_item(body: &str) -> bool {
    NUMBERED_ITEM.is_match(body)
}

/// Express the whole body as step `1.`, indenting continuation lines.
fn wrap_as_step(body: &str) -> String {
    body.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("1. {line}")
            } else if line.trim().is_empty() {
                String::new()
            } else {
                format!("{STEP_INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
