//! Description derivation for front-matter fields

const ELLIPSIS: &str = "...";

/// Derive a one-line description from a markdown body.
///
/// Uses the first `# ` heading if there is one, else the first non-empty
/// line. Whitespace is collapsed and the result cut to `limit` characters,
/// the tail replaced by `...`. Leading indentation and `N. ` step markers
/// are ignored when scanning lines, so a body and its numbered-step
/// rendering describe themselves identically. A source that already starts
/// with `1. Run tests` is therefore described as `Run tests`, not by its
/// literal first line.
pub fn derive_description(body: &str, limit: usize) -> String {
    let lines: Vec<&str> = body.lines().map(strip_step_markers).collect();

    let heading = lines
        .iter()
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|text| !text.is_empty());

    let source = heading
        .or_else(|| lines.iter().map(|l| l.trim()).find(|l| !l.is_empty()))
        .unwrap_or_default();

    truncate(&collapse_whitespace(source), limit)
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `limit` characters, ending in `...` when cut.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn strip_step_markers(line: &str) -> &str {
    let mut rest = line.trim_start();
    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        match rest[digits..].strip_prefix(". ") {
            Some(after) if digits > 0 => rest = after.trim_start(),
            _ => return rest,
        }
    }
}
