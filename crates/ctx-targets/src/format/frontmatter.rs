//! Leading `---` front-matter blocks

/// Line that opens and closes a front-matter block.
pub const DELIMITER: &str = "---";

/// Split a leading front-matter block from `content`.
///
/// Returns `(Some(block), body)` when the content starts with a line that is
/// exactly `---` and a later line is exactly `---`; the block excludes both
/// delimiter lines. Anything else, including an unterminated block, is all
/// body.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = after_opening_delimiter(content) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}

/// Drop a leading front-matter block, returning the rest.
pub fn strip(content: &str) -> &str {
    split(content).1
}

fn after_opening_delimiter(content: &str) -> Option<&str> {
    let end = content.find('\n')?;
    let first = content[..end].trim_end_matches('\r');
    (first == DELIMITER).then(|| &content[end + 1..])
}

/// Render a single-line YAML scalar.
///
/// Plain style when the value reads back unchanged, double-quoted otherwise.
pub fn yaml_scalar(value: &str) -> String {
    if is_plain_safe(value) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_plain_safe(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    if !first.is_alphanumeric() || value.ends_with(char::is_whitespace) || value.ends_with(':') {
        return false;
    }
    if value.contains(": ") || value.contains(" #") || value.contains(['\n', '\r', '\t']) {
        return false;
    }
    let lowered = value.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "y" | "n"
    ) {
        return false;
    }
    value.parse::<f64>().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn splits_leading_block() {
        let (block, body) = split("---\ndescription: x\n---\n# Title\n");
        assert_eq!(block, Some("description: x\n"));
        assert_eq!(body, "# Title\n");
    }

    #[test]
    fn handles_crlf_delimiters() {
        let (block, body) = split("---\r\na: 1\r\n---\r\nbody");
        assert_eq!(block, Some("a: 1\r\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn unterminated_block_is_body() {
        let content = "---\ndescription: x\n# Title\n";
        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn only_leading_block_counts() {
        let content = "# Title\n---\na: 1\n---\n";
        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn delimiter_must_be_exact() {
        let content = "----\na: 1\n----\nbody";
        assert_eq!(strip(content), content);
    }

    #[rstest]
    #[case("Update docs", "Update docs")]
    #[case("Deploy: staging", "\"Deploy: staging\"")]
    #[case("# heading", "\"# heading\"")]
    #[case("say \"hi\"", "say \"hi\"")]
    #[case("-flag", "\"-flag\"")]
    #[case("true", "\"true\"")]
    #[case("42", "\"42\"")]
    #[case("", "\"\"")]
    #[case("C:\\path \"x\": y", "\"C:\\\\path \\\"x\\\": y\"")]
    fn scalar_quoting(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(yaml_scalar(input), expected);
    }
}
