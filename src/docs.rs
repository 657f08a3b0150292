//! Doc-comment normalization and example mining

/// Normalize a raw doc comment into a description
///
/// Trims the text, normalizes CRLF line endings, trims each line, drops
/// blank lines, and rejoins with single newlines. Idempotent.
pub fn normalize_doc(doc: &str) -> String {
    if doc.is_empty() {
        return String::new();
    }

    let doc = doc.trim().replace("\r\n", "\n");

    doc.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mine embedded code examples out of a raw doc comment
///
/// Single left-to-right scan with two states. An example opens on a line
/// whose trimmed text starts with `Example:` or `Usage:`, or contains a
/// Go code-fence opener. It closes on a line containing a closing fence,
/// or on a blank line once content has been collected. While open, only
/// lines indented with a tab or four spaces contribute, with that one
/// prefix stripped; everything else is ignored. An open example that
/// reaches the end of the comment without a terminator is dropped.
pub fn mine_examples(doc: &str) -> Vec<String> {
    if doc.is_empty() {
        return Vec::new();
    }

    let mut examples = Vec::new();
    let mut in_example = false;
    let mut current = String::new();

    for line in doc.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("Example:")
            || trimmed.starts_with("Usage:")
            || trimmed.contains("```go")
        {
            in_example = true;
            current.clear();
            continue;
        }

        if in_example {
            if trimmed.contains("```") || (trimmed.is_empty() && !current.is_empty()) {
                if !current.is_empty() {
                    examples.push(std::mem::take(&mut current));
                }
                in_example = false;
                continue;
            }

            if line.starts_with("    ") || line.starts_with('\t') {
                let cleaned = line.strip_prefix("    ").unwrap_or(line);
                let cleaned = cleaned.strip_prefix('\t').unwrap_or(cleaned);
                current.push_str(cleaned);
                current.push('\n');
            }
        }
    }

    examples
}
