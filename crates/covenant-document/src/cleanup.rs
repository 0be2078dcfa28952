//! Cleanup of raw PDF extraction output

use regex::Regex;
use std::sync::LazyLock;

static PAGE_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\s*$").unwrap());

// Header/footer boilerplate that extraction drags into the body text
static ARTIFACTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Page \d+ of \d+|Confidential|Draft|Final|Copy|Original").unwrap()
});

static EXCESS_LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw extraction output: collapse whitespace runs per line,
/// drop blank lines, then strip common PDF artifacts.
pub(crate) fn clean_extracted_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();

    remove_artifacts(&lines.join("\n"))
}

fn remove_artifacts(text: &str) -> String {
    let text = PAGE_NUMBER_LINE.replace_all(text, "");
    let text = ARTIFACTS.replace_all(&text, "");
    let text = EXCESS_LINE_BREAKS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Count of non-whitespace characters, the unit of the minimum-content
/// threshold.
pub(crate) fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
