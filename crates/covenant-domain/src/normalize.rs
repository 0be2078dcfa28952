//! Normalization rules applied to model output before it reaches a caller

use regex::Regex;
use std::sync::LazyLock;

/// Canonical spellings for party names the model commonly varies.
/// Lookup is by lowercased, trimmed input; unmatched names pass through
/// trimmed but otherwise untouched.
const PARTY_SYNONYMS: &[(&str, &str)] = &[
    ("party a", "Party A"),
    ("party b", "Party B"),
    ("company", "Company"),
    ("vendor", "Vendor"),
    ("client", "Client"),
    ("customer", "Customer"),
    ("supplier", "Supplier"),
    ("contractor", "Contractor"),
    ("subcontractor", "Subcontractor"),
];

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}",    // YYYY-MM-DD
        r"^\d{1,2}/\d{1,2}/\d{4}", // MM/DD/YYYY
        r"^\d{1,2}-\d{1,2}-\d{4}", // MM-DD-YYYY
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TEXT_DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{4}-\d{2}-\d{2}",
        r"\d{1,2}/\d{1,2}/\d{4}",
        r"\d{1,2}-\d{1,2}-\d{4}",
        r"(?i)\b\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Normalize a responsible-party name via the synonym table.
///
/// Idempotent: canonical names map to themselves.
///
/// # Examples
///
/// ```
/// use covenant_domain::normalize::normalize_party_name;
///
/// assert_eq!(normalize_party_name("party a"), "Party A");
/// assert_eq!(normalize_party_name("Party A"), "Party A");
/// assert_eq!(normalize_party_name("Acme Corp"), "Acme Corp");
/// ```
pub fn normalize_party_name(party_name: &str) -> String {
    let trimmed = party_name.trim();
    let lowered = trimmed.to_lowercase();

    PARTY_SYNONYMS
        .iter()
        .find(|(variant, _)| *variant == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Normalize a due-date string.
///
/// Any case-insensitive spelling of "ongoing" maps to the literal
/// `"Ongoing"`. Recognized date strings and free text both pass through
/// unchanged; due dates are never rejected for failing the pattern check.
pub fn normalize_due_date(due_date: &str) -> String {
    if due_date.trim().eq_ignore_ascii_case("ongoing") {
        return "Ongoing".to_string();
    }
    due_date.to_string()
}

/// Whether a due-date string starts with one of the recognized date
/// patterns (`YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`).
pub fn is_recognized_date(due_date: &str) -> bool {
    DATE_PATTERNS.iter().any(|p| p.is_match(due_date))
}

/// Find date-like substrings in free text, deduplicated and in first-seen
/// order. Useful for cross-checking extracted due dates against the source.
pub fn extract_dates_from_text(text: &str) -> Vec<String> {
    let mut dates = Vec::new();
    for pattern in TEXT_DATE_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let date = found.as_str().to_string();
            if !dates.contains(&date) {
                dates.push(date);
            }
        }
    }
    dates
}

/// Clean obligation text: collapse whitespace runs and replace curly/smart
/// quote variants with plain ASCII quotes and apostrophes.
pub fn clean_obligation_text(text: &str) -> String {
    let ascii_quoted: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();

    collapse_whitespace(&ascii_quoted)
}

/// Clean summary text: collapse whitespace runs and force a trailing
/// period if one is missing.
pub fn clean_summary_text(text: &str) -> String {
    let mut cleaned = collapse_whitespace(text);
    if !cleaned.is_empty() && !cleaned.ends_with('.') {
        cleaned.push('.');
    }
    cleaned
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_normalization_case_insensitive() {
        assert_eq!(normalize_party_name("party a"), "Party A");
        assert_eq!(normalize_party_name("Party A"), "Party A");
        assert_eq!(normalize_party_name("PARTY A"), "Party A");
        assert_eq!(normalize_party_name("  vendor  "), "Vendor");
    }

    #[test]
    fn test_party_normalization_idempotent() {
        for (_, canonical) in PARTY_SYNONYMS {
            assert_eq!(normalize_party_name(canonical), *canonical);
        }
    }

    #[test]
    fn test_unmatched_party_passes_through_trimmed() {
        assert_eq!(normalize_party_name("  Acme Corp  "), "Acme Corp");
    }

    #[test]
    fn test_due_date_ongoing() {
        assert_eq!(normalize_due_date("ongoing"), "Ongoing");
        assert_eq!(normalize_due_date("ONGOING"), "Ongoing");
        assert_eq!(normalize_due_date("OnGoing"), "Ongoing");
    }

    #[test]
    fn test_due_date_passthrough() {
        assert_eq!(normalize_due_date("2026-03-01"), "2026-03-01");
        assert_eq!(normalize_due_date("3/15/2026"), "3/15/2026");
        assert_eq!(
            normalize_due_date("within 30 days of signing"),
            "within 30 days of signing"
        );
    }

    #[test]
    fn test_recognized_date_patterns() {
        assert!(is_recognized_date("2026-03-01"));
        assert!(is_recognized_date("3/15/2026"));
        assert!(is_recognized_date("12-31-2026"));
        assert!(!is_recognized_date("next Tuesday"));
        assert!(!is_recognized_date("Ongoing"));
    }

    #[test]
    fn test_extract_dates_from_text() {
        let text = "Payment due 2026-03-01, renewal on 3/15/2026, signed 12 March 2026. \
                    Again: 2026-03-01.";
        let dates = extract_dates_from_text(text);
        assert!(dates.contains(&"2026-03-01".to_string()));
        assert!(dates.contains(&"3/15/2026".to_string()));
        assert!(dates.contains(&"12 March 2026".to_string()));
        // Deduplicated
        assert_eq!(
            dates.iter().filter(|d| *d == "2026-03-01").count(),
            1
        );
    }

    #[test]
    fn test_clean_obligation_text() {
        assert_eq!(
            clean_obligation_text("Deliver   the\n goods"),
            "Deliver the goods"
        );
        assert_eq!(
            clean_obligation_text("\u{201C}net 30\u{201D} terms"),
            "\"net 30\" terms"
        );
        assert_eq!(
            clean_obligation_text("the vendor\u{2019}s duty"),
            "the vendor's duty"
        );
    }

    #[test]
    fn test_clean_summary_adds_period() {
        assert_eq!(clean_summary_text("Pay on time"), "Pay on time.");
        assert_eq!(clean_summary_text("Pay on time."), "Pay on time.");
        assert_eq!(clean_summary_text("   "), "");
    }
}
