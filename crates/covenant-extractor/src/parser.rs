//! Parse and validate raw model output into obligation candidates
//!
//! Never panics past this boundary. `None` means "no obligations
//! extracted", which the gateway treats as a failed provider attempt; a
//! non-empty `Some` is the only success shape.

use crate::types::ObligationCandidate;
use covenant_domain::normalize::normalize_due_date;
use serde_json::Value;
use tracing::warn;

/// Parse a raw model response into validated obligation candidates.
///
/// An unparseable response or a non-array top level invalidates the whole
/// response. Individual malformed elements are skipped and logged without
/// aborting the rest; relative order of survivors is preserved. Zero
/// survivors yields `None`, not an empty list.
pub(crate) fn parse_llm_response(response: &str) -> Option<Vec<ObligationCandidate>> {
    let candidate_json = clean_json_response(response);

    let value: Value = match serde_json::from_str(&candidate_json) {
        Ok(value) => value,
        Err(e) => {
            warn!("JSON parse error in model response: {}", e);
            return None;
        }
    };

    let elements = match value.as_array() {
        Some(elements) => elements,
        None => {
            warn!("model response is not a JSON array");
            return None;
        }
    };

    let mut obligations = Vec::new();
    for (idx, element) in elements.iter().enumerate() {
        match serde_json::from_value::<ObligationCandidate>(element.clone()) {
            Ok(mut candidate) => {
                candidate.due_date = normalize_due_date(&candidate.due_date);
                if let Err(reason) = candidate.validate() {
                    warn!("obligation {} rejected: {}", idx, reason);
                    continue;
                }
                obligations.push(candidate);
            }
            Err(e) => {
                warn!("obligation {} failed validation: {}", idx, e);
            }
        }
    }

    if obligations.is_empty() {
        None
    } else {
        Some(obligations)
    }
}

/// Unwrap model decoration around the JSON payload: markdown code fences
/// first, then the substring between the first `[` and the last `]`. With
/// no bracket pair, the whole trimmed text is the candidate.
fn clean_json_response(response: &str) -> String {
    let without_fences = response.replace("```json", "").replace("```", "");
    let trimmed = without_fences.trim();

    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => trimmed[start..=end].to_string(),
        _ => trimmed.to_string(),
    }
}
