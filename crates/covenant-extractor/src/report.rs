//! Export renderings of an extraction result
//!
//! CSV for spreadsheet handoff and a plain-text summary for reading. Both
//! operate on a successful envelope; an empty obligation list yields a
//! header-only CSV and a summary with zero counts.

use crate::types::ExtractionResult;

/// Render the obligations as CSV with a fixed header row.
///
/// Rows carry 1-based IDs in obligation order. Fields containing commas,
/// quotes, or newlines are quoted with doubled inner quotes.
pub fn to_csv(result: &ExtractionResult) -> String {
    let mut out = String::from("ID,Obligation,Responsible Party,Due Date,Risk Level,Summary\n");
    for (idx, o) in result.obligations.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            idx + 1,
            csv_field(&o.obligation),
            csv_field(&o.responsible_party),
            csv_field(&o.due_date),
            o.risk_level.as_str(),
            csv_field(&o.summary),
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a human-readable summary: totals, risk breakdown with
/// percentages, per-party counts, and the full obligation detail.
pub fn summary_report(result: &ExtractionResult) -> String {
    let mut out = String::new();

    out.push_str("CONTRACT OBLIGATIONS SUMMARY\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    out.push_str(&format!("Total Obligations: {}\n\n", result.total_obligations));

    if let Some(summary) = &result.risk_summary {
        out.push_str("RISK BREAKDOWN\n");
        for (label, count, percent) in [
            ("High", summary.risk_breakdown.high, summary.high_risk_percentage),
            ("Medium", summary.risk_breakdown.medium, summary.medium_risk_percentage),
            ("Low", summary.risk_breakdown.low, summary.low_risk_percentage),
        ] {
            if count > 0 {
                out.push_str(&format!("- {} Risk: {} ({:.1}%)\n", label, count, percent));
            }
        }
        out.push('\n');
    }

    out.push_str("PARTY BREAKDOWN\n");
    for (party, count) in party_counts(result) {
        out.push_str(&format!("- {}: {} obligations\n", party, count));
    }
    out.push('\n');

    out.push_str("DETAILED OBLIGATIONS\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    for (idx, o) in result.obligations.iter().enumerate() {
        out.push_str(&format!("ID: {}\n", idx + 1));
        out.push_str(&format!("Risk Level: {}\n", o.risk_level.as_str()));
        out.push_str(&format!("Responsible Party: {}\n", o.responsible_party));
        out.push_str(&format!("Due Date: {}\n", o.due_date));
        out.push_str(&format!("Obligation: {}\n", o.obligation));
        out.push_str(&format!("Summary: {}\n", o.summary));
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }

    out
}

/// Obligation counts per party, in first-seen order.
fn party_counts(result: &ExtractionResult) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for o in &result.obligations {
        match counts.iter_mut().find(|(party, _)| *party == o.responsible_party) {
            Some((_, count)) => *count += 1,
            None => counts.push((&o.responsible_party, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_domain::{Obligation, RiskLevel, RiskSummary};

    fn obligation(text: &str, party: &str, risk: RiskLevel) -> Obligation {
        Obligation {
            obligation: text.to_string(),
            responsible_party: party.to_string(),
            due_date: "Ongoing".to_string(),
            risk_level: risk,
            summary: "A summary.".to_string(),
            confidence: 0.85,
        }
    }

    fn result(obligations: Vec<Obligation>) -> ExtractionResult {
        let risk_summary = RiskSummary::tally(&obligations);
        ExtractionResult {
            success: true,
            total_obligations: obligations.len(),
            obligations,
            api_used: Some("OpenAI GPT-4".to_string()),
            parser_used: Some("text_decoder".to_string()),
            contract_length: Some(500),
            risk_summary: Some(risk_summary),
            error: None,
        }
    }

    #[test]
    fn test_csv_header_and_ids() {
        let result = result(vec![
            obligation("Deliver goods", "Vendor", RiskLevel::High),
            obligation("Pay invoice", "Client", RiskLevel::Low),
        ]);
        let csv = to_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Obligation,Responsible Party,Due Date,Risk Level,Summary");
        assert!(lines[1].starts_with("1,Deliver goods,Vendor,Ongoing,High,"));
        assert!(lines[2].starts_with("2,Pay invoice,Client,Ongoing,Low,"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas_and_quotes() {
        let result = result(vec![obligation(
            "Deliver goods, on time, \"as is\"",
            "Vendor",
            RiskLevel::Medium,
        )]);
        let csv = to_csv(&result);
        assert!(csv.contains("\"Deliver goods, on time, \"\"as is\"\"\""));
    }

    #[test]
    fn test_csv_empty_result_is_header_only() {
        let csv = to_csv(&result(vec![]));
        assert_eq!(csv, "ID,Obligation,Responsible Party,Due Date,Risk Level,Summary\n");
    }

    #[test]
    fn test_summary_report_content() {
        let result = result(vec![
            obligation("Deliver goods", "Vendor", RiskLevel::High),
            obligation("Maintain insurance", "Vendor", RiskLevel::Medium),
            obligation("Pay invoice", "Client", RiskLevel::Medium),
            obligation("Send reports", "Vendor", RiskLevel::Medium),
        ]);
        let report = summary_report(&result);
        assert!(report.contains("CONTRACT OBLIGATIONS SUMMARY"));
        assert!(report.contains("Total Obligations: 4"));
        assert!(report.contains("- High Risk: 1 (25.0%)"));
        assert!(report.contains("- Medium Risk: 3 (75.0%)"));
        assert!(!report.contains("- Low Risk:"));
        assert!(report.contains("- Vendor: 3 obligations"));
        assert!(report.contains("- Client: 1 obligations"));
        assert!(report.contains("ID: 4"));
        assert!(report.contains("Obligation: Pay invoice"));
    }

    #[test]
    fn test_party_breakdown_first_seen_order() {
        let result = result(vec![
            obligation("A", "Client", RiskLevel::Low),
            obligation("B", "Vendor", RiskLevel::Low),
            obligation("C", "Client", RiskLevel::Low),
        ]);
        let report = summary_report(&result);
        let client_pos = report.find("- Client: 2 obligations").unwrap();
        let vendor_pos = report.find("- Vendor: 1 obligations").unwrap();
        assert!(client_pos < vendor_pos);
    }
}
