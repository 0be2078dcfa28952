//! Obligation module - the fundamental unit of an extraction result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification assigned to an obligation by the LLM.
///
/// Deserialization is case-sensitive: `"low"` or `"HIGH"` fail, and the
/// record carrying them is rejected. This keeps the data contract strict
/// instead of silently canonicalizing model sloppiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Standard obligations with minimal consequences
    Low,
    /// Important obligations with moderate consequences
    Medium,
    /// Critical obligations with significant legal/financial consequences
    High,
}

impl RiskLevel {
    /// String form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted contractual obligation.
///
/// Every instance that reaches a caller satisfies the structural contract:
/// non-empty obligation text, synonym-normalized party, due date that is
/// either the literal `"Ongoing"`, a recognized date string, or free text,
/// a valid risk level, and a trimmed summary ending in a period.
///
/// Serializes with camelCase field names (`responsibleParty`, `dueDate`,
/// `riskLevel`), the wire shape downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    /// Obligation text as stated in the contract, whitespace-collapsed
    pub obligation: String,

    /// Responsible party, normalized via the synonym table
    pub responsible_party: String,

    /// Due date: `"Ongoing"`, a date string, or free text
    pub due_date: String,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// One-line plain-English summary, period-terminated
    pub summary: String,

    /// Placeholder confidence score attached during post-processing
    pub confidence: f64,
}

/// Per-level obligation counts.
///
/// Serialized keys match the risk level spellings (`Low`, `Medium`, `High`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Number of Low-risk obligations
    #[serde(rename = "Low")]
    pub low: usize,
    /// Number of Medium-risk obligations
    #[serde(rename = "Medium")]
    pub medium: usize,
    /// Number of High-risk obligations
    #[serde(rename = "High")]
    pub high: usize,
}

/// Risk statistics across one extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Total obligations tallied
    pub total_obligations: usize,

    /// Counts per risk level
    pub risk_breakdown: RiskBreakdown,

    /// High-risk share of the total, in percent (0.0 for an empty list)
    pub high_risk_percentage: f64,

    /// Medium-risk share of the total, in percent
    pub medium_risk_percentage: f64,

    /// Low-risk share of the total, in percent
    pub low_risk_percentage: f64,
}

impl RiskSummary {
    /// Tally risk levels across a final obligation list.
    ///
    /// Percentages are defined as 0.0 when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use covenant_domain::RiskSummary;
    ///
    /// let summary = RiskSummary::tally(&[]);
    /// assert_eq!(summary.total_obligations, 0);
    /// assert_eq!(summary.high_risk_percentage, 0.0);
    /// ```
    pub fn tally(obligations: &[Obligation]) -> Self {
        let mut breakdown = RiskBreakdown::default();
        for obligation in obligations {
            match obligation.risk_level {
                RiskLevel::Low => breakdown.low += 1,
                RiskLevel::Medium => breakdown.medium += 1,
                RiskLevel::High => breakdown.high += 1,
            }
        }

        let total = obligations.len();
        let percentage = |count: usize| {
            if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };

        Self {
            total_obligations: total,
            high_risk_percentage: percentage(breakdown.high),
            medium_risk_percentage: percentage(breakdown.medium),
            low_risk_percentage: percentage(breakdown.low),
            risk_breakdown: breakdown,
        }
    }
}
