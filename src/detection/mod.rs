//! Hallucination risk scoring over model responses.
//!
//! Scans a response against fixed categories of indicator patterns and
//! produces a capped, weighted score with a list of flagged issues. This
//! is marker-based screening, not ground-truth verification: a high score
//! means the response reads like fabricated or unverifiable content.
//!
//! # Example
//!
//! ```
//! use triage::detection::{detect, Severity};
//!
//! let report = detect(
//!     "Ibuprofen is completely safe, always works, and cures all pain.",
//!     "",
//!     None,
//! );
//! assert_eq!(report.score, 6.0);
//! assert!(!report.issues.is_empty());
//! assert_eq!(report.severity, Severity::Medium);
//! ```

pub mod indicators;

use serde::{Deserialize, Serialize};

pub use indicators::PatternCategory;

/// Maximum hallucination score; weighted totals are capped here.
pub const MAX_SCORE: f64 = 10.0;

/// Score above which a response is presented with an unreliability warning.
pub const WARNING_THRESHOLD: f64 = 5.0;

/// Coverage ratio below which expected concepts count as missing.
const MIN_CONCEPT_COVERAGE: f64 = 0.5;

/// Coarse severity classification derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Score 0-4: no meaningful indicator density.
    Low,
    /// Score above 4, up to 7: worth a second look.
    Medium,
    /// Score above 7: response is likely unreliable.
    High,
}

impl Severity {
    /// Derive severity from a score. Boundaries are strict: 4.0 is still
    /// `Low` and 7.0 is still `Medium`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 7.0 {
            Self::High
        } else if score > 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns true if this severity warrants human review.
    #[must_use]
    pub fn requires_review(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Outcome of scoring one response. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallucinationReport {
    /// Weighted indicator score in `[0, 10]`.
    pub score: f64,
    /// Human-readable descriptions of every matched indicator, in scan order.
    pub issues: Vec<String>,
    /// Severity derived from the score.
    pub severity: Severity,
}

impl HallucinationReport {
    /// Returns true if the score crosses the presentation warning threshold.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.score > WARNING_THRESHOLD
    }
}

/// Scan a response for hallucination indicators.
///
/// Every matching pattern adds its category's weight to the score, so two
/// distinct definitive-claim patterns contribute twice. When
/// `expected_concepts` is supplied and non-empty, responses mentioning fewer
/// than half of them take an extra point. The final score is capped at
/// [`MAX_SCORE`].
///
/// The query is part of the published contract but does not currently
/// influence scoring.
#[must_use]
pub fn detect(
    response: &str,
    _query: &str,
    expected_concepts: Option<&[String]>,
) -> HallucinationReport {
    let mut issues = Vec::new();
    let mut score = 0.0;

    for cat in indicators::categories() {
        for pattern in &cat.patterns {
            if let Some(m) = pattern.find(response) {
                issues.push(format!("{}: '{}'", cat.label, m.as_str()));
                score += cat.weight;
            }
        }
    }

    if let Some(concepts) = expected_concepts.filter(|c| !c.is_empty()) {
        let response_lower = response.to_lowercase();
        let found = concepts
            .iter()
            .filter(|c| response_lower.contains(&c.to_lowercase()))
            .count();
        let coverage = found as f64 / concepts.len() as f64;
        if coverage < MIN_CONCEPT_COVERAGE {
            issues.push(format!(
                "Low coverage of expected medical concepts: {}/{}",
                found,
                concepts.len()
            ));
            score += 1.0;
        }
    }

    let score = score.min(MAX_SCORE);
    HallucinationReport {
        score,
        issues,
        severity: Severity::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_clean_response_scores_zero() {
        let report = detect(
            "Influenza commonly presents with fever, cough, and fatigue lasting several days.",
            "What are flu symptoms?",
            None,
        );
        assert_eq!(report.score, 0.0);
        assert!(report.issues.is_empty());
        assert_eq!(report.severity, Severity::Low);
    }

    #[test]
    fn test_definitive_claim_scores_category_weight() {
        let report = detect("This vaccine is 100% effective.", "", None);
        assert_eq!(report.score, 2.0);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].starts_with("Definitive claim detected: '"));
        assert!(report.issues[0].contains("100% effective"));
    }

    #[test]
    fn test_patterns_within_category_score_independently() {
        let one = detect("It always works.", "", None);
        let two = detect("It always works and is completely safe.", "", None);
        assert_eq!(one.score, 2.0);
        assert_eq!(two.score, 4.0);
        assert_eq!(two.issues.len(), 2);
    }

    #[test]
    fn test_score_monotonically_non_decreasing() {
        let base = "Fever is a common symptom.";
        let additions = [
            " It always works.",
            " Recent studies show improvement.",
            " You should rest.",
            " Studies show 85% recovery.",
        ];

        let mut response = base.to_string();
        let mut last = detect(&response, "", None).score;
        for addition in additions {
            response.push_str(addition);
            let next = detect(&response, "", None).score;
            assert!(next >= last, "score decreased: {next} < {last}");
            last = next;
        }
    }

    #[test]
    fn test_score_capped_at_ten() {
        let response = "This cures all illness, always works, is completely safe, \
                        is 100% effective, is guaranteed to help all patients, and \
                        never causes problems for everyone with any condition. \
                        You should take it; you must; you need to; I recommend it.";
        let report = detect(response, "", None);
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.severity, Severity::High);
        assert!(report.issues.len() > 5);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = detect("DOCTORS AGREE THAT this helps.", "", None);
        assert_eq!(report.score, 1.0);
        assert!(report.issues[0].starts_with("Unverifiable claim: '"));
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_score(4.0), Severity::Low);
        assert_eq!(Severity::from_score(4.01), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::Medium);
        assert_eq!(Severity::from_score(7.01), Severity::High);
    }

    #[test]
    fn test_two_definitive_claims_stay_low() {
        // Two category-weight-2 matches sum to exactly 4.0, which is still Low.
        let report = detect("It always works and never causes issues.", "", None);
        assert_eq!(report.score, 4.0);
        assert_eq!(report.severity, Severity::Low);
    }

    #[test]
    fn test_low_concept_coverage_adds_point() {
        let expected = concepts(&["fever", "cough", "fatigue", "congestion"]);
        let report = detect(
            "Fever can occur with many illnesses and often resolves on its own.",
            "What are flu symptoms?",
            Some(expected.as_slice()),
        );
        assert_eq!(report.score, 1.0);
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("Low coverage of expected medical concepts: 1/4")));
    }

    #[test]
    fn test_sufficient_concept_coverage_adds_nothing() {
        let expected = concepts(&["fever", "cough"]);
        let report = detect(
            "Both fever and cough are typical and usually fade within a week or so.",
            "",
            Some(expected.as_slice()),
        );
        assert_eq!(report.score, 0.0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_concept_list_is_ignored() {
        let empty: Vec<String> = Vec::new();
        let report = detect("A perfectly ordinary response with no markers.", "", Some(empty.as_slice()));
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_concept_matching_is_case_insensitive() {
        let expected = concepts(&["Ibuprofen", "Paracetamol"]);
        let report = detect("ibuprofen and paracetamol are common analgesics.", "", Some(expected.as_slice()));
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_is_flagged_threshold() {
        let low = HallucinationReport {
            score: 5.0,
            issues: vec![],
            severity: Severity::from_score(5.0),
        };
        let high = HallucinationReport {
            score: 5.5,
            issues: vec![],
            severity: Severity::from_score(5.5),
        };
        assert!(!low.is_flagged());
        assert!(high.is_flagged());
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let report = detect("It is widely accepted that rest helps.", "", None);
        let json = serde_json::to_string(&report).unwrap();
        let restored: HallucinationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
        assert!(json.contains("\"severity\":\"Low\""));
    }
}
