//! Rendering reviewed responses for presentation.

use crate::detection::HallucinationReport;

/// Render a response with its query and hallucination annotations.
///
/// The warning line appears only when the score crosses the presentation
/// threshold; the issues section appears only when issues were flagged.
/// Output is fully determined by the inputs.
#[must_use]
pub fn format_response(response: &str, query: &str, check: &HallucinationReport) -> String {
    let mut formatted = format!("Q: {query}\n\n");

    if check.is_flagged() {
        formatted.push_str(&format!(
            "⚠️ WARNING: This response may contain unreliable information (Hallucination score: {}/10)\n\n",
            check.score
        ));
    }

    formatted.push_str(&format!("A: {response}\n"));

    if !check.issues.is_empty() {
        formatted.push_str("\nPotential issues detected:\n");
        for issue in &check.issues {
            formatted.push_str(&format!("- {issue}\n"));
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{HallucinationReport, Severity};

    fn report(score: f64, issues: Vec<String>) -> HallucinationReport {
        HallucinationReport {
            score,
            issues,
            severity: Severity::from_score(score),
        }
    }

    #[test]
    fn test_flagged_response_includes_warning() {
        let out = format_response("Rest.", "Flu?", &report(6.0, vec!["x".to_string()]));
        assert!(out.contains("⚠️ WARNING"));
        assert!(out.contains("(Hallucination score: 6/10)"));
        assert!(out.contains("Potential issues detected:\n- x\n"));
    }

    #[test]
    fn test_clean_response_has_no_warning_or_issues() {
        let out = format_response("Rest and fluids.", "Flu?", &report(3.0, vec![]));
        assert_eq!(out, "Q: Flu?\n\nA: Rest and fluids.\n");
    }

    #[test]
    fn test_score_at_threshold_not_flagged() {
        let out = format_response("Rest.", "Flu?", &report(5.0, vec![]));
        assert!(!out.contains("WARNING"));
    }

    #[test]
    fn test_fractional_score_renders_as_written() {
        let out = format_response("Rest.", "Flu?", &report(5.5, vec![]));
        assert!(out.contains("(Hallucination score: 5.5/10)"));
    }

    #[test]
    fn test_issue_ordering_preserved() {
        let issues = vec!["first".to_string(), "second".to_string()];
        let out = format_response("Rest.", "Flu?", &report(2.0, issues));
        let first = out.find("- first").unwrap();
        let second = out.find("- second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_sections_in_template_order() {
        let out = format_response("Rest.", "Flu?", &report(8.0, vec!["x".to_string()]));
        let q = out.find("Q: ").unwrap();
        let warn = out.find("⚠️").unwrap();
        let a = out.find("A: ").unwrap();
        let issues = out.find("Potential issues").unwrap();
        assert!(q < warn && warn < a && a < issues);
    }
}
