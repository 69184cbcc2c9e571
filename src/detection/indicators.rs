//! Static indicator-pattern tables for hallucination scoring.
//!
//! The four categories and their weights are fixed configuration, compiled
//! once at first use. Patterns within a category score independently: each
//! matching pattern adds the category weight to the running total.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A category of hallucination indicators sharing one weight.
#[derive(Debug)]
pub struct PatternCategory {
    /// Machine-readable category name.
    pub name: &'static str,
    /// Prefix used when describing a match in the issue list.
    pub label: &'static str,
    /// Score contribution per matching pattern.
    pub weight: f64,
    /// Compiled case-insensitive patterns.
    pub patterns: Vec<Regex>,
}

static INDICATOR_CATEGORIES: LazyLock<Vec<PatternCategory>> = LazyLock::new(|| {
    vec![
        category(
            "definitive_claims",
            "Definitive claim detected",
            2.0,
            &[
                r"100% effective",
                r"always works",
                r"cures all",
                r"completely safe",
                r"guaranteed to",
                r"never causes",
                r"all patients",
                r"everyone with",
            ],
        ),
        category(
            "specific_numbers",
            "Specific unverifiable statistic",
            1.5,
            &[
                r"\d{2,3}% of (patients|people|cases)",
                r"studies show \d{2,3}%",
            ],
        ),
        category(
            "unverifiable_claims",
            "Unverifiable claim",
            1.0,
            &[
                r"recent studies show",
                r"doctors agree that",
                r"research has proven",
                r"it is well established",
                r"it is widely accepted",
            ],
        ),
        category(
            "medical_advice",
            "Medical advice detected",
            2.0,
            &[
                r"you should",
                r"you must",
                r"you need to",
                r"I recommend",
                r"take \d+ (mg|milligrams)",
                r"increase your dosage",
                r"reduce your dosage",
            ],
        ),
    ]
});

fn category(
    name: &'static str,
    label: &'static str,
    weight: f64,
    patterns: &[&str],
) -> PatternCategory {
    PatternCategory {
        name,
        label,
        weight,
        patterns: patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .expect("indicator patterns are fixed constants")
            })
            .collect(),
    }
}

/// The fixed indicator categories, in scoring order.
#[must_use]
pub fn categories() -> &'static [PatternCategory] {
    &INDICATOR_CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_categories_in_order() {
        let names: Vec<_> = categories().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "definitive_claims",
                "specific_numbers",
                "unverifiable_claims",
                "medical_advice"
            ]
        );
    }

    #[test]
    fn test_category_weights() {
        let weights: Vec<_> = categories().iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![2.0, 1.5, 1.0, 2.0]);
    }

    #[test]
    fn test_patterns_match_case_insensitively() {
        let definitive = &categories()[0];
        assert!(definitive.patterns[0].is_match("This drug is 100% EFFECTIVE"));
    }

    #[test]
    fn test_dosage_pattern_requires_number() {
        let advice = &categories()[3];
        let dosage = advice
            .patterns
            .iter()
            .find(|p| p.as_str().contains("mg"))
            .unwrap();
        assert!(dosage.is_match("take 200 mg twice daily"));
        assert!(!dosage.is_match("take some milligrams"));
    }

    #[test]
    fn test_statistic_pattern_bounds() {
        let numbers = &categories()[1];
        assert!(numbers.patterns[0].is_match("90% of patients improve"));
        assert!(!numbers.patterns[0].is_match("9% of patients improve"));
    }
}
