//! Prompt strategy selection from query keywords.
//!
//! Queries are classified by an ordered keyword rule table; the first rule
//! whose keywords appear in the lowercased query wins. Topical queries map
//! to a fixed strategy, everything else falls back to the best overall
//! strategy reported by the caller's benchmark analysis.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use triage::strategy::{select_strategy, CHAIN_OF_THOUGHT};
//!
//! let analysis = HashMap::new();
//! let strategy = select_strategy("What are the symptoms of flu?", &analysis).unwrap();
//! assert_eq!(strategy, CHAIN_OF_THOUGHT);
//! ```

use std::collections::HashMap;

use crate::error::{Result, TriageError};

/// Chain-of-thought prompting, used for symptom analysis.
pub const CHAIN_OF_THOUGHT: &str = "cot";

/// Few-shot prompting, used for medication information.
pub const FEW_SHOT: &str = "few_shot";

/// Meta-prompting, used for treatment options.
pub const META_PROMPT: &str = "meta";

/// Key the analysis map must carry for the fallback branch.
pub const BEST_OVERALL_KEY: &str = "best_overall";

/// Topic classification shared by strategy selection and clarification
/// template choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTopic {
    Symptoms,
    Medication,
    Treatment,
    General,
}

/// Ordered keyword rules; earlier rules take precedence.
const TOPIC_RULES: &[(&[&str], QueryTopic)] = &[
    (&["symptoms", "signs"], QueryTopic::Symptoms),
    (&["medication", "drug", "medicine"], QueryTopic::Medication),
    (&["treatment", "therapy"], QueryTopic::Treatment),
];

impl QueryTopic {
    /// Classify a query by case-insensitive keyword substring match.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let query_lower = query.to_lowercase();
        for (keywords, topic) in TOPIC_RULES {
            if keywords.iter().any(|k| query_lower.contains(k)) {
                return *topic;
            }
        }
        QueryTopic::General
    }
}

/// Select the prompt strategy for a query.
///
/// Topical queries get a fixed strategy; general queries fall back to the
/// analysis map's `best_overall` value.
///
/// # Errors
///
/// Returns [`TriageError::MissingAnalysisKey`] when the fallback branch is
/// reached and `analysis_results` has no [`BEST_OVERALL_KEY`] entry.
pub fn select_strategy(query: &str, analysis_results: &HashMap<String, String>) -> Result<String> {
    match QueryTopic::classify(query) {
        QueryTopic::Symptoms => Ok(CHAIN_OF_THOUGHT.to_string()),
        QueryTopic::Medication => Ok(FEW_SHOT.to_string()),
        QueryTopic::Treatment => Ok(META_PROMPT.to_string()),
        QueryTopic::General => analysis_results
            .get(BEST_OVERALL_KEY)
            .cloned()
            .ok_or_else(|| TriageError::missing_analysis_key(BEST_OVERALL_KEY)),
    }
}
