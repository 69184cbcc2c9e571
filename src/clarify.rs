//! Ambiguity detection and clarification prompts.
//!
//! A response is treated as ambiguous when it hedges with uncertainty
//! phrasing, is too short to be a real answer, or argues both sides of a
//! contrast. Ambiguous responses are replaced with a clarification request
//! built from the query's topic, asking three follow-up questions.
//!
//! # Example
//!
//! ```
//! use triage::clarify::Clarifier;
//!
//! let clarifier = Clarifier::new();
//! let resolved = clarifier.handle("What are the symptoms of flu?", "It depends.");
//! assert!(resolved.contains("What are the symptoms of flu?"));
//! assert!(resolved.contains("1)"));
//! ```

use crate::strategy::QueryTopic;

/// Phrases that signal the model was uncertain or hedging.
const UNCERTAINTY_PHRASES: &[&str] = &[
    "unclear",
    "ambiguous",
    "could mean",
    "need more information",
    "i'm not sure",
    "it depends",
    "could refer to",
    "insufficient details",
];

/// Thresholds for the ambiguity trigger.
#[derive(Debug, Clone)]
pub struct ClarifierConfig {
    /// Responses with fewer whitespace-delimited words than this are
    /// treated as possible confusion.
    pub min_word_count: usize,
}

impl Default for ClarifierConfig {
    fn default() -> Self {
        Self { min_word_count: 20 }
    }
}

/// Detects ambiguous responses and synthesizes clarification requests.
#[derive(Debug, Clone, Default)]
pub struct Clarifier {
    config: ClarifierConfig,
}

impl Clarifier {
    /// Create a clarifier with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clarifier with custom thresholds.
    #[must_use]
    pub fn with_config(config: ClarifierConfig) -> Self {
        Self { config }
    }

    /// Check whether a response shows ambiguity markers.
    #[must_use]
    pub fn is_ambiguous(&self, response: &str) -> bool {
        let lower = response.to_lowercase();

        let has_uncertainty = UNCERTAINTY_PHRASES.iter().any(|p| lower.contains(p));
        let is_short = response.split_whitespace().count() < self.config.min_word_count;
        let has_contrast = lower.contains("on one hand") && lower.contains("on the other hand");

        has_uncertainty || is_short || has_contrast
    }

    /// Pass an unambiguous response through unchanged, or replace an
    /// ambiguous one with a clarification request for the query.
    #[must_use]
    pub fn handle(&self, query: &str, response: &str) -> String {
        if self.is_ambiguous(response) {
            build_clarification(query)
        } else {
            response.to_string()
        }
    }
}

/// Build the clarification message for a query, choosing the template by
/// query topic.
#[must_use]
pub fn build_clarification(query: &str) -> String {
    match QueryTopic::classify(query) {
        QueryTopic::Symptoms => format!(
            r#"I notice your question about "{query}" could benefit from more details:

1) Could you specify how long you've been experiencing these symptoms?
2) Are there any other symptoms you're experiencing alongside these?
3) Are you asking about general information or concerned about specific symptoms you're experiencing?

Please note I can provide medical information but cannot diagnose conditions or replace professional medical advice."#
        ),
        QueryTopic::Medication => format!(
            r#"I notice your question about "{query}" could be made more specific:

1) Are you asking about specific dosages, side effects, or interactions?
2) Do you have any other medical conditions or take other medications that might be relevant?
3) Are you looking for general information or have concerns about a specific situation?

Please note I can provide general medication information but cannot give personalized medical advice."#
        ),
        QueryTopic::Treatment | QueryTopic::General => format!(
            r#"I notice your question about "{query}" could be interpreted in multiple ways:

1) Could you provide more context or specific details about your question?
2) Are you looking for general information or information about a specific situation?
3) Would it help if I explained some of the common terms or concepts related to this topic first?

Please note I can provide medical information but cannot diagnose conditions or replace professional medical advice."#
        ),
    }
}
