//! Offline review harness over recorded query/response exchanges.
//!
//! Wires the four classifiers around a [`ReviewStore`]: each loaded
//! exchange gets a prompt strategy, a hallucination report, an ambiguity
//! pass, and a formatted annotation; the run produces a timestamped JSON
//! report and appends each exchange to the example log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::clarify::{build_clarification, Clarifier};
use crate::detection::{self, HallucinationReport};
use crate::error::Result;
use crate::format::format_response;
use crate::store::{QueryRecord, ReviewStore};
use crate::strategy::select_strategy;

/// A recorded query/response exchange awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub query: String,
    pub response: String,
    /// Concepts a faithful response is expected to mention.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_concepts: Vec<String>,
}

/// Review outcome for a single exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub query: String,
    pub prompt_type: String,
    pub hallucination: HallucinationReport,
    /// True when the response was replaced by a clarification request.
    pub clarification_requested: bool,
    /// Annotated presentation of the (possibly replaced) response.
    pub formatted: String,
}

/// Full output of a review run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReport {
    pub generated_at: DateTime<Utc>,
    pub reviewed: usize,
    /// Loaded elements that did not deserialize as exchanges.
    pub skipped: usize,
    pub records: Vec<ReviewRecord>,
}

impl ReviewReport {
    /// Count of reviewed responses that crossed the warning threshold.
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.hallucination.is_flagged())
            .count()
    }
}

/// Runs the review flow against a store.
pub struct ReviewPipeline<S> {
    store: S,
    clarifier: Clarifier,
    analysis_results: HashMap<String, String>,
}

impl<S: ReviewStore> ReviewPipeline<S> {
    /// Create a pipeline over a store, with the prompt-strategy analysis
    /// map used for fallback selection.
    #[must_use]
    pub fn new(store: S, analysis_results: HashMap<String, String>) -> Self {
        Self {
            store,
            clarifier: Clarifier::new(),
            analysis_results,
        }
    }

    /// Review one exchange.
    ///
    /// The example-log append is best-effort: failures are logged and do
    /// not abort the review.
    ///
    /// # Errors
    ///
    /// Propagates the strategy lookup error for general queries when the
    /// analysis map lacks its `best_overall` entry.
    pub fn review(&mut self, exchange: &Exchange) -> Result<ReviewRecord> {
        let prompt_type = select_strategy(&exchange.query, &self.analysis_results)?;

        let concepts = (!exchange.expected_concepts.is_empty())
            .then_some(exchange.expected_concepts.as_slice());
        let report = detection::detect(&exchange.response, &exchange.query, concepts);

        let clarification_requested = self.clarifier.is_ambiguous(&exchange.response);
        let presented = if clarification_requested {
            build_clarification(&exchange.query)
        } else {
            exchange.response.clone()
        };
        let formatted = format_response(&presented, &exchange.query, &report);

        let record = QueryRecord::new(
            &exchange.query,
            &exchange.response,
            &prompt_type,
            report.score,
        );
        if let Err(e) = self.store.append_log(&record) {
            warn!(error = %e, "failed to append example log entry");
        }

        debug!(
            query = %exchange.query,
            prompt_type = %prompt_type,
            score = report.score,
            "exchange reviewed"
        );

        Ok(ReviewRecord {
            query: exchange.query.clone(),
            prompt_type,
            hallucination: report,
            clarification_requested,
            formatted,
        })
    }

    /// Load exchanges from `queries_path`, review each, and save the
    /// report to `output_path`.
    ///
    /// Elements that do not deserialize as exchanges are skipped with a
    /// warning. A failed report save is reported but does not fail the
    /// run; the report is still returned.
    ///
    /// # Errors
    ///
    /// Propagates the first strategy lookup error encountered.
    pub fn run(&mut self, queries_path: &Path, output_path: &Path) -> Result<ReviewReport> {
        let raw = self.store.load_queries(queries_path);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, value) in raw.into_iter().enumerate() {
            let exchange: Exchange = match serde_json::from_value(value) {
                Ok(exchange) => exchange,
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed exchange");
                    skipped += 1;
                    continue;
                }
            };
            records.push(self.review(&exchange)?);
        }

        let report = ReviewReport {
            generated_at: Utc::now(),
            reviewed: records.len(),
            skipped,
            records,
        };

        let value = serde_json::to_value(&report)?;
        if !self.store.save_results(&value, output_path) {
            warn!(path = %output_path.display(), "failed to save review results");
        }

        Ok(report)
    }

    /// Consume the pipeline and return its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
