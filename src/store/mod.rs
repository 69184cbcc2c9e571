//! File-store collaborator for queries, results, and the example log.
//!
//! All file-level concerns live behind the [`ReviewStore`] trait so the
//! classification logic stays independently testable without touching a
//! filesystem. The two JSON operations recover locally: a missing or
//! malformed queries file degrades to an empty sequence, a failed results
//! write degrades to a `false` return. Log appends propagate their I/O
//! errors and leave the policy to the caller.

pub mod fs;
pub mod memory;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::Result;

pub use fs::{FsReviewStore, DEFAULT_LOG_PATH};
pub use memory::MemoryReviewStore;

/// One reviewed exchange as persisted to the example log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub query: String,
    pub response: String,
    pub prompt_type: String,
    pub hallucination_score: f64,
}

impl QueryRecord {
    /// Create a record for one exchange.
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        response: impl Into<String>,
        prompt_type: impl Into<String>,
        hallucination_score: f64,
    ) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            prompt_type: prompt_type.into(),
            hallucination_score,
        }
    }

    /// Render the record as one example-log Markdown block.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!(
            "## Query: {}\n**Prompt type:** {}\n**Hallucination score:** {}/10\n**Response:**\n\n{}\n\n---\n\n",
            self.query, self.prompt_type, self.hallucination_score, self.response
        )
    }
}

/// Storage capability for the review flow.
pub trait ReviewStore {
    /// Load the recorded queries from a JSON file.
    ///
    /// A top-level array is returned element-wise; any other well-formed
    /// value comes back as a single-element sequence. Missing files and
    /// malformed JSON degrade to an empty sequence after reporting the
    /// problem; they never fail the caller.
    fn load_queries(&self, path: &Path) -> Vec<Value>;

    /// Save a result structure as JSON with 2-space indentation.
    ///
    /// Returns `false` (after reporting the problem) instead of propagating
    /// write failures.
    fn save_results(&mut self, results: &Value, path: &Path) -> bool;

    /// Append one record to the example log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be opened or written.
    fn append_log(&mut self, record: &QueryRecord) -> Result<()>;
}
