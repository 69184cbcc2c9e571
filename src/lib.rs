//! Triage - heuristic safety screening for medical-query assistants.
//!
//! Scores model responses for hallucination risk with regex indicator
//! patterns, selects a prompt strategy from query keywords, detects
//! ambiguous responses and synthesizes clarification questions, and
//! persists query/response pairs through a small file-store interface.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`clarify`] - Ambiguity detection and clarification prompts
//! - [`detection`] - Hallucination risk scoring over responses
//! - [`error`] - Custom error types and handling
//! - [`format`] - Annotated presentation of reviewed responses
//! - [`pipeline`] - Offline review harness over recorded exchanges
//! - [`store`] - File-store collaborator (queries, results, example log)
//! - [`strategy`] - Prompt strategy selection from query keywords
//!
//! # Example
//!
//! ```
//! use triage::clarify::Clarifier;
//! use triage::detection::detect;
//! use triage::format::format_response;
//!
//! let query = "What are the symptoms of flu?";
//! let response = "This remedy is 100% effective and cures all flu cases \
//!                 within a day, as doctors agree that it always works.";
//!
//! let report = detect(response, query, None);
//! assert!(report.is_flagged());
//!
//! let resolved = Clarifier::new().handle(query, response);
//! let annotated = format_response(&resolved, query, &report);
//! assert!(annotated.contains("⚠️ WARNING"));
//! ```

pub mod clarify;
pub mod detection;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod store;
pub mod strategy;

// Re-export commonly used types
pub use error::{Result, TriageError};

// Re-export classifier entry points
pub use clarify::{build_clarification, Clarifier, ClarifierConfig};
pub use detection::{detect, HallucinationReport, Severity, MAX_SCORE, WARNING_THRESHOLD};
pub use format::format_response;
pub use strategy::{
    select_strategy, QueryTopic, BEST_OVERALL_KEY, CHAIN_OF_THOUGHT, FEW_SHOT, META_PROMPT,
};

// Re-export harness and store types
pub use pipeline::{Exchange, ReviewPipeline, ReviewRecord, ReviewReport};
pub use store::{FsReviewStore, MemoryReviewStore, QueryRecord, ReviewStore, DEFAULT_LOG_PATH};
