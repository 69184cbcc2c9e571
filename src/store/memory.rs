//! In-memory review store for tests.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{QueryRecord, ReviewStore};
use crate::error::Result;

/// Review store keeping everything in memory.
///
/// Documents are keyed by path; appended log records are retained for
/// inspection. `failing_saves` simulates an unwritable results target.
#[derive(Debug, Clone, Default)]
pub struct MemoryReviewStore {
    documents: HashMap<PathBuf, Value>,
    log: Vec<QueryRecord>,
    fail_saves: bool,
    fail_appends: bool,
}

impl MemoryReviewStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document at a path.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<PathBuf>, value: Value) -> Self {
        self.documents.insert(path.into(), value);
        self
    }

    /// Make every `save_results` call report failure.
    #[must_use]
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Make every `append_log` call fail.
    #[must_use]
    pub fn failing_appends(mut self) -> Self {
        self.fail_appends = true;
        self
    }

    /// Document currently stored at a path, if any.
    #[must_use]
    pub fn document(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.documents.get(path.as_ref())
    }

    /// Records appended to the log, in order.
    #[must_use]
    pub fn log(&self) -> &[QueryRecord] {
        &self.log
    }
}

impl ReviewStore for MemoryReviewStore {
    fn load_queries(&self, path: &Path) -> Vec<Value> {
        match self.documents.get(path) {
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
            None => Vec::new(),
        }
    }

    fn save_results(&mut self, results: &Value, path: &Path) -> bool {
        if self.fail_saves {
            return false;
        }
        self.documents.insert(path.to_path_buf(), results.clone());
        true
    }

    fn append_log(&mut self, record: &QueryRecord) -> Result<()> {
        if self.fail_appends {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "log target is read-only",
            )
            .into());
        }
        self.log.push(record.clone());
        Ok(())
    }
}
