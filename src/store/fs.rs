//! Filesystem-backed review store.

use colored::Colorize;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::{QueryRecord, ReviewStore};
use crate::error::Result;

/// Default example-log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "evaluation/example_log.md";

/// Review store writing to real files.
///
/// The log path is fixed at construction; queries and results paths are
/// chosen per call. Concurrent writers to the same log must serialize
/// externally.
#[derive(Debug, Clone)]
pub struct FsReviewStore {
    log_path: PathBuf,
}

impl FsReviewStore {
    /// Create a store appending its example log at `log_path`.
    #[must_use]
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Path of the example log this store appends to.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl Default for FsReviewStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl ReviewStore for FsReviewStore {
    fn load_queries(&self, path: &Path) -> Vec<Value> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Error: queries file not found at {}", path.display()).red()
                );
                warn!(path = %path.display(), error = %e, "failed to read queries file");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(items)) => items,
            Ok(other) => vec![other],
            Err(e) => {
                eprintln!(
                    "{}",
                    "Error: invalid JSON format in queries file".red()
                );
                warn!(path = %path.display(), error = %e, "malformed queries file");
                Vec::new()
            }
        }
    }

    fn save_results(&mut self, results: &Value, path: &Path) -> bool {
        let rendered = match serde_json::to_string_pretty(results) {
            Ok(rendered) => rendered,
            Err(e) => {
                eprintln!("{}", format!("Error saving results: {e}").red());
                warn!(error = %e, "failed to serialize results");
                return false;
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("{}", format!("Error saving results: {e}").red());
                    warn!(path = %path.display(), error = %e, "failed to create results directory");
                    return false;
                }
            }
        }

        match fs::write(path, rendered) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{}", format!("Error saving results: {e}").red());
                warn!(path = %path.display(), error = %e, "failed to write results file");
                false
            }
        }
    }

    fn append_log(&mut self, record: &QueryRecord) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        file.write_all(record.to_markdown().as_bytes())?;

        Ok(())
    }
}
