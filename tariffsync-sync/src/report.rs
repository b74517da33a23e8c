//! Outcome of one maintenance run.

use crate::engine::ApplyStats;
use crate::error::SyncError;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Why a category stopped early.
#[derive(Debug)]
pub struct CategoryFailure {
    /// The file being processed, or `None` when listing or sorting failed.
    pub file: Option<String>,
    pub error: SyncError,
}

impl CategoryFailure {
    pub fn listing(error: impl Into<SyncError>) -> Self {
        Self {
            file: None,
            error: error.into(),
        }
    }

    pub fn file(name: &str, error: impl Into<SyncError>) -> Self {
        Self {
            file: Some(name.to_string()),
            error: error.into(),
        }
    }
}

/// What happened in one distribution category.
#[derive(Debug)]
pub struct CategoryReport {
    pub category: String,
    /// Files applied and recorded this run, in application order.
    pub applied: Vec<String>,
    /// Files skipped because the registry already covers them.
    pub skipped: usize,
    pub stats: ApplyStats,
    pub failure: Option<CategoryFailure>,
}

impl CategoryReport {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            applied: Vec::new(),
            skipped: 0,
            stats: ApplyStats::default(),
            failure: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Per-category results of one run, in processing order.
#[derive(Debug)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub categories: Vec<CategoryReport>,
}

impl RunReport {
    pub fn applied_count(&self) -> usize {
        self.categories.iter().map(|c| c.applied.len()).sum()
    }

    pub fn failed_categories(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.iter().filter(|c| !c.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.categories.iter().all(CategoryReport::is_success)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// One line per category, warnings for failed ones.
    pub fn log_summary(&self) {
        let elapsed = self.finished_at - self.started_at;
        for category in &self.categories {
            match &category.failure {
                None => info!(
                    category = %category.category,
                    applied = category.applied.len(),
                    skipped = category.skipped,
                    records = category.stats.records,
                    "category synchronized"
                ),
                Some(failure) => warn!(
                    category = %category.category,
                    applied = category.applied.len(),
                    skipped = category.skipped,
                    file = failure.file.as_deref().unwrap_or("-"),
                    error = %failure.error,
                    "category failed"
                ),
            }
        }
        info!(
            applied = self.applied_count(),
            failed = self.failed_categories().count(),
            elapsed_secs = elapsed.num_seconds(),
            "maintenance run finished"
        );
    }
}
