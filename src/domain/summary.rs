//! Run report types
//!
//! Collects the outcome of every dependency in a single run.

use super::UpdateOutcome;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Report of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    /// Project directory the commands ran in
    pub project_dir: PathBuf,
    /// When the update loop started
    pub started_at: DateTime<Utc>,
    /// Whether commands were only printed
    pub dry_run: bool,
    /// Whether the loop stopped early under the abort policy
    pub aborted: bool,
    /// Outcome per dependency, in go.mod order
    pub outcomes: Vec<UpdateOutcome>,
    /// Wall-clock time of the update loop and tidy
    pub elapsed_ms: u64,
}

impl UpdateReport {
    /// Creates an empty report
    pub fn new(project_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            project_dir: project_dir.into(),
            started_at: Utc::now(),
            dry_run,
            aborted: false,
            outcomes: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// Adds an outcome
    pub fn add_outcome(&mut self, outcome: UpdateOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the number of successful updates
    pub fn updated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_updated()).count()
    }

    /// Returns the number of failed updates
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Returns the number of filtered dependencies
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Returns the number of dependencies left untouched after an abort
    pub fn not_attempted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_not_attempted()).count()
    }

    /// Returns true if any update failed
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkipReason;

    fn sample_report() -> UpdateReport {
        let mut report = UpdateReport::new("/project", false);
        report.add_outcome(UpdateOutcome::updated("a/a", 10));
        report.add_outcome(UpdateOutcome::failed("b/b", "boom"));
        report.add_outcome(UpdateOutcome::skipped("c/c", SkipReason::Excluded));
        report.add_outcome(UpdateOutcome::not_attempted("d/d"));
        report.add_outcome(UpdateOutcome::updated("e/e", 20));
        report
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = UpdateReport::new("/project", true);
        assert!(report.dry_run);
        assert!(!report.aborted);
        assert!(report.outcomes.is_empty());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_counts() {
        let report = sample_report();
        assert_eq!(report.updated_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.not_attempted_count(), 1);
        assert!(report.has_failures());
    }
}
