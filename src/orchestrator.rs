//! Update orchestrator for coordinating the update workflow
//!
//! This module provides:
//! - Sequential `go get -u` per dependency, in go.mod order
//! - Continue or abort on a failed update
//! - A single `go mod tidy` once the loop is over
//! - Structured log events with timings for every step

use crate::domain::{SkipReason, UpdateOutcome, UpdateReport};
use crate::error::CommandError;
use crate::manifest::RequireEntry;
use crate::toolchain::Toolchain;
use crate::update::FailurePolicy;
use std::path::Path;
use std::time::{Duration, Instant};

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator<T: Toolchain> {
    /// Runner for the external commands
    toolchain: T,
    /// Behaviour after a failed update
    policy: FailurePolicy,
    /// Whether the toolchain only pretends to run
    dry_run: bool,
}

impl<T: Toolchain> Orchestrator<T> {
    /// Create a new orchestrator
    pub fn new(toolchain: T, policy: FailurePolicy) -> Self {
        Self {
            toolchain,
            policy,
            dry_run: false,
        }
    }

    /// Mark the report as a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[cfg(test)]
    pub(crate) fn toolchain(&self) -> &T {
        &self.toolchain
    }

    /// Update every selected dependency, then tidy the module
    ///
    /// Skipped entries are only recorded in the report. A failing tidy is the
    /// only error returned; update failures are logged and reported.
    pub fn run(
        &self,
        dependencies: &[RequireEntry],
        skipped: &[(RequireEntry, SkipReason)],
        project_dir: &Path,
    ) -> Result<UpdateReport, CommandError> {
        let mut report = UpdateReport::new(project_dir, self.dry_run);

        for (entry, reason) in skipped {
            tracing::debug!(dependency = %entry.path, %reason, "Skipping dependency.");
        }

        tracing::info!(
            number_of_dependencies = dependencies.len(),
            policy = %self.policy,
            "Starting updates."
        );
        let run_start = Instant::now();

        let mut remaining = dependencies.iter();
        for entry in remaining.by_ref() {
            let outcome = self.update_dependency(&entry.path, project_dir);
            let failed = outcome.is_failed();
            report.add_outcome(outcome);

            if failed && self.policy == FailurePolicy::Abort {
                report.aborted = true;
                break;
            }
        }

        if report.aborted {
            for entry in remaining {
                report.add_outcome(UpdateOutcome::not_attempted(&entry.path));
            }
            let failed_dependency = report
                .outcomes
                .iter()
                .find(|o| o.is_failed())
                .map(UpdateOutcome::module)
                .unwrap_or_default();
            tracing::warn!(
                failed_dependency,
                not_attempted = report.not_attempted_count(),
                "Stopped updating after the first failure."
            );
        }

        for (entry, reason) in skipped {
            report.add_outcome(UpdateOutcome::skipped(&entry.path, reason.clone()));
        }

        self.tidy(project_dir)?;

        report.elapsed_ms = millis(run_start.elapsed());
        tracing::info!(
            updated = report.updated_count(),
            failed = report.failed_count(),
            elapsed_ms = report.elapsed_ms,
            "Done."
        );

        Ok(report)
    }

    fn update_dependency(&self, module: &str, project_dir: &Path) -> UpdateOutcome {
        let start = Instant::now();
        let result = self.toolchain.update(module, project_dir);
        let elapsed_ms = millis(start.elapsed());

        if result.success {
            tracing::info!(dependency = module, elapsed_ms, "Update successful.");
            UpdateOutcome::updated(module, elapsed_ms)
        } else {
            let detail = result.failure_detail();
            tracing::error!(
                dependency = module,
                error = %detail,
                command = %result.command,
                "Failed to update dependency."
            );
            UpdateOutcome::failed(module, detail)
        }
    }

    fn tidy(&self, project_dir: &Path) -> Result<(), CommandError> {
        tracing::info!("Running go mod tidy...");

        let start = Instant::now();
        let result = self.toolchain.tidy(project_dir);
        if !result.success {
            return Err(CommandError::failed(result.command.clone(), result.failure_detail()));
        }

        tracing::debug!(elapsed_ms = millis(start.elapsed()), "go mod tidy finished");
        Ok(())
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::toolchain::CommandResult;
    use std::cell::RefCell;

    /// Recorded toolchain invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Call {
        Update(String),
        Tidy,
    }

    /// Mock toolchain that records calls and fails selected modules
    #[derive(Default)]
    pub(crate) struct MockToolchain {
        pub(crate) calls: RefCell<Vec<Call>>,
        pub(crate) failing_modules: Vec<String>,
        pub(crate) tidy_fails: bool,
    }

    impl MockToolchain {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn failing(modules: &[&str]) -> Self {
            Self {
                failing_modules: modules.iter().map(|m| m.to_string()).collect(),
                ..Self::default()
            }
        }

        pub(crate) fn with_failing_tidy(mut self) -> Self {
            self.tidy_fails = true;
            self
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Toolchain for MockToolchain {
        fn update(&self, module: &str, _working_dir: &Path) -> CommandResult {
            self.calls.borrow_mut().push(Call::Update(module.to_string()));
            let command = format!("go get -u {}", module);
            if self.failing_modules.iter().any(|m| m == module) {
                CommandResult::failure(command, String::new(), "go: module not found".to_string())
            } else {
                CommandResult::success(command, String::new(), String::new())
            }
        }

        fn tidy(&self, _working_dir: &Path) -> CommandResult {
            self.calls.borrow_mut().push(Call::Tidy);
            if self.tidy_fails {
                CommandResult::failure(
                    "go mod tidy",
                    String::new(),
                    "go: updates to go.mod needed".to_string(),
                )
            } else {
                CommandResult::success("go mod tidy", String::new(), String::new())
            }
        }
    }

    fn entries(paths: &[&str]) -> Vec<RequireEntry> {
        paths.iter().map(|p| RequireEntry::direct(*p)).collect()
    }

    fn update(module: &str) -> Call {
        Call::Update(module.to_string())
    }

    #[test]
    fn test_updates_in_order_then_tidy() {
        let orchestrator = Orchestrator::new(MockToolchain::new(), FailurePolicy::Continue);

        let report = orchestrator
            .run(
                &entries(&["github.com/a/b", "github.com/c/d"]),
                &[],
                Path::new("/project"),
            )
            .unwrap();

        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("github.com/a/b"), update("github.com/c/d"), Call::Tidy]
        );
        assert_eq!(report.updated_count(), 2);
        assert!(!report.has_failures());
        assert!(!report.aborted);
        assert_eq!(report.project_dir, Path::new("/project"));
    }

    #[test]
    fn test_empty_list_still_tidies() {
        let orchestrator = Orchestrator::new(MockToolchain::new(), FailurePolicy::Continue);

        let report = orchestrator.run(&[], &[], Path::new("/project")).unwrap();

        assert_eq!(orchestrator.toolchain().calls(), vec![Call::Tidy]);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_continue_policy_skips_past_failure() {
        let toolchain = MockToolchain::failing(&["github.com/a/b"]);
        let orchestrator = Orchestrator::new(toolchain, FailurePolicy::Continue);

        let report = orchestrator
            .run(
                &entries(&["github.com/a/b", "github.com/c/d"]),
                &[],
                Path::new("/project"),
            )
            .unwrap();

        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("github.com/a/b"), update("github.com/c/d"), Call::Tidy]
        );
        assert_eq!(
            report.outcomes[0],
            UpdateOutcome::failed("github.com/a/b", "go: module not found")
        );
        assert!(report.outcomes[1].is_updated());
        assert!(!report.aborted);
        assert_eq!(report.not_attempted_count(), 0);
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let toolchain = MockToolchain::failing(&["github.com/a/b"]);
        let orchestrator = Orchestrator::new(toolchain, FailurePolicy::Abort);

        let report = orchestrator
            .run(
                &entries(&["github.com/a/b", "github.com/c/d", "github.com/e/f"]),
                &[],
                Path::new("/project"),
            )
            .unwrap();

        // Tidy still runs after an abort
        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("github.com/a/b"), Call::Tidy]
        );
        assert!(report.aborted);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.outcomes[1..],
            [
                UpdateOutcome::not_attempted("github.com/c/d"),
                UpdateOutcome::not_attempted("github.com/e/f"),
            ]
        );
    }

    #[test]
    fn test_abort_policy_without_failures_runs_everything() {
        let orchestrator = Orchestrator::new(MockToolchain::new(), FailurePolicy::Abort);

        let report = orchestrator
            .run(&entries(&["a/a", "b/b"]), &[], Path::new("/project"))
            .unwrap();

        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("a/a"), update("b/b"), Call::Tidy]
        );
        assert!(!report.aborted);
    }

    #[test]
    fn test_tidy_failure_is_an_error() {
        let toolchain = MockToolchain::new().with_failing_tidy();
        let orchestrator = Orchestrator::new(toolchain, FailurePolicy::Continue);

        let err = orchestrator
            .run(&entries(&["a/a"]), &[], Path::new("/project"))
            .unwrap_err();

        let CommandError::Failed { command, detail } = err;
        assert_eq!(command, "go mod tidy");
        assert_eq!(detail, "go: updates to go.mod needed");
        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("a/a"), Call::Tidy]
        );
    }

    #[test]
    fn test_skipped_entries_are_reported_not_run() {
        let orchestrator = Orchestrator::new(MockToolchain::new(), FailurePolicy::Continue);
        let skipped = vec![(RequireEntry::indirect("x/x"), SkipReason::Indirect)];

        let report = orchestrator
            .run(&entries(&["a/a"]), &skipped, Path::new("/project"))
            .unwrap();

        assert_eq!(
            orchestrator.toolchain().calls(),
            vec![update("a/a"), Call::Tidy]
        );
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].is_updated());
        assert_eq!(
            report.outcomes[1],
            UpdateOutcome::skipped("x/x", SkipReason::Indirect)
        );
    }

    #[test]
    fn test_dry_run_flag_is_reported() {
        let orchestrator =
            Orchestrator::new(MockToolchain::new(), FailurePolicy::Continue).with_dry_run(true);

        let report = orchestrator.run(&[], &[], Path::new("/project")).unwrap();
        assert!(report.dry_run);
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
