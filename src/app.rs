//! Run pipeline: locate → configure → parse → update → tidy
//!
//! Any failure before the update loop aborts the run before a single
//! toolchain command is issued.

use crate::cli::CliArgs;
use crate::config::{ProjectSettings, UpdateConfig};
use crate::domain::UpdateReport;
use crate::error::AppError;
use crate::manifest::{locate_manifest, read_dependencies};
use crate::orchestrator::Orchestrator;
use crate::toolchain::{DryRunToolchain, SystemToolchain, Toolchain};

/// Final status of a run, mapped onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every update and the tidy succeeded
    Success,
    /// Locating, configuration, parsing or tidy failed
    Failure,
    /// Tidy succeeded but at least one update failed
    PartialFailure,
}

impl RunStatus {
    /// Status for a completed pipeline
    pub fn from_result(result: &Result<UpdateReport, AppError>) -> Self {
        match result {
            Ok(report) if report.has_failures() => RunStatus::PartialFailure,
            Ok(_) => RunStatus::Success,
            Err(_) => RunStatus::Failure,
        }
    }

    /// Process exit code
    pub fn code(&self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
            RunStatus::PartialFailure => 2,
        }
    }
}

/// Pick the toolchain runner for a configuration
pub fn toolchain_for(config: &UpdateConfig) -> Box<dyn Toolchain> {
    if config.dry_run {
        Box::new(DryRunToolchain::new(config.go_binary.clone()))
    } else {
        Box::new(SystemToolchain::new(config.go_binary.clone()))
    }
}

/// Run the whole pipeline
///
/// `make_toolchain` is only called once go.mod has been parsed successfully.
pub fn execute<T, F>(args: &CliArgs, make_toolchain: F) -> Result<UpdateReport, AppError>
where
    T: Toolchain,
    F: FnOnce(&UpdateConfig) -> T,
{
    let paths = locate_manifest(args.project_dir.as_deref())?;
    tracing::debug!(dir = %paths.base_dir.display(), "Resolved project directory.");

    let settings = ProjectSettings::from_dir(&paths.base_dir)?;
    let config = UpdateConfig::resolve(args, settings);

    let entries = match read_dependencies(&paths.manifest_path)? {
        Some(entries) => entries,
        None => {
            tracing::info!("No require block found.");
            Vec::new()
        }
    };

    let (selected, skipped) = config.filter.partition(entries);

    let orchestrator =
        Orchestrator::new(make_toolchain(&config), config.policy).with_dry_run(config.dry_run);
    let report = orchestrator.run(&selected, &skipped, &paths.base_dir)?;

    Ok(report)
}
