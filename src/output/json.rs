//! JSON output formatter for machine processing

use crate::domain::{UpdateOutcome, UpdateReport};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a run
#[derive(Serialize)]
struct JsonOutput<'a> {
    project_dir: String,
    started_at: String,
    dry_run: bool,
    aborted: bool,
    elapsed_ms: u64,
    summary: JsonSummary,
    dependencies: &'a [UpdateOutcome],
}

#[derive(Serialize)]
struct JsonSummary {
    updated: usize,
    failed: usize,
    skipped: usize,
    not_attempted: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            project_dir: report.project_dir.display().to_string(),
            started_at: report.started_at.to_rfc3339(),
            dry_run: report.dry_run,
            aborted: report.aborted,
            elapsed_ms: report.elapsed_ms,
            summary: JsonSummary {
                updated: report.updated_count(),
                failed: report.failed_count(),
                skipped: report.skipped_count(),
                not_attempted: report.not_attempted_count(),
            },
            dependencies: &report.outcomes,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
