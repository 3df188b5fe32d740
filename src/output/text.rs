//! Text output formatter for human-readable display
//!
//! Lists every dependency with its outcome, followed by a one-line summary.

use crate::domain::{UpdateOutcome, UpdateReport};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn dry_run_prefix(&self, report: &UpdateReport) -> String {
        if report.dry_run {
            format!("{} ", self.paint("(dry-run)", |s| s.cyan()))
        } else {
            String::new()
        }
    }

    fn format_outcome(&self, outcome: &UpdateOutcome) -> String {
        match outcome {
            UpdateOutcome::Updated { module, elapsed_ms } => format!(
                "  {} {} {}",
                self.paint("✓", |s| s.green()),
                module,
                self.paint(&format_elapsed(*elapsed_ms), |s| s.dimmed())
            ),
            UpdateOutcome::Failed { module, detail } => format!(
                "  {} {} {}",
                self.paint("✗", |s| s.red().bold()),
                module,
                self.paint(detail, |s| s.red())
            ),
            UpdateOutcome::Skipped { module, reason } => format!(
                "  {} {} {}",
                self.paint("-", |s| s.dimmed()),
                module,
                self.paint(&format!("({})", reason), |s| s.dimmed())
            ),
            UpdateOutcome::NotAttempted { module } => format!(
                "  {} {} {}",
                self.paint("·", |s| s.yellow()),
                module,
                self.paint("(not attempted)", |s| s.yellow())
            ),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render milliseconds as seconds with one decimal
fn format_elapsed(elapsed_ms: u64) -> String {
    format!("{}.{}s", elapsed_ms / 1000, (elapsed_ms % 1000) / 100)
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix(report);

        if report.outcomes.is_empty() {
            writeln!(writer, "{}No dependencies to update.", prefix)?;
            return Ok(());
        }

        writeln!(
            writer,
            "{}{}",
            prefix,
            self.paint(&report.project_dir.display().to_string(), |s| s.bold())
        )?;
        for outcome in &report.outcomes {
            writeln!(writer, "{}", self.format_outcome(outcome))?;
        }
        writeln!(writer)?;

        let mut parts = vec![format!("{} updated", report.updated_count())];
        if report.failed_count() > 0 {
            parts.push(self.paint(&format!("{} failed", report.failed_count()), |s| s.red()));
        }
        if report.skipped_count() > 0 {
            parts.push(format!("{} skipped", report.skipped_count()));
        }
        if report.not_attempted_count() > 0 {
            parts.push(format!("{} not attempted", report.not_attempted_count()));
        }

        writeln!(
            writer,
            "{}{} in {}",
            prefix,
            parts.join(", "),
            format_elapsed(report.elapsed_ms)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkipReason;

    fn render(report: &UpdateReport) -> String {
        let mut out = Vec::new();
        TextFormatter::with_color(false)
            .format(report, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0.0s");
        assert_eq!(format_elapsed(1234), "1.2s");
        assert_eq!(format_elapsed(61_999), "61.9s");
    }

    #[test]
    fn test_empty_report() {
        let report = UpdateReport::new("/project", false);
        assert_eq!(render(&report), "No dependencies to update.\n");
    }

    #[test]
    fn test_empty_report_dry_run() {
        let report = UpdateReport::new("/project", true);
        assert_eq!(render(&report), "(dry-run) No dependencies to update.\n");
    }

    #[test]
    fn test_report_lists_outcomes_in_order() {
        let mut report = UpdateReport::new("/project", false);
        report.add_outcome(UpdateOutcome::updated("github.com/a/b", 1500));
        report.add_outcome(UpdateOutcome::failed("github.com/c/d", "not found"));
        report.add_outcome(UpdateOutcome::not_attempted("github.com/e/f"));
        report.add_outcome(UpdateOutcome::skipped("github.com/g/h", SkipReason::Excluded));
        report.elapsed_ms = 2000;

        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "/project");
        assert_eq!(lines[1], "  ✓ github.com/a/b 1.5s");
        assert_eq!(lines[2], "  ✗ github.com/c/d not found");
        assert_eq!(lines[3], "  · github.com/e/f (not attempted)");
        assert_eq!(lines[4], "  - github.com/g/h (excluded)");
        assert_eq!(
            lines[6],
            "1 updated, 1 failed, 1 skipped, 1 not attempted in 2.0s"
        );
    }

    #[test]
    fn test_colored_output_contains_modules() {
        let mut report = UpdateReport::new("/project", false);
        report.add_outcome(UpdateOutcome::updated("github.com/a/b", 10));

        let mut out = Vec::new();
        TextFormatter::new().format(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("github.com/a/b"));
        assert!(text.contains("1 updated"));
    }
}
