//! Output formatting for run reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::UpdateReport;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// No summary at all
    None,
}

impl OutputFormat {
    /// Choose the format from CLI flags; --json wins over --quiet
    pub fn from_cli(json: bool, quiet: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if quiet {
            OutputFormat::None
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the run report
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Formatter that writes nothing
pub struct SilentFormatter;

impl OutputFormatter for SilentFormatter {
    fn format(&self, _report: &UpdateReport, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }
}

/// Create an output formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::None => Box::new(SilentFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_cli() {
        assert_eq!(OutputFormat::from_cli(false, false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_cli(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_cli(false, true), OutputFormat::None);
        assert_eq!(OutputFormat::from_cli(true, true), OutputFormat::Json);
    }

    #[test]
    fn test_silent_formatter_writes_nothing() {
        let report = UpdateReport::new("/project", false);
        let mut out = Vec::new();
        create_formatter(OutputFormat::None)
            .format(&report, &mut out)
            .unwrap();
        assert!(out.is_empty());
    }
}
