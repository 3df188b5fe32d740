//! CLI argument parsing module for goupdate

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Update every direct dependency of a Go module, then run `go mod tidy`
#[derive(Parser, Debug, Clone)]
#[command(name = "goupdate", version, about = "Go module dependency updater")]
pub struct CliArgs {
    /// Project directory containing go.mod (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub project_dir: Option<PathBuf>,

    /// Stop updating after the first failed `go get -u`
    #[arg(long, overrides_with = "no_stop_on_first_failure")]
    pub stop_on_first_failure: bool,

    /// Keep updating after a failed `go get -u`, even if goupdate.toml says otherwise
    #[arg(long, overrides_with = "stop_on_first_failure")]
    pub no_stop_on_first_failure: bool,

    /// Go toolchain binary to invoke (default: go)
    #[arg(long, value_name = "PROGRAM")]
    pub go: Option<String>,

    // Dependency filters
    /// Exclude specific modules from update (can be specified multiple times)
    #[arg(long, value_name = "MODULE", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Update only specific modules (can be specified multiple times)
    #[arg(long, value_name = "MODULE", action = ArgAction::Append)]
    pub only: Vec<String>,

    /// Skip dependencies marked `// indirect`
    #[arg(long, overrides_with = "no_direct_only")]
    pub direct_only: bool,

    /// Update `// indirect` dependencies too, even if goupdate.toml says otherwise
    #[arg(long, overrides_with = "direct_only")]
    pub no_direct_only: bool,

    // General options
    /// Dry run mode - log the commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and suppress the text summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Collapse an `--x` / `--no-x` pair into an explicit choice, if one was made
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CliArgs {
    /// `--stop-on-first-failure` / `--no-stop-on-first-failure`, None when neither is given
    pub fn stop_on_first_failure_flag(&self) -> Option<bool> {
        switch(self.stop_on_first_failure, self.no_stop_on_first_failure)
    }

    /// `--direct-only` / `--no-direct-only`, None when neither is given
    pub fn direct_only_flag(&self) -> Option<bool> {
        switch(self.direct_only, self.no_direct_only)
    }

    /// Default tracing filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
