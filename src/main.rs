//! goupdate - Go module dependency updater
//!
//! Reads the require block of go.mod, runs `go get -u` for every module in
//! it and finishes with `go mod tidy`.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use goupdate::app::{execute, toolchain_for, RunStatus};
use goupdate::cli::CliArgs;
use goupdate::output::{create_formatter, OutputFormat};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors are fatal (1); 2 is reserved for partial failures
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG wins over -v / -q
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .init();

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Unexpected error!");
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: &CliArgs) -> anyhow::Result<ExitCode> {
    let result = execute(args, toolchain_for);
    let status = RunStatus::from_result(&result);

    match result {
        Ok(report) => {
            let formatter = create_formatter(OutputFormat::from_cli(args.json, args.quiet));
            let mut stdout = io::stdout().lock();
            formatter
                .format(&report, &mut stdout)
                .context("failed to write summary")?;
            stdout.flush().context("failed to write summary")?;
        }
        Err(e) => {
            tracing::error!(error = %e, "{}", e.stage_message());
        }
    }

    Ok(ExitCode::from(status.code()))
}
