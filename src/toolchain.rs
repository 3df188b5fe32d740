//! Go toolchain integration for updating and tidying a module
//!
//! This module provides:
//! - The `Toolchain` trait the orchestrator drives
//! - `SystemToolchain`, which runs `go get -u` and `go mod tidy`
//! - `DryRunToolchain`, which only reports what would run

use std::path::Path;
use std::process::{Command, Output};

/// Default Go toolchain binary
pub const DEFAULT_GO_BINARY: &str = "go";

/// Result of a toolchain command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The command that was executed
    pub command: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl CommandResult {
    /// Create a successful command result
    pub fn success(command: impl Into<String>, stdout: String, stderr: String) -> Self {
        Self {
            command: command.into(),
            success: true,
            stdout,
            stderr,
        }
    }

    /// Create a failed command result
    pub fn failure(command: impl Into<String>, stdout: String, stderr: String) -> Self {
        Self {
            command: command.into(),
            success: false,
            stdout,
            stderr,
        }
    }

    /// One-line description of why the command failed
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        match stderr.lines().last() {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => "command exited unsuccessfully".to_string(),
        }
    }
}

/// Trait for running the external update and tidy commands
pub trait Toolchain {
    /// Update a single module to its latest version
    fn update(&self, module: &str, working_dir: &Path) -> CommandResult;

    /// Reconcile go.mod and go.sum after updates
    fn tidy(&self, working_dir: &Path) -> CommandResult;
}

/// Arguments for updating a module
pub fn update_args(module: &str) -> [&str; 3] {
    ["get", "-u", module]
}

/// Arguments for tidying the module
pub fn tidy_args() -> [&'static str; 2] {
    ["mod", "tidy"]
}

fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program];
    parts.extend_from_slice(args);
    parts.join(" ")
}

/// Toolchain runner that executes real commands
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    program: String,
}

impl SystemToolchain {
    /// Create a runner for the given Go binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run a command and capture output
    fn run_command(&self, args: &[&str], working_dir: &Path) -> std::io::Result<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .output()
    }

    fn run(&self, args: &[&str], working_dir: &Path) -> CommandResult {
        let command_str = display_command(&self.program, args);
        tracing::debug!(command = %command_str, dir = %working_dir.display(), "running command");

        match self.run_command(args, working_dir) {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();

                if output.status.success() {
                    CommandResult::success(command_str, stdout, stderr)
                } else {
                    let stderr = if stderr.trim().is_empty() {
                        output.status.to_string()
                    } else {
                        stderr
                    };
                    CommandResult::failure(command_str, stdout, stderr)
                }
            }
            Err(e) => CommandResult::failure(
                command_str,
                String::new(),
                format!("Failed to execute command: {}", e),
            ),
        }
    }
}

impl Toolchain for SystemToolchain {
    fn update(&self, module: &str, working_dir: &Path) -> CommandResult {
        self.run(&update_args(module), working_dir)
    }

    fn tidy(&self, working_dir: &Path) -> CommandResult {
        self.run(&tidy_args(), working_dir)
    }
}

/// Toolchain runner that spawns nothing and reports success
#[derive(Debug, Clone)]
pub struct DryRunToolchain {
    program: String,
}

impl DryRunToolchain {
    /// Create a dry-run runner that names the given Go binary in its output
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn pretend(&self, args: &[&str], working_dir: &Path) -> CommandResult {
        let command_str = display_command(&self.program, args);
        tracing::info!(command = %command_str, dir = %working_dir.display(), "dry-run: would run");
        CommandResult::success(command_str, String::new(), String::new())
    }
}

impl Toolchain for DryRunToolchain {
    fn update(&self, module: &str, working_dir: &Path) -> CommandResult {
        self.pretend(&update_args(module), working_dir)
    }

    fn tidy(&self, working_dir: &Path) -> CommandResult {
        self.pretend(&tidy_args(), working_dir)
    }
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn update(&self, module: &str, working_dir: &Path) -> CommandResult {
        (**self).update(module, working_dir)
    }

    fn tidy(&self, working_dir: &Path) -> CommandResult {
        (**self).tidy(working_dir)
    }
}

impl<T: Toolchain + ?Sized> Toolchain for Box<T> {
    fn update(&self, module: &str, working_dir: &Path) -> CommandResult {
        (**self).update(module, working_dir)
    }

    fn tidy(&self, working_dir: &Path) -> CommandResult {
        (**self).tidy(working_dir)
    }
}
