//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LocateError: Issues resolving the project directory
//! - ConfigError: Issues with the goupdate.toml settings file
//! - ManifestError: Issues reading or parsing go.mod
//! - CommandError: External toolchain command failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Project directory related errors
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// Settings file related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// go.mod related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// External command related errors
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl AppError {
    /// Short description of the stage that failed, used as the log message
    pub fn stage_message(&self) -> &'static str {
        match self {
            AppError::Locate(LocateError::Directory { .. }) => "Failed to access project directory.",
            AppError::Locate(LocateError::Environment { .. }) => {
                "Failed to get working directory."
            }
            AppError::Config(_) => "Failed to load goupdate.toml.",
            AppError::Manifest(ManifestError::Open { .. }) => "Failed to open go.mod file.",
            AppError::Manifest(ManifestError::Read { .. }) => "Failed to read go.mod file.",
            AppError::Manifest(ManifestError::MissingBlockEnd) => {
                "Did not find the end of require block."
            }
            AppError::Manifest(ManifestError::EndBeforeStart { .. }) => {
                "Invalid syntax in go.mod file."
            }
            AppError::Command(_) => "Failed to run go mod tidy.",
        }
    }
}

/// Errors related to resolving the project directory
#[derive(Error, Debug)]
pub enum LocateError {
    /// The requested project directory is missing or not a directory
    #[error("cannot use project directory {path}: {message}")]
    Directory { path: PathBuf, message: String },

    /// The current working directory could not be determined
    #[error("failed to determine working directory: {source}")]
    Environment {
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the goupdate.toml settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file exists but could not be read
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has unknown keys
    #[error("failed to parse settings file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors related to go.mod operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// go.mod could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// go.mod was opened but could not be read as text
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `require (` line without any `)` line
    #[error("missing end of require block: no \")\" found")]
    MissingBlockEnd,

    /// The first `)` line comes before the `require (` line
    #[error("syntax error: \")\" on line {end_line} found before \"require (\" on line {start_line}")]
    EndBeforeStart { start_line: usize, end_line: usize },
}

/// Errors related to running the external toolchain
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command exited unsuccessfully
    #[error("`{command}` failed: {detail}")]
    Failed { command: String, detail: String },
}

impl LocateError {
    /// Creates a new Directory error
    pub fn directory(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LocateError::Directory {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Returns true for errors caused by inconsistent block delimiters
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ManifestError::MissingBlockEnd | ManifestError::EndBeforeStart { .. }
        )
    }
}

impl CommandError {
    /// Creates a new Failed error
    pub fn failed(command: impl Into<String>, detail: impl Into<String>) -> Self {
        CommandError::Failed {
            command: command.into(),
            detail: detail.into(),
        }
    }
}
