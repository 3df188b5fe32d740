//! Project directory resolution
//!
//! Resolves the optional `--project-dir` into an absolute base directory and
//! the go.mod path inside it. The process working directory is never changed;
//! the base directory is handed to every later stage instead.

use crate::error::LocateError;
use std::path::{Path, PathBuf};

/// File name of the Go module manifest
pub const MANIFEST_FILENAME: &str = "go.mod";

/// Resolved locations for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Absolute project directory, used as the working directory of child processes
    pub base_dir: PathBuf,
    /// Absolute path to go.mod inside `base_dir`
    pub manifest_path: PathBuf,
}

impl ProjectPaths {
    /// Build paths for an already-resolved base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let manifest_path = base_dir.join(MANIFEST_FILENAME);
        Self {
            base_dir,
            manifest_path,
        }
    }
}

/// Locate go.mod for the given project directory
///
/// An absent or empty `project_dir` means the current working directory.
/// A relative `project_dir` is resolved against the current working directory.
pub fn locate_manifest(project_dir: Option<&Path>) -> Result<ProjectPaths, LocateError> {
    let requested = project_dir.filter(|dir| !dir.as_os_str().is_empty());

    let Some(dir) = requested else {
        return Ok(ProjectPaths::new(current_dir()?));
    };

    let metadata = std::fs::metadata(dir).map_err(|e| access_error(dir, e))?;

    if !metadata.is_dir() {
        return Err(LocateError::directory(dir, "not a directory"));
    }

    // Stat through the directory itself: fails without search permission
    std::fs::metadata(dir.join(".")).map_err(|e| access_error(dir, e))?;

    let base_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir()?.join(dir)
    };

    Ok(ProjectPaths::new(base_dir))
}

fn access_error(dir: &Path, e: std::io::Error) -> LocateError {
    let message = match e.kind() {
        std::io::ErrorKind::NotFound => "directory does not exist".to_string(),
        std::io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => e.to_string(),
    };
    LocateError::directory(dir, message)
}

fn current_dir() -> Result<PathBuf, LocateError> {
    std::env::current_dir().map_err(|source| LocateError::Environment { source })
}
