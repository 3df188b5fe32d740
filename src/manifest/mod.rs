//! go.mod location, reading and parsing
//!
//! This module provides functionality to:
//! - Resolve the project directory and go.mod path
//! - Read go.mod into trimmed lines
//! - Extract the require block entries

mod go_mod;
mod locator;

pub use go_mod::{
    parse_go_mod, parse_require_block, split_lines, RequireEntry, REQUIRE_BLOCK_END,
    REQUIRE_BLOCK_START,
};
pub use locator::{locate_manifest, ProjectPaths, MANIFEST_FILENAME};

use crate::error::ManifestError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read go.mod and split it into trimmed lines
///
/// The file handle is closed before this returns, whatever the outcome.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ManifestError> {
    let mut file = File::open(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Found go.mod file.");

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(split_lines(&content))
}

/// Read go.mod and return its require block entries
pub fn read_dependencies(path: &Path) -> Result<Option<Vec<RequireEntry>>, ManifestError> {
    let lines = read_lines(path)?;
    parse_require_block(&lines)
}
