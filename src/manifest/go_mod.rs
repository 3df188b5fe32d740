//! go.mod require block parser
//!
//! Handles:
//! - the `require (` ... `)` block, located by literal marker lines
//! - trailing versions and comments on block entries
//! - `// indirect` markers
//!
//! Single-line `require module v1.2.3` statements and other blocks are not
//! interpreted. The first `)` line in the file closes the require block.

use crate::error::ManifestError;

/// Line that opens the require block
pub const REQUIRE_BLOCK_START: &str = "require (";

/// Line that closes the require block
pub const REQUIRE_BLOCK_END: &str = ")";

/// A single entry of the require block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireEntry {
    /// Module path (the text before the first whitespace run)
    pub path: String,
    /// Whether the line is marked `// indirect`
    pub indirect: bool,
}

impl RequireEntry {
    /// Create a direct dependency entry
    pub fn direct(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            indirect: false,
        }
    }

    /// Create an indirect dependency entry
    pub fn indirect(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            indirect: true,
        }
    }

    /// Parse a trimmed block line, returning None for blank and comment-only lines
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return None;
        }

        let (path, rest) = match line.split_once(char::is_whitespace) {
            Some((path, rest)) => (path, rest),
            None => (line, ""),
        };

        let indirect = rest
            .split_once("//")
            .map(|(_, comment)| is_indirect_marker(comment))
            .unwrap_or(false);

        Some(Self {
            path: path.to_string(),
            indirect,
        })
    }
}

/// `indirect` must be the whole comment or be followed by `;`
fn is_indirect_marker(comment: &str) -> bool {
    let comment = comment.trim();
    comment == "indirect" || comment.starts_with("indirect;")
}

/// Split go.mod content into lines, trimming surrounding whitespace from each
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

/// Extract the require block entries from trimmed go.mod lines
///
/// Returns `Ok(None)` when the file has no `require (` line, which is a
/// normal state for modules without dependencies.
pub fn parse_require_block<S: AsRef<str>>(
    lines: &[S],
) -> Result<Option<Vec<RequireEntry>>, ManifestError> {
    let Some(start) = lines
        .iter()
        .position(|line| line.as_ref() == REQUIRE_BLOCK_START)
    else {
        return Ok(None);
    };

    let end = lines
        .iter()
        .position(|line| line.as_ref() == REQUIRE_BLOCK_END)
        .ok_or(ManifestError::MissingBlockEnd)?;

    if end < start {
        return Err(ManifestError::EndBeforeStart {
            start_line: start + 1,
            end_line: end + 1,
        });
    }

    let entries = lines[start + 1..end]
        .iter()
        .filter_map(|line| RequireEntry::from_line(line.as_ref()))
        .collect();

    Ok(Some(entries))
}

/// Parse go.mod content into its require block entries
pub fn parse_go_mod(content: &str) -> Result<Option<Vec<RequireEntry>>, ManifestError> {
    parse_require_block(&split_lines(content))
}
