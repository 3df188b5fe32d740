//! Per-dependency update outcome types

use serde::Serialize;
use std::fmt;

/// Reason why a dependency was not handed to the toolchain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Module was excluded via --exclude or the settings file
    Excluded,
    /// Module not in --only list
    NotInOnlyList,
    /// Module is marked `// indirect` and --direct-only is set
    Indirect,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Excluded => write!(f, "excluded"),
            SkipReason::NotInOnlyList => write!(f, "not in --only list"),
            SkipReason::Indirect => write!(f, "indirect dependency"),
        }
    }
}

/// Outcome of a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// `go get -u` succeeded
    Updated {
        /// Module path
        module: String,
        /// Time the command took
        elapsed_ms: u64,
    },
    /// `go get -u` failed
    Failed {
        /// Module path
        module: String,
        /// Last line of the command's error output
        detail: String,
    },
    /// Filtered out before the update loop
    Skipped {
        /// Module path
        module: String,
        /// Why it was skipped
        reason: SkipReason,
    },
    /// Left untouched because an earlier update failed under the abort policy
    NotAttempted {
        /// Module path
        module: String,
    },
}

impl UpdateOutcome {
    /// Creates an Updated outcome
    pub fn updated(module: impl Into<String>, elapsed_ms: u64) -> Self {
        UpdateOutcome::Updated {
            module: module.into(),
            elapsed_ms,
        }
    }

    /// Creates a Failed outcome
    pub fn failed(module: impl Into<String>, detail: impl Into<String>) -> Self {
        UpdateOutcome::Failed {
            module: module.into(),
            detail: detail.into(),
        }
    }

    /// Creates a Skipped outcome
    pub fn skipped(module: impl Into<String>, reason: SkipReason) -> Self {
        UpdateOutcome::Skipped {
            module: module.into(),
            reason,
        }
    }

    /// Creates a NotAttempted outcome
    pub fn not_attempted(module: impl Into<String>) -> Self {
        UpdateOutcome::NotAttempted {
            module: module.into(),
        }
    }

    /// Returns the module path
    pub fn module(&self) -> &str {
        match self {
            UpdateOutcome::Updated { module, .. }
            | UpdateOutcome::Failed { module, .. }
            | UpdateOutcome::Skipped { module, .. }
            | UpdateOutcome::NotAttempted { module } => module,
        }
    }

    /// Returns true if the update succeeded
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }

    /// Returns true if the update failed
    pub fn is_failed(&self) -> bool {
        matches!(self, UpdateOutcome::Failed { .. })
    }

    /// Returns true if the dependency was filtered out
    pub fn is_skipped(&self) -> bool {
        matches!(self, UpdateOutcome::Skipped { .. })
    }

    /// Returns true if the dependency was never attempted
    pub fn is_not_attempted(&self) -> bool {
        matches!(self, UpdateOutcome::NotAttempted { .. })
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::Updated { module, elapsed_ms } => {
                write!(f, "{}: updated ({} ms)", module, elapsed_ms)
            }
            UpdateOutcome::Failed { module, detail } => write!(f, "{}: failed ({})", module, detail),
            UpdateOutcome::Skipped { module, reason } => {
                write!(f, "{}: skipped ({})", module, reason)
            }
            UpdateOutcome::NotAttempted { module } => write!(f, "{}: not attempted", module),
        }
    }
}
