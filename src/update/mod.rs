//! Update selection and failure handling
//!
//! This module provides:
//! - Dependency filtering (--only / --exclude / --direct-only)
//! - The policy applied when a single `go get -u` fails

mod filter;

pub use filter::DependencyFilter;

use std::fmt;

/// What to do with the remaining dependencies after one update fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and move on to the next dependency
    #[default]
    Continue,
    /// Stop updating; remaining dependencies are not attempted
    Abort,
}

impl FailurePolicy {
    /// Policy for the `stop-on-first-failure` switch
    pub fn from_stop_on_first_failure(stop: bool) -> Self {
        if stop {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Continue => write!(f, "continue"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}
