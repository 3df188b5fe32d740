//! Dependency filter configuration
//!
//! This module provides the DependencyFilter struct that decides which
//! require block entries are handed to the toolchain.

use crate::domain::SkipReason;
use crate::manifest::RequireEntry;

/// Filter configuration for dependency selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyFilter {
    /// Modules to exclude from updates
    pub exclude: Vec<String>,
    /// If non-empty, only update these modules
    pub only: Vec<String>,
    /// Skip entries marked `// indirect`
    pub direct_only: bool,
}

impl DependencyFilter {
    /// Create a new DependencyFilter with default settings (select all)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set modules to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set modules to include (only list)
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Set whether indirect dependencies are skipped
    pub fn with_direct_only(mut self, direct_only: bool) -> Self {
        self.direct_only = direct_only;
        self
    }

    /// Returns why an entry should be skipped, or None to update it
    pub fn skip_reason(&self, entry: &RequireEntry) -> Option<SkipReason> {
        // --only takes precedence over --exclude
        if !self.only.is_empty() {
            if !self.only.iter().any(|m| *m == entry.path) {
                return Some(SkipReason::NotInOnlyList);
            }
        } else if self.exclude.iter().any(|m| *m == entry.path) {
            return Some(SkipReason::Excluded);
        }

        if self.direct_only && entry.indirect {
            return Some(SkipReason::Indirect);
        }

        None
    }

    /// Split entries into those to update and those skipped, preserving order
    pub fn partition(
        &self,
        entries: Vec<RequireEntry>,
    ) -> (Vec<RequireEntry>, Vec<(RequireEntry, SkipReason)>) {
        let mut selected = Vec::new();
        let mut skipped = Vec::new();

        for entry in entries {
            match self.skip_reason(&entry) {
                Some(reason) => skipped.push((entry, reason)),
                None => selected.push(entry),
            }
        }

        (selected, skipped)
    }
}
