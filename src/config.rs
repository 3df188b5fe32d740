//! Run configuration
//!
//! Settings come from (in priority order):
//! - command line flags
//! - goupdate.toml in the project directory
//! - built-in defaults
//!
//! Boolean switches have `--no-*` counterparts so a project file value can be
//! turned off for one run.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::toolchain::DEFAULT_GO_BINARY;
use crate::update::{DependencyFilter, FailurePolicy};
use serde::Deserialize;
use std::path::Path;

/// Name of the optional per-project settings file
pub const SETTINGS_FILENAME: &str = "goupdate.toml";

/// Settings read from goupdate.toml
///
/// There is no toolchain binary key; only `--go` selects what gets executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    /// Abort the update loop at the first failure
    pub stop_on_first_failure: Option<bool>,
    /// Modules never to update
    pub exclude: Vec<String>,
    /// Skip `// indirect` entries
    pub direct_only: Option<bool>,
}

impl ProjectSettings {
    /// Read settings from a project directory
    ///
    /// A missing file yields the defaults.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(SETTINGS_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let settings = Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.clone(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "Loaded settings file.");
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e: toml::de::Error| e.to_string().trim().to_string())
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    /// Behaviour after a failed update
    pub policy: FailurePolicy,
    /// Go toolchain binary
    pub go_binary: String,
    /// Dependency selection
    pub filter: DependencyFilter,
    /// Print commands instead of running them
    pub dry_run: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::default(),
            go_binary: DEFAULT_GO_BINARY.to_string(),
            filter: DependencyFilter::default(),
            dry_run: false,
        }
    }
}

impl UpdateConfig {
    /// Merge CLI arguments over project settings
    pub fn resolve(args: &CliArgs, settings: ProjectSettings) -> Self {
        let stop_on_first_failure = args
            .stop_on_first_failure_flag()
            .or(settings.stop_on_first_failure)
            .unwrap_or(false);
        let direct_only = args
            .direct_only_flag()
            .or(settings.direct_only)
            .unwrap_or(false);

        let go_binary = args
            .go
            .clone()
            .unwrap_or_else(|| DEFAULT_GO_BINARY.to_string());

        let mut exclude = settings.exclude;
        for module in &args.exclude {
            if !exclude.contains(module) {
                exclude.push(module.clone());
            }
        }

        let filter = DependencyFilter::new()
            .with_exclude(exclude)
            .with_only(args.only.clone())
            .with_direct_only(direct_only);

        Self {
            policy: FailurePolicy::from_stop_on_first_failure(stop_on_first_failure),
            go_binary,
            filter,
            dry_run: args.dry_run,
        }
    }
}
