use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncGuardError};
use crate::rules::DEFAULT_MAX_PATH_LENGTH;
use crate::scanner::ScanOptions;

/// Scan behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Maximum full path length in characters (default: 260).
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,

    /// Descend into symlinked directories and check symlinked files (default: false).
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Rename files to their normalized names (default: true).
    #[serde(default = "default_true")]
    pub fix_names: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            follow_symlinks: false,
            fix_names: true,
        }
    }
}

/// Entries to leave out of the scan entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExcludeConfig {
    /// Glob patterns matched against the path relative to the scan root or the entry name.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

const fn default_max_path_length() -> usize {
    DEFAULT_MAX_PATH_LENGTH
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    /// Returns an error if `max_path_length` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_path_length == 0 {
            return Err(SyncGuardError::Config(
                "scan.max_path_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_path_length: self.scan.max_path_length,
            follow_symlinks: self.scan.follow_symlinks,
            fix_names: self.scan.fix_names,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
