use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SyncGuardError};

pub trait EntryFilter {
    /// `relative_path` is relative to the scan root.
    fn should_include(&self, relative_path: &Path) -> bool;
}

/// Accepts every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl EntryFilter for AcceptAll {
    fn should_include(&self, _relative_path: &Path) -> bool {
        true
    }
}

/// Skips entries matching any exclude glob.
///
/// A pattern matches either the path relative to the scan root or the bare
/// entry name, so `node_modules` and `**/build/*.tmp` both work.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    patterns: GlobSet,
}

impl ExcludeFilter {
    /// Compile the exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| SyncGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .map_err(|e| SyncGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { patterns })
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn is_excluded(&self, relative_path: &Path) -> bool {
        if self.patterns.is_match(relative_path) {
            return true;
        }
        relative_path
            .file_name()
            .is_some_and(|name| self.patterns.is_match(name))
    }
}

impl Default for ExcludeFilter {
    fn default() -> Self {
        Self {
            patterns: GlobSet::empty(),
        }
    }
}

impl EntryFilter for ExcludeFilter {
    fn should_include(&self, relative_path: &Path) -> bool {
        !self.is_excluded(relative_path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
