//! Directory tree traversal.

mod filter;
mod listing;
mod walker;

pub use filter::{AcceptAll, EntryFilter, ExcludeFilter};
pub use listing::{Child, ChildKind, Listing, list_children};
pub use walker::{ScanOptions, TreeWalker};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entry::EntryRecord;
use crate::normalizer::RenameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A directory could not be listed; its subtree was skipped.
    ListDirectory,
    /// A single entry could not be inspected.
    ReadEntry,
    /// A followed symlink leads back to a directory already visited.
    SymlinkCycle,
}

/// A non-fatal problem met while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

/// Everything one scan produced.
///
/// `entries` is in traversal order: each folder, then its files by name, then
/// its subfolders by name, depth first.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub root: PathBuf,
    pub entries: Vec<EntryRecord>,
    pub renames: Vec<RenameRecord>,
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn entries_with_issues(&self) -> impl Iterator<Item = &EntryRecord> {
        self.entries.iter().filter(|e| e.has_issues())
    }

    /// Number of entries with at least one issue.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.entries_with_issues().count()
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.entries.iter().any(EntryRecord::has_issues)
    }

    #[must_use]
    pub fn renamed_count(&self) -> usize {
        self.renames.iter().filter(|r| r.is_renamed()).count()
    }
}

/// Observer for scan progress.
///
/// Every method defaults to a no-op so implementors only override what they need.
pub trait ScanListener {
    fn folder_entered(&mut self, _folder: &EntryRecord) {}

    fn file_recorded(&mut self, _file: &EntryRecord) {}

    fn folder_finished(&mut self, _folder: &Path, _subfolders: usize, _files: usize) {}

    fn rename_attempted(&mut self, _rename: &RenameRecord) {}

    fn failure(&mut self, _failure: &ScanFailure) {}
}

/// Listener that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl ScanListener for NoopListener {}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
