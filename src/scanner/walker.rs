use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use super::filter::{AcceptAll, EntryFilter};
use super::listing::{ChildKind, list_children};
use super::{FailureKind, ScanFailure, ScanListener, ScanReport};
use crate::entry::{EntryKind, EntryRecord};
use crate::error::{Result, SyncGuardError};
use crate::normalizer::{NameNormalizer, RealRenameFs, RenameFs, RenameStatus};
use crate::rules::{DEFAULT_MAX_PATH_LENGTH, RuleSet};

/// Settings fixed for the duration of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub max_path_length: usize,
    pub follow_symlinks: bool,
    /// Rename files to their normalized names. When false renames are only planned.
    pub fix_names: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            follow_symlinks: false,
            fix_names: true,
        }
    }
}

/// Walks a directory tree, repairing file names and recording every entry.
pub struct TreeWalker<F: EntryFilter = AcceptAll, R: RenameFs = RealRenameFs> {
    rules: RuleSet,
    follow_symlinks: bool,
    filter: F,
    normalizer: NameNormalizer<R>,
}

impl TreeWalker {
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self {
            rules: RuleSet::new(options.max_path_length),
            follow_symlinks: options.follow_symlinks,
            filter: AcceptAll,
            normalizer: NameNormalizer::new(options.fix_names),
        }
    }
}

impl<F: EntryFilter, R: RenameFs> TreeWalker<F, R> {
    #[must_use]
    pub fn with_filter<G: EntryFilter>(self, filter: G) -> TreeWalker<G, R> {
        TreeWalker {
            rules: self.rules,
            follow_symlinks: self.follow_symlinks,
            filter,
            normalizer: self.normalizer,
        }
    }

    #[must_use]
    pub fn with_rename_fs<S: RenameFs>(self, fs: S) -> TreeWalker<F, S> {
        let apply = self.normalizer.applies_renames();
        TreeWalker {
            rules: self.rules,
            follow_symlinks: self.follow_symlinks,
            filter: self.filter,
            normalizer: NameNormalizer::with_fs(fs, apply),
        }
    }

    /// Scan the tree rooted at `start`.
    ///
    /// Directories are processed from an explicit stack rather than by
    /// recursion. Per-directory failures are collected in the report and the
    /// walk moves on to the next directory.
    ///
    /// # Errors
    /// Returns an error if `start` is not an absolute path.
    pub fn scan(&self, start: &Path, listener: &mut dyn ScanListener) -> Result<ScanReport> {
        if !start.is_absolute() {
            return Err(SyncGuardError::NotAbsolute {
                path: start.to_path_buf(),
            });
        }

        let mut walk = WalkState {
            root: start,
            report: ScanReport::new(start),
            visited: HashSet::new(),
            listener,
        };

        let mut pending = vec![start.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let subfolders = self.visit_directory(&dir, &mut walk);
            pending.extend(subfolders.into_iter().rev());
        }

        Ok(walk.report)
    }

    /// Record `dir` and its files, returning its subfolders in name order.
    fn visit_directory(&self, dir: &Path, walk: &mut WalkState<'_, '_>) -> Vec<PathBuf> {
        if self.follow_symlinks && !walk.first_visit(dir) {
            walk.fail(ScanFailure {
                path: dir.to_path_buf(),
                kind: FailureKind::SymlinkCycle,
                message: format!(
                    "Skipping '{}': directory already visited through a symlink",
                    dir.display()
                ),
            });
            return Vec::new();
        }

        let (parent, name) = split_folder_path(dir);
        let folder = EntryRecord::evaluate(EntryKind::Folder, name, parent, &self.rules, None);
        walk.listener.folder_entered(&folder);
        walk.report.entries.push(folder);

        let originals = match self.normalize_files(dir, walk) {
            Ok(originals) => originals,
            Err(e) => {
                walk.fail_listing(dir, &e);
                return Vec::new();
            }
        };

        let listing = match list_children(dir, self.follow_symlinks) {
            Ok(listing) => listing,
            Err(e) => {
                walk.fail_listing(dir, &e);
                return Vec::new();
            }
        };
        for failure in listing.failures {
            walk.fail(failure);
        }

        let mut subfolders = Vec::new();
        let mut file_count = 0;
        for child in listing.children {
            if !self.is_included(walk.root, &child.path) {
                continue;
            }
            match child.kind {
                ChildKind::File => {
                    let name = child.name_lossy();
                    let original = originals.get(&name).cloned();
                    let record =
                        EntryRecord::evaluate(EntryKind::File, name, dir, &self.rules, original);
                    walk.listener.file_recorded(&record);
                    walk.report.entries.push(record);
                    file_count += 1;
                }
                ChildKind::Directory => subfolders.push(child.path),
                ChildKind::Other => {}
            }
        }

        walk.listener.folder_finished(dir, subfolders.len(), file_count);
        subfolders
    }

    /// Normalize every file directly inside `dir`.
    ///
    /// Returns a map from each new name to the name it replaced.
    fn normalize_files(
        &self,
        dir: &Path,
        walk: &mut WalkState<'_, '_>,
    ) -> Result<HashMap<String, String>> {
        let listing = list_children(dir, self.follow_symlinks)?;
        let mut originals = HashMap::new();

        for child in listing.children {
            if child.kind != ChildKind::File || !self.is_included(walk.root, &child.path) {
                continue;
            }
            let Some(name) = child.name.to_str() else {
                continue;
            };
            let Some(rename) = self.normalizer.normalize_file(dir, name) else {
                continue;
            };

            if rename.status == RenameStatus::Renamed {
                originals.insert(rename.to.clone(), rename.from.clone());
            }
            walk.listener.rename_attempted(&rename);
            walk.report.renames.push(rename);
        }

        Ok(originals)
    }

    fn is_included(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.should_include(relative)
    }
}

struct WalkState<'a, 'l> {
    root: &'a Path,
    report: ScanReport,
    visited: HashSet<PathBuf>,
    listener: &'a mut (dyn ScanListener + 'l),
}

impl WalkState<'_, '_> {
    /// False if `dir` resolves to a directory that was already visited.
    fn first_visit(&mut self, dir: &Path) -> bool {
        dunce::canonicalize(dir).map_or(true, |canonical| self.visited.insert(canonical))
    }

    fn fail(&mut self, failure: ScanFailure) {
        self.listener.failure(&failure);
        self.report.failures.push(failure);
    }

    fn fail_listing(&mut self, dir: &Path, error: &SyncGuardError) {
        self.fail(ScanFailure {
            path: dir.to_path_buf(),
            kind: FailureKind::ListDirectory,
            message: error.to_string(),
        });
    }
}

/// Split a folder path into its parent and its own name.
///
/// A filesystem root has an empty name and is its own parent.
fn split_folder_path(dir: &Path) -> (&Path, String) {
    let name = match dir.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    };
    (dir.parent().unwrap_or(dir), name)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
