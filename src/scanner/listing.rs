use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FailureKind, ScanFailure};
use crate::error::{Result, SyncGuardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    File,
    Directory,
    /// Unfollowed symlinks, sockets, devices and the like.
    Other,
}

/// A direct child of a listed directory.
#[derive(Debug, Clone)]
pub struct Child {
    pub name: OsString,
    pub path: PathBuf,
    pub kind: ChildKind,
}

impl Child {
    fn from_entry(entry: &walkdir::DirEntry) -> Self {
        let file_type = entry.file_type();
        let kind = if file_type.is_file() {
            ChildKind::File
        } else if file_type.is_dir() {
            ChildKind::Directory
        } else {
            ChildKind::Other
        };

        Self {
            name: entry.file_name().to_os_string(),
            path: entry.path().to_path_buf(),
            kind,
        }
    }

    #[must_use]
    pub fn name_lossy(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Children of one directory, sorted by name.
#[derive(Debug, Default)]
pub struct Listing {
    pub children: Vec<Child>,
    /// Entries that could not be read; the rest of the listing is still usable.
    pub failures: Vec<ScanFailure>,
}

/// List the direct children of `dir`, sorted by file name.
///
/// With `follow_links` set, symlinks report the type of their target;
/// otherwise they are listed as [`ChildKind::Other`].
///
/// # Errors
/// Returns an error if `dir` itself cannot be read.
pub fn list_children(dir: &Path, follow_links: bool) -> Result<Listing> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(follow_links)
        .sort_by_file_name();

    let mut listing = Listing::default();
    for item in walker {
        match item {
            Ok(entry) => listing.children.push(Child::from_entry(&entry)),
            Err(source) if source.depth() == 0 => {
                return Err(SyncGuardError::ListDirectory {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(source) => listing.failures.push(entry_failure(dir, &source)),
        }
    }

    Ok(listing)
}

fn entry_failure(dir: &Path, error: &walkdir::Error) -> ScanFailure {
    let path = error.path().unwrap_or(dir).to_path_buf();
    let kind = if error.loop_ancestor().is_some() {
        FailureKind::SymlinkCycle
    } else {
        FailureKind::ReadEntry
    };
    ScanFailure {
        message: format!("Unable to read '{}': {error}", path.display()),
        path,
        kind,
    }
}
