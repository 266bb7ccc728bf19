//! Automatic repair of file names before they are validated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SyncGuardError;
use crate::path_utils::split_extension;

/// Look-alike and typographic characters replaced during normalization.
///
/// Keys never overlap, so the order replacements are applied in is irrelevant.
pub const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{0430}', "a"),   // Cyrillic small a
    ('\u{2013}', "-"),   // en dash
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{0491}', "r"),   // Cyrillic ghe with upturn
    ('\u{2026}', "..."), // horizontal ellipsis
    ('\u{0130}', "I"),   // Latin capital I with dot above
    ('\u{2014}', "-"),   // em dash
    ('\u{0405}', "S"),   // Cyrillic capital dze
];

/// Compute the repaired form of a file name.
///
/// Trims surrounding whitespace, applies [`SUBSTITUTIONS`] and strips spaces
/// between the stem and the extension. Normalizing an already normalized name
/// returns it unchanged.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.trim().to_string();

    for (from, to) in SUBSTITUTIONS {
        if normalized.contains(*from) {
            normalized = normalized.replace(*from, to);
        }
    }

    let (stem, ext) = split_extension(&normalized);
    if stem.ends_with(' ') {
        normalized = format!("{}{ext}", stem.trim_end_matches(' '));
    }

    normalized
}

fn is_usable_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".."
}

/// Filesystem operations the normalizer needs (for testability).
pub trait RenameFs {
    /// Whether anything (file, folder or link) already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Rename `from` to `to`.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealRenameFs;

impl RenameFs for RealRenameFs {
    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        std::fs::rename(from, to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum RenameStatus {
    Renamed,
    /// Dry run: the rename was computed but not performed.
    Planned,
    Failed(String),
}

/// One rename the normalizer attempted, planned or skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    pub directory: PathBuf,
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub status: RenameStatus,
}

impl RenameRecord {
    #[must_use]
    pub fn from_path(&self) -> PathBuf {
        self.directory.join(&self.from)
    }

    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        self.directory.join(&self.to)
    }

    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        matches!(self.status, RenameStatus::Renamed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, RenameStatus::Failed(_))
    }
}

/// Applies [`normalize_name`] to files on disk.
#[derive(Debug)]
pub struct NameNormalizer<F: RenameFs = RealRenameFs> {
    fs: F,
    apply: bool,
}

impl Default for NameNormalizer<RealRenameFs> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NameNormalizer<RealRenameFs> {
    /// With `apply` false renames are only planned, never performed.
    #[must_use]
    pub const fn new(apply: bool) -> Self {
        Self {
            fs: RealRenameFs,
            apply,
        }
    }
}

impl<F: RenameFs> NameNormalizer<F> {
    #[must_use]
    pub const fn with_fs(fs: F, apply: bool) -> Self {
        Self { fs, apply }
    }

    #[must_use]
    pub const fn applies_renames(&self) -> bool {
        self.apply
    }

    /// Normalize the file `name` inside `directory`.
    ///
    /// Returns `None` when the name is already normalized. Failures are
    /// returned as a [`RenameStatus::Failed`] record, never as an error, so the
    /// caller can keep scanning.
    pub fn normalize_file(&self, directory: &Path, name: &str) -> Option<RenameRecord> {
        let candidate = normalize_name(name);
        if candidate == name {
            return None;
        }

        let status = match self.try_rename(directory, name, &candidate) {
            Ok(status) => status,
            Err(e) => RenameStatus::Failed(e.to_string()),
        };

        Some(RenameRecord {
            directory: directory.to_path_buf(),
            from: name.to_string(),
            to: candidate,
            status,
        })
    }

    fn try_rename(
        &self,
        directory: &Path,
        from: &str,
        to: &str,
    ) -> Result<RenameStatus, SyncGuardError> {
        let from_path = directory.join(from);

        if !is_usable_name(to) {
            return Err(SyncGuardError::InvalidName {
                from: from_path,
                to: to.to_string(),
            });
        }

        if !self.apply {
            return Ok(RenameStatus::Planned);
        }

        let to_path = directory.join(to);
        if self.fs.exists(&to_path) {
            return Err(SyncGuardError::RenameTargetExists {
                from: from_path,
                to: to_path,
            });
        }

        self.fs
            .rename(&from_path, &to_path)
            .map_err(|source| SyncGuardError::Rename {
                from: from_path,
                to: to_path,
                source,
            })?;

        Ok(RenameStatus::Renamed)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
