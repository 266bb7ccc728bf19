use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Serialize;

use crate::path_utils::path_char_count;
use crate::rules::{RuleSet, Violation, non_permitted_chars, restricted_chars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => f.write_str("Folder"),
            Self::File => f.write_str("File"),
        }
    }
}

/// One visited file or folder together with everything wrong with its name.
///
/// Records are fully evaluated at construction and never change afterwards;
/// `full_path` keeps the path as it was when the entry was visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    kind: EntryKind,
    name: String,
    original_name: Option<String>,
    parent_path: PathBuf,
    full_path: PathBuf,
    path_length: usize,
    restricted_chars: IndexSet<char>,
    non_ascii_chars: IndexSet<char>,
    issues: Vec<Violation>,
}

impl EntryRecord {
    /// Build a record for `name` inside `parent_path` and run every rule on it.
    ///
    /// `original_name` is set for files that normalization renamed.
    #[must_use]
    pub fn evaluate(
        kind: EntryKind,
        name: impl Into<String>,
        parent_path: &Path,
        rules: &RuleSet,
        original_name: Option<String>,
    ) -> Self {
        let name = name.into();
        let full_path = parent_path.join(&name);
        let path_length = path_char_count(&full_path);
        let issues = rules.evaluate(kind, &name, original_name.as_deref(), path_length);

        Self {
            kind,
            restricted_chars: restricted_chars(&name),
            non_ascii_chars: non_permitted_chars(&name),
            name,
            original_name,
            parent_path: parent_path.to_path_buf(),
            full_path,
            path_length,
            issues,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    #[must_use]
    pub fn parent_path(&self) -> &Path {
        &self.parent_path
    }

    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    #[must_use]
    pub const fn path_length(&self) -> usize {
        self.path_length
    }

    #[must_use]
    pub const fn restricted_chars(&self) -> &IndexSet<char> {
        &self.restricted_chars
    }

    #[must_use]
    pub const fn non_ascii_chars(&self) -> &IndexSet<char> {
        &self.non_ascii_chars
    }

    #[must_use]
    pub fn issues(&self) -> &[Violation] {
        &self.issues
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Name used to identify the entry in reports.
    ///
    /// Folders are identified by their full path, files by their base name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::Folder => self.full_path.display().to_string(),
            EntryKind::File => self.name.clone(),
        }
    }

    /// Issue descriptions in stored order.
    #[must_use]
    pub fn issue_descriptions(&self) -> Vec<String> {
        self.issues
            .iter()
            .map(|issue| issue.describe(self.kind, &self.name))
            .collect()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
