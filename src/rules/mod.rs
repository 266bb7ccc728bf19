//! Naming and length rules enforced by the sync service.
//!
//! Every check here is pure: it inspects a name (and a precomputed path
//! length) and reports which rules are broken.

mod charset;

pub use charset::{
    EXTRA_ALLOWED_CHARS, RESTRICTED_CHARS, is_permitted, non_permitted_chars, restricted_chars,
};

use serde::Serialize;

use crate::entry::EntryKind;
use crate::path_utils::split_extension;

/// Default maximum full path length, in characters.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 260;

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    RestrictedChars { chars: Vec<char> },
    NonPermittedChars { chars: Vec<char> },
    /// Folder name ends with a space.
    TrailingSpace,
    /// File stem ends with a space. `name` is the name the check ran against.
    SpaceBeforeExtension { name: String },
    PathTooLong { length: usize, limit: usize },
}

impl Violation {
    /// Human-readable issue line for an entry of `kind` called `name`.
    #[must_use]
    pub fn describe(&self, kind: EntryKind, name: &str) -> String {
        match self {
            Self::RestrictedChars { chars } => format!(
                "{kind} contains the following restricted characters: {}",
                join_chars(chars)
            ),
            Self::NonPermittedChars { chars } => format!(
                "{kind} contains the following non-ascii characters: {}",
                join_chars(chars)
            ),
            Self::TrailingSpace => format!("{kind} {name} ends with a space"),
            Self::SpaceBeforeExtension { name } => format!(
                "{kind} {name} has a space at the end of the file name, before the extension"
            ),
            Self::PathTooLong { length, limit } => match kind {
                EntryKind::Folder => {
                    format!("{kind} is longer than {limit} characters ({length} to be specific)")
                }
                EntryKind::File => format!(
                    "Full path to {kind} is longer than {limit} characters ({length} to be specific)"
                ),
            },
        }
    }
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn has_trailing_space(name: &str) -> bool {
    name.ends_with(' ')
}

/// True when the part before the extension ends with a space, e.g. `"report .pdf"`.
#[must_use]
pub fn has_space_before_extension(name: &str) -> bool {
    split_extension(name).0.ends_with(' ')
}

/// The boundary is exclusive: a path exactly `limit` characters long passes.
#[must_use]
pub const fn exceeds_path_length(length: usize, limit: usize) -> bool {
    length > limit
}

/// Evaluates every rule for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    max_path_length: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PATH_LENGTH)
    }
}

impl RuleSet {
    #[must_use]
    pub const fn new(max_path_length: usize) -> Self {
        Self { max_path_length }
    }

    #[must_use]
    pub const fn max_path_length(&self) -> usize {
        self.max_path_length
    }

    /// Return all violations for an entry, in reporting order.
    ///
    /// `original_name` is the file name before normalization renamed it. The
    /// space-before-extension check runs against it so a repaired file still
    /// reports what was wrong with it.
    #[must_use]
    pub fn evaluate(
        &self,
        kind: EntryKind,
        name: &str,
        original_name: Option<&str>,
        path_length: usize,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        let restricted = restricted_chars(name);
        if !restricted.is_empty() {
            violations.push(Violation::RestrictedChars {
                chars: restricted.into_iter().collect(),
            });
        }

        let non_permitted = non_permitted_chars(name);
        if !non_permitted.is_empty() {
            violations.push(Violation::NonPermittedChars {
                chars: non_permitted.into_iter().collect(),
            });
        }

        match kind {
            EntryKind::Folder => {
                if has_trailing_space(name) {
                    violations.push(Violation::TrailingSpace);
                }
            }
            EntryKind::File => {
                let checked = original_name.unwrap_or(name);
                if has_space_before_extension(checked) {
                    violations.push(Violation::SpaceBeforeExtension {
                        name: checked.to_string(),
                    });
                }
            }
        }

        if exceeds_path_length(path_length, self.max_path_length) {
            violations.push(Violation::PathTooLong {
                length: path_length,
                limit: self.max_path_length,
            });
        }

        violations
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
