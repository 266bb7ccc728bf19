use serde::Serialize;

use crate::entry::{EntryKind, EntryRecord};
use crate::error::Result;
use crate::normalizer::RenameRecord;
use crate::rules::Violation;
use crate::scanner::{ScanFailure, ScanReport};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: String,
    summary: Summary,
    entries: Vec<EntryResult<'a>>,
    renames: &'a [RenameRecord],
    failures: &'a [ScanFailure],
}

#[derive(Serialize)]
struct Summary {
    total_entries: usize,
    entries_with_issues: usize,
    renamed: usize,
    failures: usize,
}

#[derive(Serialize)]
struct EntryResult<'a> {
    kind: EntryKind,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_name: Option<&'a str>,
    full_path: String,
    path_length: usize,
    issues: Vec<IssueResult<'a>>,
}

#[derive(Serialize)]
struct IssueResult<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    message: String,
}

fn convert_entry(entry: &EntryRecord) -> EntryResult<'_> {
    EntryResult {
        kind: entry.kind(),
        name: entry.name(),
        original_name: entry.original_name(),
        full_path: entry.full_path().display().to_string(),
        path_length: entry.path_length(),
        issues: entry
            .issues()
            .iter()
            .map(|violation| IssueResult {
                violation,
                message: violation.describe(entry.kind(), entry.name()),
            })
            .collect(),
    }
}

impl OutputFormatter for JsonFormatter {
    /// Only entries with issues are listed; the summary counts every entry.
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            root: report.root.display().to_string(),
            summary: Summary {
                total_entries: report.entries.len(),
                entries_with_issues: report.issue_count(),
                renamed: report.renamed_count(),
                failures: report.failures.len(),
            },
            entries: report.entries_with_issues().map(convert_entry).collect(),
            renames: &report.renames,
            failures: &report.failures,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
