use std::io::Write;

use crate::entry::EntryRecord;
use crate::error::Result;
use crate::normalizer::{RenameRecord, RenameStatus};
use crate::scanner::ScanReport;

use super::{ColorMode, OutputFormatter, ansi};

/// Human-readable scan report.
///
/// Each entry with issues is listed in traversal order, each issue followed by
/// the full path of the entry. Folders are identified by full path and files
/// by base name.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_renames(&self, renames: &[RenameRecord], output: &mut Vec<u8>) {
        if renames.is_empty() {
            return;
        }

        writeln!(output, "\n   [+] File name repairs:").ok();
        for rename in renames {
            let from = rename.from_path();
            match &rename.status {
                RenameStatus::Renamed => {
                    writeln!(
                        output,
                        "       > Renamed '{}' to '{}'",
                        from.display(),
                        rename.to
                    )
                    .ok();
                }
                RenameStatus::Planned => {
                    writeln!(
                        output,
                        "       > Would rename '{}' to '{}'",
                        from.display(),
                        rename.to
                    )
                    .ok();
                }
                RenameStatus::Failed(reason) => {
                    let line = format!("*** {reason}");
                    writeln!(output, "       > {}", self.colorize(&line, ansi::RED)).ok();
                }
            }
        }
    }

    fn format_entry(&self, entry: &EntryRecord, output: &mut Vec<u8>) {
        writeln!(
            output,
            "\n       {} '{}' requires fixing the following issue(s):",
            entry.kind(),
            entry.display_name()
        )
        .ok();

        let full_path = entry.full_path().display().to_string();
        for description in entry.issue_descriptions() {
            writeln!(output, "       > {}", self.colorize(&description, ansi::RED)).ok();
            writeln!(output, "       > Full path:").ok();
            writeln!(output, "       > {full_path}").ok();
        }
    }

    fn format_failures(&self, report: &ScanReport, output: &mut Vec<u8>) {
        if report.failures.is_empty() {
            return;
        }

        writeln!(
            output,
            "\n   [!] {} location(s) could not be scanned:",
            report.failures.len()
        )
        .ok();
        for failure in &report.failures {
            writeln!(
                output,
                "       > {}",
                self.colorize(&failure.message, ansi::YELLOW)
            )
            .ok();
        }
    }

    fn format_summary(&self, issue_count: usize) -> String {
        let color = if issue_count == 0 {
            ansi::GREEN
        } else {
            ansi::RED
        };
        let count = self.colorize(&issue_count.to_string(), color);
        format!("\n   [+] Done. A total of {count} entries found with issues.\n")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = Vec::new();

        self.format_renames(&report.renames, &mut output);
        self.format_failures(report, &mut output);

        writeln!(output, "\n   [+] Analysis results:").ok();
        let mut issue_count = 0;
        for entry in report.entries_with_issues() {
            self.format_entry(entry, &mut output);
            issue_count += 1;
        }

        writeln!(output, "{}", self.format_summary(issue_count)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
