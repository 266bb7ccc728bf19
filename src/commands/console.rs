use std::io::{Stderr, Write};
use std::path::Path;

use crate::entry::EntryRecord;
use crate::normalizer::{RenameRecord, RenameStatus};
use crate::output::{ColorMode, ErrorOutput, ScanProgress};
use crate::scanner::{ScanFailure, ScanListener};

/// Reports scan events on the console.
///
/// Rename and listing failures are always written. Folder and file progress
/// lines are written only in verbose mode; otherwise the spinner counts entries.
pub struct ConsoleListener<W: Write = Stderr> {
    writer: W,
    verbose: bool,
    quiet: bool,
    errors: ErrorOutput,
    progress: ScanProgress,
}

impl ConsoleListener<Stderr> {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, mode: ColorMode) -> Self {
        Self::with_writer(
            std::io::stderr(),
            verbose,
            quiet,
            ErrorOutput::new(mode),
            ScanProgress::new(verbose || quiet),
        )
    }
}

impl<W: Write> ConsoleListener<W> {
    pub const fn with_writer(
        writer: W,
        verbose: bool,
        quiet: bool,
        errors: ErrorOutput,
        progress: ScanProgress,
    ) -> Self {
        Self {
            writer,
            verbose,
            quiet,
            errors,
            progress,
        }
    }

    /// Announce the scan root. Silent in quiet mode.
    pub fn started(&mut self, root: &Path) {
        if self.verbose {
            self.line("   [+] Verbose mode active.");
        }
        if !self.quiet {
            self.line(&format!("   [+] Working folder: '{}'\n", root.display()));
        }
    }

    /// Clear the spinner and hand back the writer.
    pub fn finish(self) -> W {
        self.progress.finish();
        self.writer
    }

    fn line(&mut self, text: &str) {
        let writer = &mut self.writer;
        self.progress.suspend(|| {
            let _ = writeln!(writer, "{text}");
        });
    }
}

impl<W: Write> ScanListener for ConsoleListener<W> {
    fn folder_entered(&mut self, folder: &EntryRecord) {
        self.progress.inc(folder.name());
        if self.verbose {
            self.line(&format!(
                "   [+] Processing folder '{}' in '{}'",
                folder.name(),
                folder.parent_path().display()
            ));
            self.line(&format!("        > Added folder '{}'", folder.name()));
        }
    }

    fn file_recorded(&mut self, file: &EntryRecord) {
        self.progress.inc(file.name());
        if self.verbose {
            self.line(&format!(
                "        > Processed file {}",
                file.full_path().display()
            ));
        }
    }

    fn folder_finished(&mut self, _folder: &Path, subfolders: usize, files: usize) {
        if self.verbose {
            self.line(&format!(
                "       Folder contains {subfolders} subfolders and {files} files"
            ));
        }
    }

    fn rename_attempted(&mut self, rename: &RenameRecord) {
        match &rename.status {
            RenameStatus::Failed(reason) => {
                let (writer, errors) = (&mut self.writer, self.errors);
                self.progress.suspend(|| {
                    errors.write_error(writer, "Rename error", reason);
                });
            }
            RenameStatus::Renamed if self.verbose => self.line(&format!(
                "        > Renamed '{}' to '{}'",
                rename.from, rename.to
            )),
            RenameStatus::Planned if self.verbose => self.line(&format!(
                "        > Would rename '{}' to '{}'",
                rename.from, rename.to
            )),
            RenameStatus::Renamed | RenameStatus::Planned => {}
        }
    }

    fn failure(&mut self, failure: &ScanFailure) {
        let (writer, errors) = (&mut self.writer, self.errors);
        self.progress.suspend(|| {
            errors.write_warning(writer, &failure.message);
        });
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
