use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner counting visited entries during a scan.
///
/// Draws to stderr, and only when stderr is a TTY and `hidden` is false.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(hidden: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(hidden, is_tty)
    }

    fn new_with_visibility(hidden: bool, is_tty: bool) -> Self {
        let progress_bar = if hidden || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_spinner()
        };
        Self { progress_bar }
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning... {pos} entries ({msg})")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Count one more entry. `current` is shown next to the counter.
    pub fn inc(&self, current: &str) {
        self.progress_bar.inc(1);
        self.progress_bar.set_message(current.to_string());
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Run `f` with the spinner cleared so printed lines do not interleave with it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
