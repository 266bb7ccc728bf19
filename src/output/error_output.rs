//! Error and warning lines on stderr.
//!
//! Format: `✖ Error Type: message` / `⚠ Warning: message`

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// Error output formatter with color support.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color, see https://no-color.org
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, error_type: &str, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    /// Writes an error to `w`.
    pub fn write_error<W: Write>(&self, w: &mut W, error_type: &str, message: &str) {
        self.write_message(w, Severity::Error, error_type, message);
    }

    /// Writes a warning to `w`.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        self.write_message(w, Severity::Warning, "Warning", message);
    }

    fn write_message<W: Write>(&self, w: &mut W, severity: Severity, label: &str, message: &str) {
        let (icon, color) = match severity {
            Severity::Error => ("✖", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
        };
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{color}{icon} {label}:{} {message}",
                ansi::BOLD,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{icon} {label}: {message}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
