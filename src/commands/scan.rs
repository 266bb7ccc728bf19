use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::SyncGuardError;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::rules::DEFAULT_MAX_PATH_LENGTH;
use crate::scanner::{ExcludeFilter, ScanReport, TreeWalker};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::ConsoleListener;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color))
                .print_error(e.error_type(), &e.to_string());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load config, walk the tree, print the report and pick the exit code.
///
/// # Errors
/// Returns an error for configuration problems, an unusable start path or
/// a failure writing the report. Problems inside the tree are not errors.
pub fn run_scan_impl(cli: &Cli) -> crate::Result<i32> {
    let color_mode = color_choice_to_mode(cli.color);

    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli, &ErrorOutput::new(color_mode));

    // 3. Resolve and check the start folder
    let start = resolve_start_path(cli.path.as_deref())?;

    // 4. Walk the tree
    let filter = ExcludeFilter::new(&config.exclude.patterns)?;
    let walker = TreeWalker::new(config.scan_options()).with_filter(filter);
    let mut listener = ConsoleListener::new(cli.verbose, cli.quiet, color_mode);
    listener.started(&start);
    let report = walker.scan(&start, &mut listener);
    listener.finish();
    let report = report?;

    // 5. Format and write output
    let output = format_output(cli.format, &report, color_mode)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    if cli.strict && report.has_issues() {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli, errors: &ErrorOutput) {
    if let Some(raw) = cli.max_length.as_deref() {
        config.scan.max_path_length = parse_max_length(raw).unwrap_or_else(|| {
            errors.print_warning(&format!(
                "Invalid length '{raw}', reset to {DEFAULT_MAX_PATH_LENGTH}"
            ));
            DEFAULT_MAX_PATH_LENGTH
        });
    }

    if cli.follow_symlinks {
        config.scan.follow_symlinks = true;
    }

    if cli.no_fix {
        config.scan.fix_names = false;
    }

    config.exclude.patterns.extend(cli.exclude.iter().cloned());
}

/// Parse a `--max-length` value. Zero and non-numbers are rejected.
#[must_use]
pub fn parse_max_length(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

fn resolve_start_path(path: Option<&Path>) -> crate::Result<PathBuf> {
    let start = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !start.is_absolute() {
        return Err(SyncGuardError::NotAbsolute { path: start });
    }
    if !start.is_dir() {
        return Err(SyncGuardError::NotADirectory { path: start });
    }
    Ok(start)
}

fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
