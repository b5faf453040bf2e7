//! Output formatting for merge reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::cli::CliArgs;
use crate::orchestrator::MergeReport;
use std::io::Write;

/// How the merge report is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Summary line, optionally with decisions and the merged lines
    Text,
    /// One JSON document
    Json,
}

/// How much of a merge run is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Nothing but the merged lines of a dry run
    Quiet,
    /// The summary line
    Normal,
    /// The summary plus every accumulator decision
    Verbose,
}

impl Verbosity {
    /// `--quiet` and `--verbose` are rejected together by `CliArgs::validate`
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn shows_summary(self) -> bool {
        self != Verbosity::Quiet
    }

    pub fn shows_decisions(self) -> bool {
        self == Verbosity::Verbose
    }
}

/// Settings for reporting a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: ReportFormat,
    pub verbosity: Verbosity,
    /// The merged lines are printed instead of written
    pub dry_run: bool,
    pub color: bool,
}

impl OutputConfig {
    /// Report settings for a command line, colored only if `color` is set
    pub fn from_args(args: &CliArgs, color: bool) -> Self {
        Self {
            format: if args.json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
            verbosity: Verbosity::from_flags(args.verbose, args.quiet),
            dry_run: args.dry_run,
            color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the merge report
    fn format(&self, report: &MergeReport, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create the formatter for a report format
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        ReportFormat::Text => Box::new(TextFormatter::new(
            config.verbosity,
            config.dry_run,
            config.color,
        )),
        ReportFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
    }
}
