//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the merge summary and merged lines
//! - Per-decision details in verbose mode

use crate::merge::{MergeDecision, MergeStats};
use crate::orchestrator::MergeReport;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Output file path
    output: String,
    /// Whether the output file was written
    written: bool,
    /// Per-input constraint counts
    inputs: Vec<JsonInput>,
    /// Summary statistics
    summary: &'a MergeStats,
    /// Merged constraints, sorted
    lines: &'a [String],
    /// Every merge decision (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    decisions: Vec<&'a MergeDecision>,
}

/// JSON representation of an input file
#[derive(Serialize)]
struct JsonInput {
    /// Path to the input file
    path: String,
    /// Number of constraints read
    constraints: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &MergeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let decisions = if self.verbosity.shows_decisions() {
            report.decisions.iter().collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            dry_run: report.dry_run,
            output: report.output.display().to_string(),
            written: report.written,
            inputs: report
                .inputs
                .iter()
                .map(|input| JsonInput {
                    path: input.path.display().to_string(),
                    constraints: input.constraints,
                })
                .collect(),
            summary: &report.stats,
            lines: &report.lines,
            decisions,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
