//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A one-line summary of the merge with colored counters
//! - Per-decision lines grouped by input file in verbose mode
//! - The merged constraints in dry-run mode

use crate::merge::MergeOutcome;
use crate::orchestrator::MergeReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    /// Short label for an outcome
    fn outcome_label(&self, outcome: &MergeOutcome) -> String {
        let label = match outcome {
            MergeOutcome::Added { .. } => "added",
            MergeOutcome::Discarded { .. } => "discarded",
            MergeOutcome::Replaced { .. } => "replaced",
        };
        if !self.color {
            return label.to_string();
        }
        match outcome {
            MergeOutcome::Added { .. } => label.green().to_string(),
            MergeOutcome::Discarded { .. } => label.dimmed().to_string(),
            MergeOutcome::Replaced { .. } => label.yellow().to_string(),
        }
    }

    /// Write every decision, grouped under the input it came from
    fn format_decisions(&self, report: &MergeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let width = report
            .decisions
            .iter()
            .map(|d| d.constraint.len())
            .max()
            .unwrap_or(0)
            .max(20);

        for (index, input) in report.inputs.iter().enumerate() {
            let path_display = input.path.display().to_string();
            if self.color {
                writeln!(
                    writer,
                    "{} {}",
                    path_display.bold(),
                    format!("({} constraint(s))", input.constraints).dimmed()
                )?;
            } else {
                writeln!(writer, "{} ({} constraint(s))", path_display, input.constraints)?;
            }

            for decision in report.decisions.iter().filter(|d| d.input == index) {
                let detail = match &decision.outcome {
                    MergeOutcome::Added { .. } => String::new(),
                    other => other.to_string(),
                };
                writeln!(
                    writer,
                    "  {:width$}  {:9}  {}",
                    decision.constraint,
                    self.outcome_label(&decision.outcome),
                    detail,
                    width = width
                )?;
            }
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write the summary line
    fn format_summary(&self, report: &MergeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        let target = if report.written {
            format!("wrote {}", report.output.display())
        } else {
            format!("{} not written", report.output.display())
        };
        let stats = &report.stats;

        if self.color {
            writeln!(
                writer,
                "{}Merged {} constraint(s) from {} file(s) into {} line(s): {} added, {} replaced, {} discarded ({})",
                prefix,
                stats.total(),
                report.inputs.len(),
                report.lines.len().to_string().bold(),
                stats.added.to_string().green(),
                stats.replaced.to_string().yellow(),
                stats.discarded.to_string().dimmed(),
                target
            )
        } else {
            writeln!(
                writer,
                "{}Merged {} constraint(s) from {} file(s) into {} line(s): {} added, {} replaced, {} discarded ({})",
                prefix,
                stats.total(),
                report.inputs.len(),
                report.lines.len(),
                stats.added,
                stats.replaced,
                stats.discarded,
                target
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &MergeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity.shows_decisions() {
            self.format_decisions(report, writer)?;
        }
        if self.verbosity.shows_summary() {
            self.format_summary(report, writer)?;
        }

        // A dry run is only useful if the merged result is shown
        if self.dry_run {
            if self.verbosity.shows_summary() {
                writeln!(writer)?;
            }
            for line in &report.lines {
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }
}
