//! Merge orchestrator for coordinating the entire merge workflow
//!
//! This module provides:
//! - Workflow coordination: read → parse → accumulate → write
//! - Concurrent reading and parsing of input files
//! - Deterministic accumulation in argument order
//! - Dry-run mode support

use crate::cli::CliArgs;
use crate::domain::IntervalSet;
use crate::error::{AppError, ConfigError, IoError};
use crate::merge::{Accumulator, MergeDecision, MergeStats};
use crate::parser::parse_deps;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings of a single merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// File the merged constraints are written to
    pub output: PathBuf,
    /// Files to merge, in precedence order
    pub inputs: Vec<PathBuf>,
    /// Compute the result without writing the output file
    pub dry_run: bool,
}

impl MergeConfig {
    /// Create a new configuration
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs,
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build a configuration from CLI arguments
    ///
    /// Fails with a usage error unless an output and at least one input are given.
    pub fn from_cli(args: &CliArgs, program: &str) -> Result<Self, ConfigError> {
        match (&args.output, args.inputs.is_empty()) {
            (Some(output), false) => {
                Ok(Self::new(output.clone(), args.inputs.clone()).with_dry_run(args.dry_run))
            }
            _ => Err(ConfigError::usage(program)),
        }
    }
}

/// Number of constraints read from one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSummary {
    pub path: PathBuf,
    pub constraints: usize,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Per-input constraint counts, in argument order
    pub inputs: Vec<InputSummary>,
    /// Output file path
    pub output: PathBuf,
    /// Every accumulator decision, in processing order
    pub decisions: Vec<MergeDecision>,
    /// Counters over the decisions
    pub stats: MergeStats,
    /// The merged constraints as written, sorted
    pub lines: Vec<String>,
    /// Whether the output file was written
    pub written: bool,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

/// Orchestrator for coordinating the merge workflow
pub struct Orchestrator {
    config: MergeConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Run the merge workflow
    ///
    /// Any read or parse error aborts the run before the output is touched.
    pub async fn run(&self) -> Result<MergeReport, AppError> {
        let parsed = self.read_inputs().await?;

        let mut accumulator = Accumulator::new();
        let mut decisions = Vec::new();
        let mut stats = MergeStats::default();
        let mut inputs = Vec::with_capacity(parsed.len());

        for (input, (path, sets)) in parsed.into_iter().enumerate() {
            info!(path = %path.display(), constraints = sets.len(), "merging input");
            inputs.push(InputSummary {
                path: path.clone(),
                constraints: sets.len(),
            });

            for set in sets {
                let constraint = set.formatted();
                let outcome = accumulator.insert(set);
                debug!(%constraint, %outcome, kept = outcome.is_kept(), "merge decision");
                stats.record(&outcome);
                decisions.push(MergeDecision {
                    input,
                    source: path.clone(),
                    constraint,
                    outcome,
                });
            }
        }

        let lines = accumulator.formatted_lines();
        let written = if self.config.dry_run {
            info!(output = %self.config.output.display(), "dry run, output not written");
            false
        } else {
            let rendered = accumulator.render();
            tokio::fs::write(&self.config.output, rendered)
                .await
                .map_err(|e| IoError::write(&self.config.output, e))?;
            info!(
                output = %self.config.output.display(),
                lines = lines.len(),
                "wrote merged constraints"
            );
            true
        };

        Ok(MergeReport {
            inputs,
            output: self.config.output.clone(),
            decisions,
            stats,
            lines,
            written,
            dry_run: self.config.dry_run,
        })
    }

    /// Read and parse every input concurrently, returning them in argument order
    ///
    /// When several inputs fail, the error of the earliest one is returned.
    async fn read_inputs(&self) -> Result<Vec<(PathBuf, Vec<IntervalSet>)>, AppError> {
        let handles: Vec<_> = self
            .config
            .inputs
            .iter()
            .cloned()
            .map(|path| {
                tokio::spawn(async move {
                    let sets = load_input(&path).await?;
                    Ok::<_, AppError>((path, sets))
                })
            })
            .collect();

        let mut parsed = Vec::with_capacity(handles.len());
        for (path, handle) in self.config.inputs.iter().zip(handles) {
            let loaded = handle
                .await
                .map_err(|e| IoError::task(path, e.to_string()))??;
            parsed.push(loaded);
        }
        Ok(parsed)
    }
}

/// Read one deps file and parse its constraints
async fn load_input(path: &Path) -> Result<Vec<IntervalSet>, AppError> {
    debug!(path = %path.display(), "reading input");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| IoError::read(path, e))?;
    Ok(parse_deps(path, &content)?)
}
