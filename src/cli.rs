//! CLI argument parsing module for merge-package-versions

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Merge Debian dependency files, keeping the most restrictive constraints
#[derive(Parser, Debug, Clone)]
#[command(
    name = "merge-package-versions",
    version,
    about = "Merge Debian package dependency files"
)]
pub struct CliArgs {
    /// File the merged constraints are written to (overwritten)
    #[arg(value_name = "OUTPUT_DEPS_FILE")]
    pub output: Option<PathBuf>,

    /// Dependency files to merge, one constraint per line
    #[arg(value_name = "INPUT_DEPS_FILE")]
    pub inputs: Vec<PathBuf>,

    // General options
    /// Dry run mode - show the merged result without writing the output file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no summary output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Print the run summary in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Check that the flags can be used together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Default tracing filter directive for these flags
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
