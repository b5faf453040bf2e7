//! merge-package-versions - Debian dependency file merger
//!
//! Reads dependency files with one `package (op version, ...)` constraint per
//! line, keeps only the most restrictive constraint of every package and
//! writes the result, sorted, to the output file.

use clap::Parser;
use debver_merge::cli::CliArgs;
use debver_merge::orchestrator::{MergeConfig, Orchestrator};
use debver_merge::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_directive())),
        )
        .init();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Usage errors go to stdout
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "merge-package-versions".to_string());
    let config = match MergeConfig::from_cli(&args, &program) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, config: MergeConfig) -> anyhow::Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        output = %config.output.display(),
        inputs = config.inputs.len(),
        dry_run = config.dry_run,
        "starting merge"
    );

    let report = Orchestrator::new(config).run().await?;

    let output_config = OutputConfig::from_args(&args, io::stdout().is_terminal());
    let formatter = create_formatter(&output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
