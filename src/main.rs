mod cli;
mod config;
mod error;
mod git;
mod jobs;
mod orchestrator;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::FreezeConfig;
use orchestrator::JobOrchestrator;
use ui::RunReport;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(cli).await;
    if let Err(e) = &outcome {
        tracing::error!("{e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

// Plain message lines on stderr; RUST_LOG wins over --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(false)
        .without_time()
        .init();
}

/// Process exit status: 0 only for a run that reported 0.
fn exit_status(outcome: &Result<i32>) -> u8 {
    match outcome {
        Ok(0) => 0,
        _ => 1,
    }
}

/// Resolve the repository root from `start` and load its configuration.
fn prepare(start: &Path, tool: Option<String>) -> Result<(PathBuf, FreezeConfig)> {
    let root = git::repo_root(start).context("failed to determine repository root")?;
    let config = FreezeConfig::load(&root)
        .and_then(|c| c.with_tool(tool))
        .context("failed to load configuration")?;
    Ok((root, config))
}

async fn run(cli: Cli) -> Result<i32> {
    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let (root, config) = prepare(&start, cli.tool)?;

    if cli.dry_run {
        return Ok(dry_run(&root, &config.tool));
    }

    let summary = JobOrchestrator::default()
        .freeze(&root, &config.tool)
        .await
        .context("failed to determine repository root")?;

    if cli.json {
        RunReport::print_json(&summary)?;
    } else {
        RunReport::default().print(&summary);
    }
    Ok(summary.exit_status())
}

fn dry_run(root: &Path, tool: &str) -> i32 {
    tracing::info!("would run in {}", root.display());
    for job in jobs::freeze_jobs(tool) {
        tracing::info!("+ {}", job.display());
    }
    0
}
