use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use chrono::Utc;
use tokio::process::Command;

use crate::error::Result;
use crate::git::repo_root;
use crate::jobs::{Job, JobResult, RunSummary, freeze_jobs};

/// Captured result of one finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Executes a job to completion. The seam between the orchestrator and the OS.
pub trait CommandRunner: Send + Sync + 'static {
    fn run(&self, job: &Job, cwd: &Path) -> impl Future<Output = io::Result<CommandOutput>> + Send;
}

/// Runs jobs as real subprocesses with captured stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, job: &Job, cwd: &Path) -> io::Result<CommandOutput> {
        let output = Command::new(job.program())
            .args(job.arguments())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Runs every job concurrently, one worker per job, and collects their exit codes.
pub struct JobOrchestrator<R: CommandRunner = ProcessRunner> {
    runner: Arc<R>,
}

impl Default for JobOrchestrator<ProcessRunner> {
    fn default() -> Self {
        Self::new(ProcessRunner)
    }
}

impl<R: CommandRunner> JobOrchestrator<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner: Arc::new(runner),
        }
    }

    /// Resolve the repository root from `start`, then run the three freeze jobs there.
    ///
    /// Fails before launching anything if `start` is not inside a git working tree.
    pub async fn freeze(&self, start: &Path, tool: &str) -> Result<RunSummary> {
        let root = repo_root(start)?;
        tracing::debug!(root = %root.display(), "resolved repository root");
        Ok(self.run_all(&root, &freeze_jobs(tool)).await)
    }

    /// Run `jobs` concurrently with `root` as their working directory.
    ///
    /// Every job runs to completion regardless of the others. Results are only
    /// inspected after all workers have been joined; a worker that panics leaves
    /// its slot empty.
    pub async fn run_all(&self, root: &Path, jobs: &[Job]) -> RunSummary {
        let started_at = Utc::now();

        let handles: Vec<_> = jobs
            .iter()
            .cloned()
            .map(|job| {
                tokio::spawn(run_worker(
                    Arc::clone(&self.runner),
                    job,
                    root.to_path_buf(),
                ))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(result) => results.push(Some(result)),
                Err(e) => {
                    tracing::error!(job = index, error = %e, "worker exited without a result");
                    results.push(None);
                }
            }
        }

        RunSummary {
            results,
            started_at,
            finished_at: Utc::now(),
        }
    }
}

async fn run_worker<R: CommandRunner>(runner: Arc<R>, job: Job, cwd: PathBuf) -> JobResult {
    let command = job.display();
    tracing::info!("+ {command}");

    let started_at = Utc::now();
    let (exit_code, stdout, stderr) = match runner.run(&job, &cwd).await {
        Ok(output) => (
            output.exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ),
        Err(e) => {
            tracing::error!(job = job.index, error = %e, "failed to start {}", job.program());
            (None, String::new(), e.to_string())
        }
    };
    let finished_at = Utc::now();

    match exit_code {
        Some(code) => tracing::info!("+ {command} returned {code}"),
        None => tracing::info!("+ {command} returned no exit code"),
    }
    if exit_code != Some(0) {
        tracing::info!("stdout: {stdout}\nstderr: {stderr}");
    }

    JobResult {
        index: job.index,
        command,
        exit_code,
        stdout,
        stderr,
        started_at,
        finished_at,
        duration_ms: (finished_at - started_at).num_milliseconds(),
    }
}
