use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What one worker recorded for its job. Written once, by that worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub index: usize,
    pub command: String,
    /// `None` when the process could not be spawned or died from a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl JobResult {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Results of a full run, one slot per job in job order.
///
/// A slot stays `None` if its worker never reported back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub results: Vec<Option<JobResult>>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// 0 when every slot is filled with a zero exit code, 1 otherwise.
    pub fn exit_status(&self) -> i32 {
        if self.failed_jobs().is_empty() { 0 } else { 1 }
    }

    /// Indices of jobs that failed or left no result.
    pub fn failed_jobs(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.as_ref().is_some_and(JobResult::succeeded))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
