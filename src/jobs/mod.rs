mod job;
mod result;

pub use job::{DEFAULT_TOOL, Job, freeze_jobs};
pub use result::{JobResult, RunSummary};
