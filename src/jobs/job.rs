use serde::{Deserialize, Serialize};

/// Locking tool used when neither config nor CLI names one.
pub const DEFAULT_TOOL: &str = "pip-compile";

/// Flags shared by every invocation of the locking tool.
pub const BASE_FLAGS: &[&str] = &["--no-header", "--no-annotate", "-q"];

/// Input files and output file for each frozen requirements set, in job order.
const FREEZE_TABLE: &[(&[&str], &str)] = &[
    (&["requirements-base.txt"], "requirements-frozen.txt"),
    (&["requirements-dev.txt"], "requirements-dev-only-frozen.txt"),
    (
        &["requirements-base.txt", "requirements-dev.txt"],
        "requirements-dev-frozen.txt",
    ),
];

/// One invocation of the locking tool.
///
/// `args[0]` is the program; the remaining tokens are passed to it as
/// discrete arguments, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub index: usize,
    pub args: Vec<String>,
}

impl Job {
    pub fn new(index: usize, args: Vec<String>) -> Self {
        Self { index, args }
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }

    /// Everything after the program.
    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    /// Space-joined command line, for log output only.
    pub fn display(&self) -> String {
        self.args.join(" ")
    }
}

/// Builds the three pip-compile jobs: base, dev-only and base+dev.
pub fn freeze_jobs(tool: &str) -> Vec<Job> {
    FREEZE_TABLE
        .iter()
        .enumerate()
        .map(|(index, (inputs, output))| {
            let mut args = Vec::with_capacity(BASE_FLAGS.len() + inputs.len() + 3);
            args.push(tool.to_string());
            args.extend(BASE_FLAGS.iter().map(|f| f.to_string()));
            args.extend(inputs.iter().map(|f| f.to_string()));
            args.push("-o".to_string());
            args.push(output.to_string());
            Job::new(index, args)
        })
        .collect()
}
