//! Public and internal types for the ppdfgrep API and pipeline.

use std::path::PathBuf;

use crate::utils::config::DEFAULT_TOOL;

/// One file queued for searching. `index` is its position in discovery order and the output sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    pub index: usize,
    pub path: PathBuf,
}

/// How the search tool finished for one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit 0: stdout holds matches.
    Success,
    /// Exit 1: nothing matched. Not a failure.
    NoMatch,
    /// Exit >= 2, killed by a signal, or the tool could not be run.
    Error,
}

impl ExitStatus {
    /// Map a process exit code. `None` (terminated by signal) is an error.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ExitStatus::Success,
            Some(1) => ExitStatus::NoMatch,
            _ => ExitStatus::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExitStatus::Error)
    }
}

/// Terminal result of one search task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: Vec<u8>,
    pub status: ExitStatus,
}

impl Outcome {
    pub fn new(output: Vec<u8>, status: ExitStatus) -> Self {
        Self { output, status }
    }

    /// Failed search; output is never trusted on error.
    pub fn error() -> Self {
        Self::new(Vec::new(), ExitStatus::Error)
    }

    pub fn no_match() -> Self {
        Self::new(Vec::new(), ExitStatus::NoMatch)
    }
}

/// Whole-run status: failed iff any outcome was [`ExitStatus::Error`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AggregateStatus {
    #[default]
    Clean,
    Failed,
}

impl AggregateStatus {
    /// Fold one task's status in.
    pub fn record(&mut self, status: ExitStatus) {
        if status.is_error() {
            *self = AggregateStatus::Failed;
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AggregateStatus::Failed)
    }

    /// Process exit code: 0 clean, 1 failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            AggregateStatus::Clean => 0,
            AggregateStatus::Failed => 1,
        }
    }
}

/// A path the walk could not visit, with the reason.
pub type SkippedPath = (PathBuf, String);

/// Result of a full [`run_search`](crate::pipeline::run_search).
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files classified as PDF and searched.
    pub candidates: usize,
    pub bytes_written: u64,
    pub status: AggregateStatus,
    pub skipped: Vec<SkippedPath>,
}

/// Full options (CLI, config file and library).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Search executable. Resolved through `$PATH` when not a path.
    pub tool: PathBuf,
    /// Descend into subdirectories of directory roots.
    pub recursive: bool,
    /// Pass `-i` to the tool.
    pub ignore_case: bool,
    /// Pass `-H` to the tool.
    pub with_filename: bool,
    /// Pass `-n` to the tool.
    pub page_number: bool,
    /// Extra tool arguments, passed verbatim after the flags above.
    pub tool_args: Vec<String>,
    /// Override the concurrency budget. When None, host parallelism capped by the FD limit.
    pub num_threads: Option<usize>,
    /// Debug logging, skipped-path listing and progress counter.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
            recursive: false,
            ignore_case: false,
            with_filename: false,
            page_number: false,
            tool_args: Vec::new(),
            num_threads: None,
            verbose: false,
        }
    }
}

impl Opts {
    /// Flags for the tool in a fixed order: `-i`, `-H`, `-n`, then `tool_args`.
    pub fn tool_flags(&self) -> Vec<String> {
        let mut flags = Vec::with_capacity(3 + self.tool_args.len());
        if self.ignore_case {
            flags.push("-i".to_string());
        }
        if self.with_filename {
            flags.push("-H".to_string());
        }
        if self.page_number {
            flags.push("-n".to_string());
        }
        flags.extend(self.tool_args.iter().cloned());
        flags
    }
}
