//! The search seam: one call per candidate file, returning its [`Outcome`].

use log::{debug, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{ExitStatus, Opts, Outcome};

/// Runs one search against one file. Implementations are shared across task threads.
pub trait Searcher: Send + Sync {
    fn search(&self, path: &Path) -> Outcome;
}

/// External line-search executable, invoked as `program [flags..] expression path`.
#[derive(Clone, Debug)]
pub struct ExternalTool {
    program: PathBuf,
    flags: Vec<String>,
    expression: String,
}

impl ExternalTool {
    pub fn new(
        program: impl Into<PathBuf>,
        flags: Vec<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            flags,
            expression: expression.into(),
        }
    }

    /// Tool, flags and expression from resolved options.
    pub fn from_opts(opts: &Opts, expression: &str) -> Self {
        Self::new(opts.tool.clone(), opts.tool_flags(), expression)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vector after the program name.
    pub fn args_for(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.flags.iter().map(OsString::from).collect();
        args.push(self.expression.clone().into());
        args.push(path.as_os_str().to_os_string());
        args
    }
}

impl Searcher for ExternalTool {
    fn search(&self, path: &Path) -> Outcome {
        let output = match Command::new(&self.program)
            .args(self.args_for(path))
            .stdin(Stdio::null())
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                warn!(
                    "failed to run {} on {}: {}",
                    self.program.display(),
                    path.display(),
                    e
                );
                return Outcome::error();
            }
        };

        let status = ExitStatus::from_code(output.status.code());
        match status {
            ExitStatus::Success => Outcome::new(output.stdout, status),
            ExitStatus::NoMatch => Outcome::no_match(),
            ExitStatus::Error => {
                warn!("error occurred while grepping {}", path.display());
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    debug!("{}: {}", self.program.display(), stderr);
                }
                Outcome::error()
            }
        }
    }
}
