//! Load `.ppdfgrep.toml` from a directory (CLI only). Lib callers set [`Opts`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PpdfgrepToml {
    #[serde(default)]
    settings: SearchSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchSection {
    tool: Option<String>,
    recursive: Option<bool>,
    ignore_case: Option<bool>,
    with_filename: Option<bool>,
    page_number: Option<bool>,
    tool_args: Option<Vec<String>>,
    jobs: Option<usize>,
    verbose: Option<bool>,
}

/// Parse config text. Errors are returned as strings for logging.
pub(crate) fn parse_ppdfgrep_toml(s: &str) -> Result<PpdfgrepToml, String> {
    toml::from_str(s).map_err(|e| e.to_string())
}

/// Load `.ppdfgrep.toml` from `dir`. `Ok(None)` when there is no file; unreadable or malformed
/// files are errors for the caller to report.
pub(crate) fn load_ppdfgrep_toml(dir: &Path) -> Result<Option<PpdfgrepToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    let file = parse_ppdfgrep_toml(&s)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("ignoring {}", path.display()))?;
    Ok(Some(file))
}

impl PpdfgrepToml {
    /// `verbose` as set in the file, if at all.
    pub(crate) fn verbose(&self) -> Option<bool> {
        self.settings.verbose
    }
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before env and CLI.
pub(crate) fn apply_file_to_opts(file: &PpdfgrepToml, opts: &mut Opts) {
    let sec = &file.settings;
    if let Some(ref t) = sec.tool {
        opts.tool = PathBuf::from(t);
    }
    apply_file_opt!(sec, opts, recursive => recursive);
    apply_file_opt!(sec, opts, ignore_case => ignore_case);
    apply_file_opt!(sec, opts, with_filename => with_filename);
    apply_file_opt!(sec, opts, page_number => page_number);
    if let Some(ref v) = sec.tool_args {
        opts.tool_args = v.clone();
    }
    if let Some(jobs) = sec.jobs {
        opts.num_threads = Some(jobs);
    }
    apply_file_opt!(sec, opts, verbose => verbose);
}
