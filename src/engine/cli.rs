//! CLI command handler: resolve options, search, report aggregate status.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use crate::engine::arg_parser::Cli;
use crate::engine::searcher::ExternalTool;
use crate::pipeline::run_search;
use crate::utils::ppdfgrep_toml::{PpdfgrepToml, apply_file_to_opts, load_ppdfgrep_toml};
use crate::utils::{setup_logging, tool_from_env};
use crate::{AggregateStatus, Opts};

/// Apply command-line values over `opts` (only flags actually given).
fn apply_cli_to_opts(cli: &Cli, opts: &mut Opts) {
    if let Some(v) = cli.recursive {
        opts.recursive = v;
    }
    if let Some(v) = cli.ignore_case {
        opts.ignore_case = v;
    }
    if let Some(v) = cli.with_filename {
        opts.with_filename = v;
    }
    if let Some(v) = cli.page_number {
        opts.page_number = v;
    }
    opts.tool_args.extend(cli.tool_args.iter().cloned());
    opts.tool_args.extend(cli.passthrough.iter().cloned());
    if let Some(ref t) = cli.tool {
        opts.tool = t.clone();
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
}

/// File → PPDFGREP_TOOL / `.env` → CLI, over defaults.
fn layer_opts(cli: &Cli, file: Option<&PpdfgrepToml>, config_dir: &Path) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = file {
        apply_file_to_opts(file, &mut opts);
    }
    if let Some(tool) = tool_from_env(config_dir) {
        opts.tool = tool;
    }
    apply_cli_to_opts(cli, &mut opts);
    opts
}

/// Log and drop an unusable config file.
fn file_or_warn(loaded: Result<Option<PpdfgrepToml>>) -> Option<PpdfgrepToml> {
    loaded.unwrap_or_else(|e| {
        warn!("{:#}", e);
        None
    })
}

/// Defaults → `.ppdfgrep.toml` in `config_dir` → PPDFGREP_TOOL / `.env` → CLI.
pub fn resolve_opts(cli: &Cli, config_dir: &Path) -> Opts {
    let file = file_or_warn(load_ppdfgrep_toml(config_dir));
    layer_opts(cli, file.as_ref(), config_dir)
}

/// Search every PDF under `cli.files` and stream results to stdout. Returns the aggregate
/// status; the caller turns it into the exit code.
pub fn handle_run(cli: &Cli) -> Result<AggregateStatus> {
    let cwd = std::env::current_dir().context("read current directory")?;
    // The logger needs `verbose` before the file's errors and the env layer can be logged.
    let loaded = load_ppdfgrep_toml(&cwd);
    let file_verbose = loaded
        .as_ref()
        .ok()
        .and_then(Option::as_ref)
        .and_then(PpdfgrepToml::verbose);
    setup_logging(cli.verbose.or(file_verbose).unwrap_or(false));

    let file = file_or_warn(loaded);
    let opts = layer_opts(cli, file.as_ref(), &cwd);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let searcher = Arc::new(ExternalTool::from_opts(&opts, &cli.pattern));
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run_search(&cli.files, &opts, searcher, &mut out)?;
    debug!(
        "{} candidates, {} bytes written, status {:?}",
        summary.candidates, summary.bytes_written, summary.status
    );
    Ok(summary.status)
}
