use clap::Parser;
use std::path::PathBuf;

/// Run one pdfgrep per PDF, in parallel, printing results in the order the files were found.
///
/// Boolean options take an optional `=true`/`=false` so they can override `.ppdfgrep.toml`
/// either way (`-r`, `--recursive=false`).
#[derive(Clone, Debug, Parser)]
#[command(name = "ppdfgrep")]
#[command(about = "Parallel pdfgrep: search PDFs found under FILE... for PATTERN.")]
#[command(override_usage = "ppdfgrep [OPTION...] PATTERN FILE... [-- TOOL_ARG...]")]
pub struct Cli {
    /// Expression handed to the search tool.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Files or directories to search. Directories are entered one level deep unless -r.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Everything after `--` goes to the search tool unchanged, e.g. `-- --max-count=1 -C`.
    #[arg(value_name = "TOOL_ARG", last = true)]
    pub passthrough: Vec<String>,

    /// Descend into subdirectories.
    #[arg(long, short = 'r', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub recursive: Option<bool>,

    /// Case-insensitive search (passes -i).
    #[arg(long, short = 'i', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub ignore_case: Option<bool>,

    /// Prefix each match with its file name (passes -H).
    #[arg(long, short = 'H', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub with_filename: Option<bool>,

    /// Prefix each match with its page number (passes -n).
    #[arg(long, short = 'n', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub page_number: Option<bool>,

    /// Extra argument for the search tool, passed verbatim. Repeatable: --tool-arg=--cache
    #[arg(long = "tool-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub tool_args: Vec<String>,

    /// Search executable. Default: pdfgrep (or PPDFGREP_TOOL).
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<PathBuf>,

    /// Debug logging, list skipped paths and show a progress counter on stderr.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
