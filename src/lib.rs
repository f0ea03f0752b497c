//! ppdfgrep: parallel pdfgrep. Finds PDFs by magic bytes, runs one bounded-concurrency search
//! per file, and writes results in discovery order.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use engine::searcher::{ExternalTool, Searcher};

/// Result alias used by public ppdfgrep API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: search every PDF under `roots` for `expression` with the tool in `opts`,
/// writing results to `out` in discovery order.
///
/// The returned [`RunSummary::status`] is [`AggregateStatus::Failed`] if any search errored;
/// files with no match never fail the run.
pub fn search_paths<P, W>(
    roots: &[P],
    expression: &str,
    opts: &Opts,
    out: &mut W,
) -> Result<RunSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    let searcher: Arc<dyn Searcher> = Arc::new(ExternalTool::from_opts(opts, expression));
    pipeline::run_search(roots, opts, searcher, out)
}

/// Like [`search_paths`] but with a caller-supplied [`Searcher`] instead of the external tool.
pub fn search_paths_with<P, W>(
    roots: &[P],
    opts: &Opts,
    searcher: Arc<dyn Searcher>,
    out: &mut W,
) -> Result<RunSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    pipeline::run_search(roots, opts, searcher, out)
}
