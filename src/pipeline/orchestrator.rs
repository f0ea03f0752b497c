//! Run wiring: discover, then dispatch and collect side by side.

use anyhow::{Context, Result, anyhow};
use log::debug;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use crate::Opts;
use crate::engine::progress::{create_progress_bar, finish_progress_bar, on_complete_callback};
use crate::engine::searcher::Searcher;
use crate::pipeline::{self, Dispatcher, Discovery, slot_arena};
use crate::utils::config::{PROGRESS_DESC, PackagePaths, host_parallelism};
use crate::utils::fd_limit::cap_task_slots;
use crate::{CandidateFile, RunSummary};

/// Concurrency budget for this run: `opts.num_threads` or host parallelism, capped by the FD limit.
pub fn resolve_task_slots(opts: &Opts) -> usize {
    let requested = opts.num_threads.unwrap_or_else(host_parallelism);
    cap_task_slots(requested)
}

/// Dispatch and collect at the same time: the dispatch loop runs on a driver thread while the
/// calling thread drains slots in order into `out`.
pub fn search_candidates<W: Write>(
    candidates: &[CandidateFile],
    opts: &Opts,
    searcher: Arc<dyn Searcher>,
    out: &mut W,
) -> Result<pipeline::Collected> {
    let task_slots = resolve_task_slots(opts);
    let bar = (opts.verbose && !candidates.is_empty())
        .then(|| create_progress_bar(candidates.len(), PROGRESS_DESC));
    let dispatcher =
        Dispatcher::new(searcher, task_slots).with_on_complete(on_complete_callback(&bar));
    let (writers, slots) = slot_arena(candidates.len());

    let (dispatched, collected) = thread::scope(|s| -> Result<_> {
        let d = &dispatcher;
        let driver = thread::Builder::new()
            .name(format!("{}-dispatch", PackagePaths::get().pkg_name()))
            .spawn_scoped(s, move || d.dispatch(candidates, writers))
            .context("spawn dispatch thread")?;

        let collected = pipeline::collect(candidates, slots, out);
        let dispatched = driver
            .join()
            .map_err(|_| anyhow!("dispatch thread panicked"))?;
        Ok((dispatched?, collected?))
    })?;

    if let Some(bar) = &bar {
        finish_progress_bar(bar);
    }
    debug!(
        "Launched {} searches ({} panicked), wrote {} bytes",
        dispatched.launched, dispatched.panicked, collected.bytes_written
    );
    Ok(collected)
}

/// Main orchestrator: discover → dispatch ∥ collect.
/// Returns once every search has finished and its output (if any) has been written.
pub fn run_search<P, W>(
    roots: &[P],
    opts: &Opts,
    searcher: Arc<dyn Searcher>,
    out: &mut W,
) -> Result<RunSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let Discovery {
        candidates,
        skipped,
    } = pipeline::discover(roots, opts.recursive);
    pipeline::report_skipped(&skipped, opts.verbose);

    let collected = search_candidates(&candidates, opts, searcher, out)?;

    Ok(RunSummary {
        candidates: candidates.len(),
        bytes_written: collected.bytes_written,
        status: collected.status,
        skipped,
    })
}
