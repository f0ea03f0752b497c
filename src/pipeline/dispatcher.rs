//! Bounded-concurrency dispatch: one search task per candidate, at most N in flight.

use anyhow::Result;
use log::{debug, error};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::budget::ConcurrencyBudget;
use super::slots::SlotWriter;
use crate::engine::progress::OnComplete;
use crate::engine::searcher::Searcher;
use crate::utils::config::PackagePaths;
use crate::CandidateFile;

/// What a finished [`Dispatcher::dispatch`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Tasks started (one per candidate whose thread could be spawned).
    pub launched: usize,
    /// Tasks whose thread panicked; their slots resolved to errors.
    pub panicked: usize,
    /// Most task threads alive or awaiting join at once.
    pub peak_unjoined: usize,
}

/// Owns the admission budget for one run. Launches tasks in discovery order; tasks finish in any order.
pub struct Dispatcher {
    searcher: Arc<dyn Searcher>,
    budget: Arc<ConcurrencyBudget>,
    on_complete: Option<Arc<OnComplete>>,
}

impl Dispatcher {
    pub fn new(searcher: Arc<dyn Searcher>, slots: usize) -> Self {
        Self {
            searcher,
            budget: ConcurrencyBudget::new(slots),
            on_complete: None,
        }
    }

    /// Called from each task thread after its slot is filled.
    pub fn with_on_complete(mut self, on_complete: Option<OnComplete>) -> Self {
        self.on_complete = on_complete.map(Arc::new);
        self
    }

    pub fn budget(&self) -> &Arc<ConcurrencyBudget> {
        &self.budget
    }

    /// Block for a permit, then spawn one task. The task owns the permit and slot writer; the
    /// permit drops after the fill.
    fn launch(&self, candidate: &CandidateFile, writer: SlotWriter) -> Option<JoinHandle<()>> {
        let permit = self.budget.acquire();
        let searcher = Arc::clone(&self.searcher);
        let on_complete = self.on_complete.clone();
        let path = candidate.path.clone();
        let name = PackagePaths::get().task_thread_name(candidate.index);

        let spawned = thread::Builder::new().name(name).spawn(move || {
            let _permit = permit;
            writer.fill(searcher.search(&path));
            if let Some(cb) = on_complete {
                cb();
            }
        });

        // On spawn failure the closure is dropped with its writer and permit: the slot
        // resolves to an error and the budget gets its slot back.
        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!(
                    "could not start search task for {}: {}",
                    candidate.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Launch a task for every candidate, blocking on the budget between launches, then wait for
    /// all of them. `writers[i]` must belong to `candidates[i]`.
    pub fn dispatch(
        &self,
        candidates: &[CandidateFile],
        writers: Vec<SlotWriter>,
    ) -> Result<DispatchSummary> {
        anyhow::ensure!(
            candidates.len() == writers.len(),
            "{} candidates but {} slots",
            candidates.len(),
            writers.len()
        );
        debug!(
            "Dispatching {} searches, {} at a time",
            candidates.len(),
            self.budget.total()
        );

        let mut summary = DispatchSummary::default();
        let mut handles = Vec::new();
        for (candidate, writer) in candidates.iter().zip(writers) {
            debug_assert_eq!(candidate.index, writer.index());
            if let Some(h) = self.launch(candidate, writer) {
                summary.launched += 1;
                handles.push(h);
            }
            reap_finished(&mut handles, &mut summary);
            summary.peak_unjoined = summary.peak_unjoined.max(handles.len());
        }

        for h in handles {
            join_task(h, &mut summary);
        }
        if summary.panicked > 0 {
            error!("{} search tasks panicked", summary.panicked);
        }
        debug!(
            "All searches done (peak {} in flight)",
            self.budget.peak_in_flight()
        );
        Ok(summary)
    }
}

/// Join tasks that have already exited. A finished thread keeps its stack mapped until joined,
/// so the pending list must not grow with the candidate count.
fn reap_finished(handles: &mut Vec<JoinHandle<()>>, summary: &mut DispatchSummary) {
    let mut i = 0;
    while i < handles.len() {
        if handles[i].is_finished() {
            join_task(handles.swap_remove(i), summary);
        } else {
            i += 1;
        }
    }
}

fn join_task(handle: JoinHandle<()>, summary: &mut DispatchSummary) {
    if handle.join().is_err() {
        summary.panicked += 1;
    }
}
