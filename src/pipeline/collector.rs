//! Ordered drain: emit outcomes in discovery order no matter which task finished first.

use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use super::slots::OutcomeSlot;
use crate::{AggregateStatus, CandidateFile, ExitStatus};

/// What the collector wrote and how the run went.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collected {
    pub bytes_written: u64,
    pub status: AggregateStatus,
}

/// Walk `slots` in index order, blocking on each until its task is done. Non-empty output is
/// written verbatim; error outcomes write nothing and fail the aggregate.
pub fn collect<W: Write>(
    candidates: &[CandidateFile],
    slots: Vec<OutcomeSlot>,
    out: &mut W,
) -> Result<Collected> {
    let mut collected = Collected::default();
    for (candidate, slot) in candidates.iter().zip(slots) {
        debug_assert_eq!(candidate.index, slot.index());
        let outcome = slot.wait();
        collected.status.record(outcome.status);

        match outcome.status {
            ExitStatus::Error => {
                debug!("{}: search failed", candidate.path.display());
                continue;
            }
            ExitStatus::NoMatch => continue,
            ExitStatus::Success => {}
        }
        if outcome.output.is_empty() {
            continue;
        }
        out.write_all(&outcome.output)
            .with_context(|| format!("write results for {}", candidate.path.display()))?;
        collected.bytes_written += outcome.output.len() as u64;
    }
    out.flush().context("flush output")?;
    Ok(collected)
}
