//! Write-once outcome slots, one per candidate index.
//!
//! Each slot is a one-shot channel. The task owns the [`SlotWriter`] and fills it exactly once;
//! the collector owns the [`OutcomeSlot`] and blocks on it. A writer dropped without a value
//! (task thread panicked) resolves the slot to [`Outcome::error`].

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

use crate::Outcome;

/// Task side of a slot. Consumed by [`fill`](Self::fill).
#[derive(Debug)]
pub struct SlotWriter {
    index: usize,
    tx: Sender<Outcome>,
}

impl SlotWriter {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pending -> Done. The receiver is only dropped once the collector bails out, so a failed
    /// send means nobody is listening any more.
    pub fn fill(self, outcome: Outcome) {
        let _ = self.tx.send(outcome);
    }
}

/// Collector side of a slot.
#[derive(Debug)]
pub struct OutcomeSlot {
    index: usize,
    rx: Receiver<Outcome>,
}

impl OutcomeSlot {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Block until the task has finished.
    pub fn wait(self) -> Outcome {
        self.rx.recv().unwrap_or_else(|_| Outcome::error())
    }

    /// Non-blocking check; `None` while the task is still running.
    pub fn try_take(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Outcome::error()),
        }
    }
}

/// `n` slots indexed 0..n: writers for the dispatcher, readers for the collector.
pub fn slot_arena(n: usize) -> (Vec<SlotWriter>, Vec<OutcomeSlot>) {
    (0..n)
        .map(|index| {
            let (tx, rx) = bounded::<Outcome>(1);
            (SlotWriter { index, tx }, OutcomeSlot { index, rx })
        })
        .unzip()
}
