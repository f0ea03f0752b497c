//! Blocking admission budget for in-flight searches.
//!
//! The dispatch loop calls [`ConcurrencyBudget::acquire`] before launching each task and
//! blocks on a condvar while all slots are taken. The returned [`Permit`] travels with the
//! task and gives the slot back when dropped, so a task that panics still releases it.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

#[derive(Debug)]
struct State {
    /// Free slots, in `[0, total]`.
    avail: usize,
    /// Highest number of permits ever out at once.
    peak: usize,
}

/// Fixed-capacity counting budget. One per run; shared with tasks through `Arc`.
#[derive(Debug)]
pub struct ConcurrencyBudget {
    total: usize,
    state: Mutex<State>,
    cv: Condvar,
}

impl ConcurrencyBudget {
    /// Budget with `total` slots. A zero request is raised to one so acquire can never deadlock.
    pub fn new(total: usize) -> Arc<Self> {
        let total = total.max(1);
        Arc::new(Self {
            total,
            state: Mutex::new(State {
                avail: total,
                peak: 0,
            }),
            cv: Condvar::new(),
        })
    }

    /// Lock with poison recovery. Release runs in Drop and must not panic.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Free slots right now. A snapshot; use [`acquire`](Self::acquire) to coordinate.
    pub fn available(&self) -> usize {
        self.lock().avail
    }

    pub fn in_flight(&self) -> usize {
        self.total - self.available()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.lock().peak
    }

    /// Take one slot, blocking until one is free.
    pub fn acquire(self: &Arc<Self>) -> Permit {
        let mut st = self.lock();
        while st.avail == 0 {
            st = self.cv.wait(st).unwrap_or_else(|poison| poison.into_inner());
        }
        self.take(&mut st)
    }

    /// Take one slot if one is free.
    pub fn try_acquire(self: &Arc<Self>) -> Option<Permit> {
        let mut st = self.lock();
        if st.avail == 0 {
            return None;
        }
        Some(self.take(&mut st))
    }

    fn take(self: &Arc<Self>, st: &mut State) -> Permit {
        st.avail -= 1;
        st.peak = st.peak.max(self.total - st.avail);
        Permit {
            budget: Arc::clone(self),
        }
    }

    fn release(&self) {
        let mut st = self.lock();
        debug_assert!(st.avail < self.total, "released more permits than acquired");
        st.avail = (st.avail + 1).min(self.total);
        drop(st);
        self.cv.notify_one();
    }
}

/// One admitted task. Dropping it frees the slot.
#[derive(Debug)]
pub struct Permit {
    budget: Arc<ConcurrencyBudget>,
}

impl Drop for Permit {
    fn drop(&mut self) {
        self.budget.release();
    }
}
