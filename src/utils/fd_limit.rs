//! File descriptor limit detection for capping concurrent searches (Unix).

use log::debug;

use crate::utils::config::{FDS_PER_TASK, MIN_TASK_SLOTS};

/// Fraction of the process FD limit to use (leave headroom for the walk and stdout).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    // RLIM_INFINITY is typically !0 or u64::MAX; treat as "no practical limit"
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Max concurrent searches so their pipes stay under ~80% of the FD limit.
/// Returns `None` if no limit is available (use caller's default).
pub fn max_workers_by_fd_limit() -> Option<usize> {
    let limit = max_open_fds()?;
    Some(workers_for_limit(limit))
}

fn workers_for_limit(limit: u64) -> usize {
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    (usable / FDS_PER_TASK).max(MIN_TASK_SLOTS)
}

/// Clamp `requested` to the FD cap and the floor.
pub fn cap_task_slots(requested: usize) -> usize {
    match max_workers_by_fd_limit() {
        Some(fd_cap) if fd_cap < requested => {
            debug!("Capping task slots {} -> {} (FD limit ~80%)", requested, fd_cap);
            fd_cap
        }
        _ => requested.max(MIN_TASK_SLOTS),
    }
}
