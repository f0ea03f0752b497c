//! Progress counter for verbose runs (stderr, so stdout stays clean).

use kdam::{Animation, Bar, BarExt};
use std::sync::{Arc, Mutex};

// Progress bar type alias
pub type ProgressBar = Arc<Mutex<Bar>>;

/// Completion callback handed to the dispatcher; called once per finished search.
pub type OnComplete = Box<dyn Fn() + Send + Sync>;

/// Create a bar with a known total (number of candidates).
pub fn create_progress_bar(total: usize, desc: &'static str) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = total,
        desc = desc,
        animation = Animation::Classic,
        unit = " files"
    )))
}

/// Update progress bar if available.
/// Uses try_lock so finishing tasks never wait on the bar.
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

/// Final refresh so the bar shows the real total even if some try_lock updates were skipped.
pub fn finish_progress_bar(pb: &ProgressBar) {
    if let Ok(mut bar) = pb.lock() {
        let total = bar.total;
        let _ = bar.update_to(total);
        let _ = bar.refresh();
        eprintln!();
    }
}

/// Build the per-completion callback for `bar`, if any.
pub fn on_complete_callback(bar: &Option<ProgressBar>) -> Option<OnComplete> {
    bar.as_ref().map(|bar| {
        let bar = Arc::clone(bar);
        Box::new(move || update_progress_bar(&bar, 1)) as OnComplete
    })
}
