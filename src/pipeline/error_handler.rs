use crate::SkippedPath;

/// Log paths the walk could not visit: a count always, each path and reason when verbose.
/// Never fails the run; skipped paths only show up here.
pub fn report_skipped(skipped: &[SkippedPath], verbose: bool) {
    if skipped.is_empty() {
        return;
    }
    log::warn!(
        "Skipped {} paths due to permission errors or access issues",
        skipped.len()
    );
    if verbose {
        for (p, msg) in skipped {
            eprintln!("  skipped: {} ({})", p.display(), msg);
        }
    }
}
