//! Discovery: walk the roots in order and keep the files that classify as PDF.

use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::engine::classify::classify;
use crate::engine::tools::{has_pdf_extension, is_hidden_name, is_hidden_path};
use crate::{CandidateFile, SkippedPath};

/// Candidates in discovery order plus everything the walk had to skip.
#[derive(Debug, Default)]
pub struct Discovery {
    pub candidates: Vec<CandidateFile>,
    pub skipped: Vec<SkippedPath>,
}

/// One result from a directory walk: a non-directory path to classify, or an error with optional path.
pub enum WalkOutcome {
    File(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Hidden entries below the root are neither yielded nor descended into.
fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_hidden_name(entry.file_name())
}

/// Walk one root depth-first, name by name. With `recursive` off a directory root is entered
/// once: its direct children are visited, its subdirectories are not.
fn walk_root(root: &Path, recursive: bool) -> Vec<WalkOutcome> {
    let mut out = Vec::new();
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut it = WalkDir::new(root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_visible);

    while let Some(result) = it.next() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("walk error (skipped): {}", err);
                out.push(WalkOutcome::Err {
                    msg: err.to_string(),
                    path: err.path().map(PathBuf::from),
                });
                continue;
            }
        };

        let meta = match entry.path().symlink_metadata() {
            Ok(meta) => meta,
            Err(err) => {
                warn!("Failed to lstat \"{}\": {}", entry.path().display(), err);
                if entry.file_type().is_dir() {
                    it.skip_current_dir();
                }
                out.push(WalkOutcome::Err {
                    msg: format!("lstat: {}", err),
                    path: Some(entry.into_path()),
                });
                continue;
            }
        };

        if meta.is_dir() {
            continue;
        }
        out.push(WalkOutcome::File(entry.into_path()));
    }
    out
}

/// Turn walk outcomes into (files to classify, skipped).
fn split_outcomes(outcomes: Vec<WalkOutcome>) -> (Vec<PathBuf>, Vec<SkippedPath>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            WalkOutcome::File(path) => files.push(path),
            WalkOutcome::Err { msg, path } => {
                let path = path.unwrap_or_else(|| PathBuf::from("<no-path>"));
                skipped.push((path, msg));
            }
        }
    }
    (files, skipped)
}

/// Classify in parallel; `collect` keeps walk order.
fn classify_in_order(files: Vec<PathBuf>) -> Vec<CandidateFile> {
    let flags: Vec<bool> = files.par_iter().map(|p| classify(p)).collect();
    files
        .into_iter()
        .zip(flags)
        .filter_map(|(path, is_pdf)| {
            if is_pdf {
                Some(path)
            } else {
                if has_pdf_extension(&path) {
                    warn!("File does not appear to be a PDF: \"{}\"", path.display());
                }
                None
            }
        })
        .enumerate()
        .map(|(index, path)| CandidateFile { index, path })
        .collect()
}

/// Walk `roots` in the order given and return the PDF candidates in discovery order.
/// Hidden roots (base name starting with `.`) are skipped; `.` and `..` themselves are walked.
pub fn discover<P: AsRef<Path>>(roots: &[P], recursive: bool) -> Discovery {
    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for root in roots {
        let root = root.as_ref();
        if is_hidden_path(root) {
            debug!("Skipping hidden root {}", root.display());
            continue;
        }
        let (f, s) = split_outcomes(walk_root(root, recursive));
        files.extend(f);
        skipped.extend(s);
    }
    debug!("Walk found {} files, classifying", files.len());
    let candidates = classify_in_order(files);
    debug!("{} PDF candidates", candidates.len());
    Discovery {
        candidates,
        skipped,
    }
}
