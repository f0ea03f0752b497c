use ppdfgrep::engine::{classify, has_pdf_extension, is_hidden_name, is_hidden_path, is_pdf_header};
use ppdfgrep::pipeline::{ConcurrencyBudget, resolve_task_slots};
use ppdfgrep::{AggregateStatus, ExitStatus, Opts};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

// --- hidden names ---

#[test]
fn test_hidden_names() {
    assert!(is_hidden_name(OsStr::new(".git")));
    assert!(is_hidden_name(OsStr::new(".hidden.pdf")));
    assert!(is_hidden_name(OsStr::new(".")));
    assert!(is_hidden_name(OsStr::new("..")));
    assert!(!is_hidden_name(OsStr::new("a.pdf")));
    assert!(!is_hidden_name(OsStr::new("dir.with.dots")));
}

#[test]
fn test_explicit_dot_roots_are_not_hidden() {
    assert!(!is_hidden_path(Path::new(".")));
    assert!(!is_hidden_path(Path::new("..")));
    assert!(!is_hidden_path(Path::new("docs/..")));
    assert!(!is_hidden_path(Path::new("./docs")));
    assert!(is_hidden_path(Path::new("docs/.cache")));
}

#[test]
fn test_pdf_extension_any_case() {
    assert!(has_pdf_extension(Path::new("a.pdf")));
    assert!(has_pdf_extension(Path::new("A.PDF")));
    assert!(!has_pdf_extension(Path::new("a.pdf.txt")));
    assert!(!has_pdf_extension(Path::new("pdf")));
}

// --- classification ---

#[test]
fn test_pdf_header() {
    assert!(is_pdf_header(b"%PDF-2.0"));
    assert!(!is_pdf_header(b"%!PS-Adobe-3.0"));
}

#[test]
fn test_classify_only_reads_header() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("big.dat");
    let mut body = b"%PDF-1.5\n".to_vec();
    body.extend(std::iter::repeat_n(b'x', 10_000));
    std::fs::write(&p, body).unwrap();
    assert!(classify(&p));
}

// --- exit status mapping ---

#[test]
fn test_exit_status_from_code() {
    assert_eq!(ExitStatus::from_code(Some(0)), ExitStatus::Success);
    assert_eq!(ExitStatus::from_code(Some(1)), ExitStatus::NoMatch);
    assert_eq!(ExitStatus::from_code(Some(2)), ExitStatus::Error);
    assert_eq!(ExitStatus::from_code(Some(127)), ExitStatus::Error);
    assert_eq!(ExitStatus::from_code(None), ExitStatus::Error);
}

#[test]
fn test_aggregate_only_fails_on_error() {
    let mut agg = AggregateStatus::default();
    agg.record(ExitStatus::NoMatch);
    agg.record(ExitStatus::Success);
    assert_eq!(agg, AggregateStatus::Clean);
    assert_eq!(agg.exit_code(), 0);
    agg.record(ExitStatus::Error);
    agg.record(ExitStatus::Success);
    assert!(agg.is_failed());
    assert_eq!(agg.exit_code(), 1);
}

// --- options ---

#[test]
fn test_tool_flags_order() {
    let opts = Opts {
        ignore_case: true,
        with_filename: true,
        page_number: true,
        tool_args: vec!["--cache".to_string()],
        ..Default::default()
    };
    assert_eq!(opts.tool_flags(), vec!["-i", "-H", "-n", "--cache"]);
    assert!(Opts::default().tool_flags().is_empty());
    assert_eq!(Opts::default().tool, PathBuf::from("pdfgrep"));
}

#[test]
fn test_task_slots_respect_override() {
    let opts = Opts {
        num_threads: Some(2),
        ..Default::default()
    };
    assert_eq!(resolve_task_slots(&opts), 2);
    let zero = Opts {
        num_threads: Some(0),
        ..Default::default()
    };
    assert_eq!(resolve_task_slots(&zero), 1);
    assert!(resolve_task_slots(&Opts::default()) >= 1);
}

// --- budget ---

#[test]
fn test_budget_never_exceeds_total() {
    let budget = ConcurrencyBudget::new(3);
    let permits: Vec<_> = (0..3).map(|_| budget.acquire()).collect();
    assert_eq!(budget.in_flight(), 3);
    assert!(budget.try_acquire().is_none());
    drop(permits);
    assert_eq!(budget.in_flight(), 0);
    assert_eq!(budget.peak_in_flight(), 3);
}
