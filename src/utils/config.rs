//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    task_thread_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
                task_thread_prefix: format!("{pkg}-task"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// `.ppdfgrep.toml`, looked up in the working directory.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Thread name for the search task at `index`.
    pub fn task_thread_name(&self, index: usize) -> String {
        format!("{}-{}", self.task_thread_prefix, index)
    }
}

// ---- Search tool ----

/// Executable used when neither config, env nor CLI names one. Resolved through `$PATH`.
pub const DEFAULT_TOOL: &str = "pdfgrep";

/// Environment variable (also read from `.env`) overriding the search executable.
pub const TOOL_ENV_KEY: &str = "PPDFGREP_TOOL";

// ---- Classification ----

/// Bytes read from the head of each file for magic sniffing. Covers the usual signature offsets.
pub const HEADER_LEN: usize = 261;

/// PDF signature. The version dash is not required.
pub const PDF_MAGIC: &[u8] = b"%PDF";

// ---- Worker threads ----

/// Descriptors held by one in-flight search (stdin null, stdout pipe, stderr pipe).
pub const FDS_PER_TASK: usize = 3;

/// Floor for the concurrency budget.
pub const MIN_TASK_SLOTS: usize = 1;

/// Available threads as rayon sees them (host parallelism unless RAYON_NUM_THREADS is set).
pub fn host_parallelism() -> usize {
    rayon::current_num_threads().max(MIN_TASK_SLOTS)
}

// ---- Progress ----

/// Label for the verbose progress counter.
pub const PROGRESS_DESC: &str = "Grepping";
