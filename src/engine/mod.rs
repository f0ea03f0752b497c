//! Engine: classification, the search tool seam, CLI plumbing

pub mod arg_parser;
pub mod classify;
pub mod cli;
pub mod progress;
pub mod searcher;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use classify::{classify, is_pdf_header};
pub use cli::{handle_run, resolve_opts};
pub use searcher::{ExternalTool, Searcher};
pub use tools::{has_pdf_extension, is_hidden_name, is_hidden_path};
