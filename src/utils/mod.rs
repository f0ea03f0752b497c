pub mod config;
pub mod fd_limit;
pub mod logger;
pub(crate) mod ppdfgrep_toml;
pub mod tool_env;

pub use config::*;
pub use fd_limit::{cap_task_slots, max_open_fds, max_workers_by_fd_limit};
pub use logger::setup_logging;
pub use tool_env::tool_from_env;
