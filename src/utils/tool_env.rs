//! Search tool override: env var → `.env` in dir.

use std::path::{Path, PathBuf};

use crate::utils::config::TOOL_ENV_KEY;

fn non_empty_var(key: &str) -> Option<String> {
    let s = std::env::var(key).ok()?;
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

/// Tool from `PPDFGREP_TOOL`, falling back to a `.env` file in `dir`. None if neither sets it.
pub fn tool_from_env(dir: &Path) -> Option<PathBuf> {
    if let Some(s) = non_empty_var(TOOL_ENV_KEY) {
        return Some(PathBuf::from(s));
    }
    let env_path = dir.join(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(&env_path);
        if let Some(s) = non_empty_var(TOOL_ENV_KEY) {
            log::debug!("{} loaded from {}", TOOL_ENV_KEY, env_path.display());
            return Some(PathBuf::from(s));
        }
    }
    None
}
