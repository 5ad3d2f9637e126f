//! Path utilities: expand ~ and resolve configured file locations.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Command-line value wins over the configured one.
pub fn resolve(cli_value: Option<&str>, configured: &str) -> PathBuf {
    expand_tilde(cli_value.unwrap_or(configured))
}
