use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name of the history file under the home directory (zsh convention)
pub const HISTORY_FILE_NAME: &str = ".zhistory";

/// Get the history file path (~/.zhistory)
///
/// # Errors
///
/// Returns an error if `HOME` is unset or empty.
pub fn get_history_path() -> Result<PathBuf> {
    history_path_from_home(env::var_os("HOME"))
}

pub(crate) fn history_path_from_home(home: Option<OsString>) -> Result<PathBuf> {
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(HISTORY_FILE_NAME)),
        _ => bail!("HOME environment variable not set"),
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, env::var("HOME").ok().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.display())
        };
    }

    path.to_string_lossy().into_owned()
}
