//! Path utilities for storage location management.
//!
//! This module resolves where the application keeps its persistent state (the
//! pet store and trace files) and handles tilde expansion for user-supplied
//! paths.

use std::path::PathBuf;

/// Returns the data directory for application storage.
///
/// Resolution order:
/// 1. `PETID_DATA_DIR` environment variable, if set
/// 2. `$XDG_DATA_HOME/petid`, if `XDG_DATA_HOME` is set
/// 3. `$HOME/.local/share/petid`
///
/// The JSON storage file `pets.json` and the trace file `petid-otlp.json`
/// live within this directory. Falls back to a relative `.petid` directory
/// when no home directory can be determined.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PETID_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("petid");
        }
    }

    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => {
            PathBuf::from(home).join(".local").join("share").join("petid")
        }
        _ => PathBuf::from(".petid"),
    }
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as is the input when
/// `HOME` is unset.
///
/// # Examples
///
/// ```
/// use petid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/petid"), "/tmp/petid");
        assert_eq!(expand_tilde("relative/dir"), "relative/dir");
    }
}
