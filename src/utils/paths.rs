//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::RunxError;
use crate::package::{MANIFEST_FILE, PNPM_WORKSPACE_FILE};

/// Maximum number of parent directories to search.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// Project-level config file name.
pub const LOCAL_CONFIG_FILE: &str = ".runxrc.toml";

/// Files that mark a project root.
const ROOT_MARKERS: &[&str] = &[MANIFEST_FILE, PNPM_WORKSPACE_FILE];

/// Find the project root starting from the given directory.
///
/// The root is the closest directory containing a package.json or a
/// pnpm-workspace.yaml, searching the given directory and up to
/// [`MAX_SEARCH_DEPTH`] parents.
///
/// # Errors
///
/// Returns an error if the start directory is not accessible or no root is
/// found.
pub fn find_project_root(start_dir: &Path) -> Result<PathBuf> {
    let start = start_dir.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start_dir.display()
        )
    })?;

    let found = start
        .ancestors()
        .take(MAX_SEARCH_DEPTH + 1)
        .find(|dir| ROOT_MARKERS.iter().any(|m| dir.join(m).is_file()));

    match found {
        Some(root) => Ok(root.to_path_buf()),
        None => Err(RunxError::NoProjectRoot {
            path: start,
            depth: MAX_SEARCH_DEPTH,
        }
        .into()),
    }
}

/// Get the config directory for runx.
///
/// Returns `~/.config/runx` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("runx"))
}

/// Get the global config file path.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in project directory.
pub fn local_config_file(project_dir: &Path) -> Option<PathBuf> {
    let config_file = project_dir.join(LOCAL_CONFIG_FILE);
    config_file.is_file().then_some(config_file)
}

/// `dir` relative to `root`, or `.` for the root itself.
///
/// Paths outside `root` are shown in full.
pub fn relative_dir(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}
