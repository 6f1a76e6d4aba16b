//! Package enumeration.
//!
//! Expands workspace patterns into directories and keeps the member
//! packages that have something to run.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use super::manifest::{read_manifest, Scripts};
use super::monorepo::{detect_monorepo, WorkspacePatterns};
use crate::config::WorkspaceConfig;
use crate::error::RunxError;

/// Directory never treated as a workspace member.
const NODE_MODULES: &str = "node_modules";

/// Glob options matching npm/pnpm workspace semantics: `*` stays within a
/// path segment and hidden directories need an explicit leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A package whose scripts can be offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonorepoPackage {
    /// Manifest name, or the directory name when unnamed.
    pub name: String,
    /// Absolute package directory.
    pub dir: PathBuf,
    pub scripts: Scripts,
}

impl MonorepoPackage {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, scripts: Scripts) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            scripts,
        }
    }
}

/// Knobs for enumeration.
#[derive(Debug, Clone, Copy)]
pub struct EnumerateOptions {
    /// Drop workspace patterns mentioning `playground`.
    pub exclude_playground: bool,
    /// Skip members declaring an `exports` map.
    pub skip_libraries: bool,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            exclude_playground: true,
            skip_libraries: true,
        }
    }
}

impl From<&WorkspaceConfig> for EnumerateOptions {
    fn from(workspace: &WorkspaceConfig) -> Self {
        Self {
            exclude_playground: workspace.exclude_playground,
            skip_libraries: workspace.skip_libraries,
        }
    }
}

/// Result of looking at a project root.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Workspace patterns, when the root is a monorepo.
    pub workspace: Option<WorkspacePatterns>,
    pub packages: Vec<MonorepoPackage>,
}

impl Discovery {
    pub fn is_monorepo(&self) -> bool {
        self.workspace.is_some()
    }
}

/// Enumerate the runnable packages under `root`.
///
/// See [`discover`] for the rules.
pub fn get_all_packages(root: &Path, options: &EnumerateOptions) -> Result<Vec<MonorepoPackage>> {
    Ok(discover(root, options)?.packages)
}

/// Detect the layout of `root` and enumerate its packages.
///
/// - Not a monorepo: exactly one package from the root manifest, even if it
///   has no scripts.
/// - Monorepo: every directory matched by the workspace patterns that has a
///   manifest, at least one script and (unless disabled) no `exports` map.
///
/// # Errors
///
/// Returns an error if the root is not a monorepo and its manifest is
/// missing or unreadable. Broken member manifests are skipped.
pub fn discover(root: &Path, options: &EnumerateOptions) -> Result<Discovery> {
    let Some(workspace) = detect_monorepo(root, options.exclude_playground) else {
        let manifest = read_manifest(root)?.ok_or_else(|| RunxError::NoManifest {
            path: root.to_path_buf(),
        })?;

        let package = MonorepoPackage::new(
            manifest.name_or(&dir_name(root)),
            root,
            manifest.scripts(),
        );
        debug!(name = %package.name, scripts = package.scripts.len(), "single package");

        return Ok(Discovery {
            workspace: None,
            packages: vec![package],
        });
    };

    let dirs = expand_patterns(root, &workspace.patterns)?;
    debug!(count = dirs.len(), "workspace directories matched");

    let packages = dirs
        .iter()
        .filter_map(|dir| load_member(dir, options))
        .collect();

    Ok(Discovery {
        workspace: Some(workspace),
        packages,
    })
}

/// Read one workspace member, returning it only if it is runnable.
fn load_member(dir: &Path, options: &EnumerateOptions) -> Option<MonorepoPackage> {
    let manifest = match read_manifest(dir) {
        Ok(Some(manifest)) => manifest,
        Ok(None) => return None,
        Err(e) => {
            warn!(dir = %dir.display(), "skipping package: {e:#}");
            return None;
        }
    };

    if options.skip_libraries && manifest.has_exports() {
        debug!(dir = %dir.display(), "skipping library package (has exports)");
        return None;
    }

    let scripts = manifest.scripts();
    if scripts.is_empty() {
        debug!(dir = %dir.display(), "skipping package without scripts");
        return None;
    }

    Some(MonorepoPackage::new(
        manifest.name_or(&dir_name(dir)),
        dir,
        scripts,
    ))
}

/// Expand workspace patterns into existing directories under `root`.
///
/// Patterns starting with `!` exclude what they match. The result is
/// deduplicated and sorted by path; `node_modules` is never entered.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut includes = Vec::new();
    let mut excludes = Vec::new();

    for raw in patterns {
        match raw.trim().strip_prefix('!') {
            Some(negated) => {
                let normalized = normalize_pattern(negated);
                match Pattern::new(&normalized) {
                    Ok(p) => excludes.push(p),
                    Err(e) => warn!(pattern = %raw, "ignoring invalid exclude pattern: {e}"),
                }
            }
            None => includes.push(normalize_pattern(raw)),
        }
    }

    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut found = BTreeSet::new();

    for pattern in includes.iter().filter(|p| !p.is_empty()) {
        let full = format!("{escaped_root}/{pattern}");
        let entries = match glob::glob_with(&full, MATCH_OPTIONS) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(%pattern, "ignoring invalid workspace pattern: {e}");
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(%pattern, "skipping unreadable path: {e}");
                    continue;
                }
            };
            if !path.is_dir() {
                continue;
            }

            let Some(relative) = relative_slash_path(root, &path) else {
                continue;
            };
            if relative.split('/').any(|c| c == NODE_MODULES) {
                continue;
            }
            if excludes
                .iter()
                .any(|ex| ex.matches_with(&relative, MATCH_OPTIONS))
            {
                debug!(dir = %relative, "excluded by negated pattern");
                continue;
            }

            found.insert(path);
        }
    }

    Ok(found.into_iter().collect())
}

/// Trim `./` prefixes and trailing slashes so patterns join cleanly.
fn normalize_pattern(pattern: &str) -> String {
    let mut p = pattern.trim();
    while let Some(rest) = p.strip_prefix("./") {
        p = rest;
    }
    p.trim_end_matches('/').to_string()
}

/// `path` relative to `root`, `/`-separated. `None` if outside `root`.
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// The final path segment, used when a manifest has no name.
fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
