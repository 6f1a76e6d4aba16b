//! Monorepo detection.
//!
//! Looks for workspace patterns in, by priority:
//! 1. `pnpm-workspace.yaml`
//! 2. the `workspaces` field of the root package.json
//! 3. `lerna.json`
//! 4. a conventional `packages/` directory
//!
//! The first source that yields patterns wins. A source whose list is
//! empty, or left empty by playground exclusion, counts as absent.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use super::manifest::read_manifest;

/// pnpm workspace file name.
pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// Lerna config file name.
pub const LERNA_FILE: &str = "lerna.json";

/// Conventional directory holding member packages.
pub const PACKAGES_DIR: &str = "packages";

/// Pattern used when only the conventional directory is present.
pub const FALLBACK_PATTERN: &str = "packages/*";

/// Substring marking playground packages.
const PLAYGROUND_MARKER: &str = "playground";

/// Where the workspace patterns came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSource {
    /// `pnpm-workspace.yaml`
    Pnpm,
    /// `workspaces` in package.json (npm, yarn, bun)
    Manifest,
    /// `lerna.json`
    Lerna,
    /// A `packages/` directory with no explicit config
    PackagesDir,
}

impl std::fmt::Display for WorkspaceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceSource::Pnpm => write!(f, "pnpm workspaces"),
            WorkspaceSource::Manifest => write!(f, "package.json workspaces"),
            WorkspaceSource::Lerna => write!(f, "lerna"),
            WorkspaceSource::PackagesDir => write!(f, "packages/ directory"),
        }
    }
}

/// Workspace glob patterns and their source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePatterns {
    pub source: WorkspaceSource,
    pub patterns: Vec<String>,
}

type PatternReader = fn(&Path) -> Result<Option<Vec<String>>>;

/// pnpm-workspace.yaml structure.
#[derive(Debug, Deserialize)]
struct PnpmWorkspace {
    packages: Option<Vec<String>>,
}

/// lerna.json structure.
#[derive(Debug, Deserialize)]
struct LernaConfig {
    packages: Option<Vec<String>>,
}

/// Detect whether `root` is a monorepo and return its workspace patterns.
///
/// With `exclude_playground`, patterns containing `playground` are dropped
/// from explicitly configured sources. Files that cannot be read or parsed
/// are logged and skipped, so detection moves on to the next source.
pub fn detect_monorepo(root: &Path, exclude_playground: bool) -> Option<WorkspacePatterns> {
    let explicit: [(WorkspaceSource, PatternReader); 3] = [
        (WorkspaceSource::Pnpm, read_pnpm_patterns),
        (WorkspaceSource::Manifest, read_manifest_patterns),
        (WorkspaceSource::Lerna, read_lerna_patterns),
    ];

    for (source, read) in explicit {
        match read(root) {
            Ok(Some(patterns)) => {
                debug!(%source, ?patterns, "workspace patterns found");
                let patterns = if exclude_playground {
                    without_playground(patterns)
                } else {
                    patterns
                };
                if patterns.is_empty() {
                    debug!(%source, "only playground patterns, skipping");
                    continue;
                }
                return Some(WorkspacePatterns { source, patterns });
            }
            Ok(None) => {}
            Err(e) => warn!(%source, "ignoring workspace config: {e:#}"),
        }
    }

    if root.join(PACKAGES_DIR).is_dir() {
        debug!("falling back to {FALLBACK_PATTERN}");
        return Some(WorkspacePatterns {
            source: WorkspaceSource::PackagesDir,
            patterns: vec![FALLBACK_PATTERN.to_string()],
        });
    }

    None
}

/// Patterns from `pnpm-workspace.yaml`; an empty list counts as none.
fn read_pnpm_patterns(root: &Path) -> Result<Option<Vec<String>>> {
    let path = root.join(PNPM_WORKSPACE_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // An empty file deserializes to nothing useful rather than an error.
    if content.trim().is_empty() {
        return Ok(None);
    }

    let config: PnpmWorkspace = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config.packages.filter(|p| !p.is_empty()))
}

/// Patterns from the root manifest's `workspaces` field.
fn read_manifest_patterns(root: &Path) -> Result<Option<Vec<String>>> {
    Ok(read_manifest(root)?.and_then(|m| m.workspace_patterns()))
}

/// Patterns from `lerna.json`; an empty list counts as none.
fn read_lerna_patterns(root: &Path) -> Result<Option<Vec<String>>> {
    let path = root.join(LERNA_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: LernaConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config.packages.filter(|p| !p.is_empty()))
}

/// Drop every pattern that mentions a playground.
fn without_playground(patterns: Vec<String>) -> Vec<String> {
    patterns
        .into_iter()
        .filter(|p| !p.contains(PLAYGROUND_MARKER))
        .collect()
}
