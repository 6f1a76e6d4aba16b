//! Error types for runx.
//!
//! Domain failures carry their own exit code so `main` can report them
//! without string matching.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// No package.json found.
    pub const NO_MANIFEST: i32 = 2;
    /// Nothing runnable was found.
    pub const NO_SCRIPTS: i32 = 3;
    /// The script could not be started.
    pub const SCRIPT_FAILED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for runx.
#[derive(Error, Debug)]
pub enum RunxError {
    /// No project root above the start directory.
    #[error(
        "No package.json or pnpm-workspace.yaml found in {path} or any parent directory (searched up to {depth} levels)"
    )]
    NoProjectRoot { path: PathBuf, depth: usize },

    /// The root of a single-package project has no manifest.
    #[error("No package.json found at {path}")]
    NoManifest { path: PathBuf },

    /// Failed to parse a manifest, with location details.
    #[error("Failed to parse {path}:\n  {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// The selection list came out empty.
    #[error("No runnable scripts found under {root}\n\nTip: Library packages (those with an \"exports\" field) are skipped; pass --include-libraries to list them.")]
    NoRunnableScripts { root: PathBuf },

    /// `--package` matched nothing.
    #[error("Package '{name}' not found\n\nAvailable packages: {available}")]
    PackageNotFound { name: String, available: String },

    /// Script not found.
    #[error("Script '{name}' not found")]
    ScriptNotFound { name: String },

    /// Script not found, with suggestions.
    #[error("Script '{name}' not found\n\nDid you mean: {suggestions}?\n\nRun 'runx --list' to see all available scripts.")]
    ScriptNotFoundWithSuggestions { name: String, suggestions: String },

    /// Script name present in more than one package.
    #[error("Script '{name}' exists in several packages: {packages}\n\nTip: Use --package to pick one.")]
    AmbiguousScript { name: String, packages: String },

    /// The package manager could not be spawned.
    #[error("Failed to start '{command}' in {dir}: {source}")]
    SpawnFailed {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },
}

impl RunxError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunxError::NoProjectRoot { .. }
            | RunxError::NoManifest { .. }
            | RunxError::InvalidManifest { .. } => exit_code::NO_MANIFEST,
            RunxError::NoRunnableScripts { .. } => exit_code::NO_SCRIPTS,
            RunxError::PackageNotFound { .. }
            | RunxError::ScriptNotFound { .. }
            | RunxError::ScriptNotFoundWithSuggestions { .. }
            | RunxError::AmbiguousScript { .. } => exit_code::GENERAL_ERROR,
            RunxError::SpawnFailed { .. } => exit_code::SCRIPT_FAILED,
            RunxError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
        }
    }

    /// Create a script not found error with suggestions from the known names.
    pub fn script_not_found(name: &str, known: &[&str]) -> Self {
        let suggestions = find_similar(name, known);
        if suggestions.is_empty() {
            RunxError::ScriptNotFound {
                name: name.to_string(),
            }
        } else {
            RunxError::ScriptNotFoundWithSuggestions {
                name: name.to_string(),
                suggestions: suggestions.join(", "),
            }
        }
    }
}

/// Up to three known names close to `name`, best first.
fn find_similar(name: &str, known: &[&str]) -> Vec<String> {
    let name_lower = name.to_lowercase();
    let mut seen = HashSet::new();
    let mut matches: Vec<(&str, usize)> = known
        .iter()
        .filter(|&&candidate| seen.insert(candidate))
        .filter_map(|&candidate| {
            let lower = candidate.to_lowercase();
            let dist = edit_distance(&name_lower, &lower);
            if dist <= 3 || lower.contains(&name_lower) || name_lower.contains(&lower) {
                Some((candidate, dist))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by_key(|&(_, d)| d);

    matches
        .into_iter()
        .take(3)
        .map(|(s, _)| format!("'{s}'"))
        .collect()
}

/// Levenshtein distance over chars, single-row.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }
    row[b.len()]
}
