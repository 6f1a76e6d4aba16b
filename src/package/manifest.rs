//! `package.json` reading and the script types built from it.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::error::RunxError;

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// A script declared in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    name: String,
    command: String,
}

impl Script {
    /// Create a new script.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// The script name, as passed to `<agent> run`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shell command the script expands to.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.command)
    }
}

/// Scripts of one package, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripts {
    scripts: Vec<Script>,
}

impl Scripts {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, command)` pairs, keeping their order.
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            scripts: pairs
                .into_iter()
                .map(|(name, command)| Script::new(name, command))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Script> {
        self.scripts.iter()
    }

    /// Look a script up by exact name.
    pub fn get(&self, name: &str) -> Option<&Script> {
        self.scripts.iter().find(|s| s.name == name)
    }

    /// Whether a script with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Script names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.scripts.iter().map(|s| s.name()).collect()
    }
}

impl<'a> IntoIterator for &'a Scripts {
    type Item = &'a Script;
    type IntoIter = std::slice::Iter<'a, Script>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.iter()
    }
}

/// The parts of `package.json` runx cares about.
///
/// Fields are kept loose (`Value`) where real-world manifests vary in
/// shape, so one odd field does not make the whole file unreadable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    /// Package manager specification, e.g. `pnpm@9.1.0`.
    #[serde(default, rename = "packageManager")]
    pub package_manager: Option<String>,

    #[serde(default)]
    scripts: Option<Value>,

    /// Public entry-point map. Its presence marks a library package.
    #[serde(default)]
    exports: Option<Value>,

    #[serde(default)]
    workspaces: Option<Value>,
}

impl Manifest {
    /// Whether the manifest declares an `exports` map.
    pub fn has_exports(&self) -> bool {
        self.exports.as_ref().is_some_and(|v| !v.is_null())
    }

    /// Runnable scripts in declaration order.
    ///
    /// `//`-prefixed keys are comments and non-string values are not
    /// runnable; both are left out.
    pub fn scripts(&self) -> Scripts {
        let Some(Value::Object(map)) = &self.scripts else {
            return Scripts::new();
        };

        Scripts::from_pairs(
            map.iter()
                .filter(|(name, _)| !name.starts_with("//"))
                .filter_map(|(name, value)| value.as_str().map(|cmd| (name.as_str(), cmd))),
        )
    }

    /// Workspace patterns from the `workspaces` field.
    ///
    /// Accepts the array form and the yarn object form
    /// `{ "packages": [...] }`. Returns `None` when the field is absent,
    /// lists no patterns, or has any other shape.
    pub fn workspace_patterns(&self) -> Option<Vec<String>> {
        let list = match self.workspaces.as_ref()? {
            Value::Array(items) => items,
            Value::Object(obj) => obj.get("packages")?.as_array()?,
            _ => return None,
        };

        let patterns: Vec<String> = list
            .iter()
            .filter_map(|v| v.as_str())
            .map(String::from)
            .collect();

        (!patterns.is_empty()).then_some(patterns)
    }

    /// The package name, or `fallback` when it is missing or blank.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => fallback,
        }
    }
}

/// Parse manifest content.
///
/// # Errors
///
/// Returns an error with line/column context if the JSON is malformed.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    serde_json::from_str(content).map_err(|e| {
        let msg = format_json_error(content, &e);
        anyhow::anyhow!("Failed to parse package.json: {msg}")
    })
}

/// Read `package.json` from a directory.
///
/// Returns `Ok(None)` when the directory has no manifest.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_manifest(dir: &Path) -> Result<Option<Manifest>> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let manifest: Manifest = serde_json::from_str(&content).map_err(|e| RunxError::InvalidManifest {
        message: format_json_error(&content, &e),
        path,
    })?;

    Ok(Some(manifest))
}

/// Format a JSON error with the offending line and a caret under the column.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    match content.lines().nth(line.saturating_sub(1)) {
        Some(error_line) => {
            let pointer = " ".repeat(column.saturating_sub(1)) + "^";
            format!("{error}\n  at line {line}, column {column}:\n    {error_line}\n    {pointer}")
        }
        None => format!("{error} at line {line}, column {column}"),
    }
}
