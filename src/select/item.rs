//! Quick-pick list entries.

use std::path::{Path, PathBuf};

use crate::package::{MonorepoPackage, Script};
use crate::utils::relative_dir;

/// One script in one package, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTarget {
    /// Owning package name.
    pub package_name: String,
    /// Package directory; the script runs here.
    pub dir: PathBuf,
    /// Script name as declared in the manifest.
    pub script: String,
    /// The script's shell command.
    pub command: String,
}

impl ScriptTarget {
    pub fn new(package: &MonorepoPackage, script: &Script) -> Self {
        Self {
            package_name: package.name.clone(),
            dir: package.dir.clone(),
            script: script.name().to_string(),
            command: script.command().to_string(),
        }
    }

    /// Directory shown next to the script.
    pub fn detail(&self) -> String {
        self.dir.display().to_string()
    }

    /// Directory relative to `root`, or `.` for the root itself.
    pub fn relative_dir(&self, root: &Path) -> String {
        relative_dir(&self.dir, root)
    }
}

/// An entry in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickItem {
    /// Non-selectable group header, labelled with a package name.
    Separator { label: String },
    /// A runnable script.
    Script(ScriptTarget),
}

impl PickItem {
    pub fn separator(label: impl Into<String>) -> Self {
        PickItem::Separator {
            label: label.into(),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, PickItem::Separator { .. })
    }

    /// Script name, or the package name for a separator.
    pub fn label(&self) -> &str {
        match self {
            PickItem::Separator { label } => label,
            PickItem::Script(target) => &target.script,
        }
    }

    /// The script's shell command.
    pub fn description(&self) -> Option<&str> {
        match self {
            PickItem::Separator { .. } => None,
            PickItem::Script(target) => Some(&target.command),
        }
    }

    /// The package directory.
    pub fn detail(&self) -> Option<String> {
        match self {
            PickItem::Separator { .. } => None,
            PickItem::Script(target) => Some(target.detail()),
        }
    }

    pub fn as_script(&self) -> Option<&ScriptTarget> {
        match self {
            PickItem::Separator { .. } => None,
            PickItem::Script(target) => Some(target),
        }
    }
}
